// ABOUTME: Loads the sync configuration from a .env-style key-value file
// ABOUTME: Validates required keys and supplies defaults for optional ones

use crate::{util::split_list, Error, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

pub const DEFAULT_CONFIG_FILE: &str = ".env";
pub const DEFAULT_FORMAT: &str = "strings";

pub const KEY_BASE_URL: &str = "TRADUORA_BASE_URL";
pub const KEY_EMAIL: &str = "TRADUORA_EMAIL";
pub const KEY_PASSWORD: &str = "TRADUORA_PASSWORD";
pub const KEY_PROJECT_ID: &str = "PROJECT_ID";
pub const KEY_LOCALIZATION_PATH: &str = "LOCALIZATION_PATH";
pub const KEY_TARGET_LOCALES: &str = "TARGET_LOCALES";
pub const KEY_FORMAT: &str = "FORMAT";

pub const REQUIRED_KEYS: [&str; 6] = [
    KEY_BASE_URL,
    KEY_EMAIL,
    KEY_PASSWORD,
    KEY_PROJECT_ID,
    KEY_LOCALIZATION_PATH,
    KEY_TARGET_LOCALES,
];

/// Printed when the configuration file is missing.
pub const USAGE_GUIDANCE: &str = r#"Create a .env file with the following keys:

  TRADUORA_BASE_URL   remote service root URL
  TRADUORA_EMAIL      account email used to authenticate
  TRADUORA_PASSWORD   account password
  PROJECT_ID          project identifier
  LOCALIZATION_PATH   output directory for <locale>.lproj folders
  TARGET_LOCALES      comma-separated locale codes
  FORMAT              export format (optional, defaults to "strings")

Example:

  TRADUORA_BASE_URL=https://traduora.example.com
  TRADUORA_EMAIL=ci@example.com
  TRADUORA_PASSWORD="s3cret"
  PROJECT_ID=6f1e2c3a-0000-4000-8000-000000000000
  LOCALIZATION_PATH=./App/Resources
  TARGET_LOCALES=en,es-MX,fr
"#;

#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub email: String,
    pub password: String,
    pub project_id: String,
    pub localization_path: String,
    pub target_locales: Vec<String>,
    pub format: String,
}

// Keep the password out of debug output.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("project_id", &self.project_id)
            .field("localization_path", &self.localization_path)
            .field("target_locales", &self.target_locales)
            .field("format", &self.format)
            .finish()
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::Configuration(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let values = parse_key_values(content);

        let missing: Vec<&str> = REQUIRED_KEYS
            .iter()
            .copied()
            .filter(|key| values.get(*key).map_or(true, |v| v.is_empty()))
            .collect();
        if !missing.is_empty() {
            return Err(Error::Configuration(format!(
                "missing required keys: {}",
                missing.join(", ")
            )));
        }

        let target_locales = split_list(&values[KEY_TARGET_LOCALES]);
        if target_locales.is_empty() {
            return Err(Error::Configuration(format!(
                "{} contains no locale codes",
                KEY_TARGET_LOCALES
            )));
        }

        let format = values
            .get(KEY_FORMAT)
            .filter(|v| !v.is_empty())
            .cloned()
            .unwrap_or_else(|| DEFAULT_FORMAT.to_string());

        Ok(Config {
            base_url: values[KEY_BASE_URL].trim_end_matches('/').to_string(),
            email: values[KEY_EMAIL].clone(),
            password: values[KEY_PASSWORD].clone(),
            project_id: values[KEY_PROJECT_ID].clone(),
            localization_path: values[KEY_LOCALIZATION_PATH].clone(),
            target_locales,
            format,
        })
    }

    pub fn with_format(mut self, format: Option<String>) -> Self {
        if let Some(format) = format.filter(|f| !f.is_empty()) {
            self.format = format;
        }
        self
    }

    pub fn with_localization_path(mut self, path: Option<String>) -> Self {
        if let Some(path) = path {
            self.localization_path = path;
        }
        self
    }
}

/// Parses `KEY=value` lines. Comments, blank lines and lines without `=`
/// are skipped; the last occurrence of a key wins.
pub fn parse_key_values(content: &str) -> HashMap<String, String> {
    let mut values = HashMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };

        values.insert(key.trim().to_string(), unquote(value.trim()).to_string());
    }

    values
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

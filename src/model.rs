// ABOUTME: Serde data models for Traduora API requests and responses
// ABOUTME: Tolerant parsing that ignores fields the sync does not use

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct TokenRequest<'a> {
    pub grant_type: &'a str,
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslationsResponse {
    pub data: Vec<ProjectLocale>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectLocale {
    pub locale: Locale,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Locale {
    pub code: String,
    #[serde(default)]
    pub language: Option<String>,
}

impl TranslationsResponse {
    pub fn into_codes(self) -> Vec<String> {
        self.data.into_iter().map(|entry| entry.locale.code).collect()
    }
}

// ABOUTME: Output layout for <locale>.lproj folders with atomic writes
// ABOUTME: Rejects locale codes that would escape the localization root

use crate::{Error, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const STRINGS_FILE_NAME: &str = "Localizable.strings";
const LOCALE_DIR_SUFFIX: &str = ".lproj";

pub struct OutputLayout {
    pub root: PathBuf,
}

impl OutputLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        OutputLayout { root: root.into() }
    }

    pub fn locale_dir(&self, locale: &str) -> Result<PathBuf> {
        validate_locale(locale)?;
        Ok(self.root.join(format!("{}{}", locale, LOCALE_DIR_SUFFIX)))
    }

    pub fn strings_file(&self, locale: &str) -> Result<PathBuf> {
        Ok(self.locale_dir(locale)?.join(STRINGS_FILE_NAME))
    }

    /// Creates `<root>/<locale>.lproj` and any missing parents.
    pub fn ensure_locale_dir(&self, locale: &str) -> Result<PathBuf> {
        let dir = self.locale_dir(locale)?;
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}

fn validate_locale(locale: &str) -> Result<()> {
    let unsafe_component = locale.is_empty()
        || locale == "."
        || locale == ".."
        || locale.contains(['/', '\\'])
        || locale.contains('\0');

    if unsafe_component {
        return Err(Error::Filesystem(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("locale code {:?} is not a valid directory name", locale),
        )));
    }
    Ok(())
}

/// Writes through a temp file in the destination directory and renames it
/// into place. The temp file is removed if anything fails.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    use rand::Rng;

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("output");

    let random: u32 = rand::thread_rng().gen();
    let tmp_path = dir.join(format!(".{}.{:x}.part", file_name, random));

    let result = fs::write(&tmp_path, content).and_then(|_| fs::rename(&tmp_path, path));
    if let Err(e) = result {
        let _ = fs::remove_file(&tmp_path);
        return Err(Error::Filesystem(e));
    }

    debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

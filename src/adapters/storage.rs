use crate::core::{PreferenceStore, Result};
use crate::domain::locale::Locale;
use crate::utils::error::ScreeningError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Serialize, Deserialize)]
struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    /// Keys written by other tools are preserved untouched.
    #[serde(flatten)]
    other: serde_json::Map<String, serde_json::Value>,
}

/// Preferences kept as a JSON object in a single file.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Preferences> {
        if !self.path.exists() {
            return Ok(Preferences::default());
        }
        let data = fs::read(&self.path)?;
        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(Preferences::default());
        }
        Ok(serde_json::from_slice(&data)?)
    }

    /// Like `load`, but a file that does not parse counts as empty.
    fn load_or_default(&self) -> Result<Preferences> {
        match self.load() {
            Err(ScreeningError::SerializationError(e)) => {
                tracing::warn!(
                    "Ignoring unreadable preference file {}: {}",
                    self.path.display(),
                    e
                );
                Ok(Preferences::default())
            }
            other => other,
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn language(&self) -> Result<Option<Locale>> {
        let prefs = self.load_or_default()?;
        match prefs.language {
            None => Ok(None),
            Some(code) => match code.parse::<Locale>() {
                Ok(locale) => Ok(Some(locale)),
                Err(_) => {
                    tracing::warn!("Ignoring unsupported stored language '{}'", code);
                    Ok(None)
                }
            },
        }
    }

    fn set_language(&self, locale: Locale) -> Result<()> {
        let mut prefs = self.load_or_default()?;
        prefs.language = Some(locale.code().to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_vec_pretty(&prefs)?)?;
        tracing::debug!("Stored language '{}' in {}", locale, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_means_no_preference() {
        let dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("prefs.json"));
        assert_eq!(store.language().unwrap(), None);
        assert_eq!(store.resolve_locale(Locale::En).unwrap(), Locale::En);
    }

    #[test]
    fn test_set_then_read_language() {
        let dir = TempDir::new().unwrap();
        let store = FilePreferenceStore::new(dir.path().join("nested/prefs.json"));
        store.set_language(Locale::Es).unwrap();
        assert_eq!(store.language().unwrap(), Some(Locale::Es));
        assert_eq!(store.resolve_locale(Locale::En).unwrap(), Locale::Es);
    }

    #[test]
    fn test_unknown_keys_survive_updates() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"language": "en", "cameraPermission": true}"#).unwrap();

        let store = FilePreferenceStore::new(&path);
        store.set_language(Locale::Es).unwrap();

        let raw: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(raw["language"], "es");
        assert_eq!(raw["cameraPermission"], true);
    }

    #[test]
    fn test_unsupported_stored_language_is_ignored() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"language": "fr"}"#).unwrap();
        assert_eq!(FilePreferenceStore::new(&path).language().unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_default_locale() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{truncated").unwrap();

        let store = FilePreferenceStore::new(&path);
        assert_eq!(store.language().unwrap(), None);
        assert_eq!(store.resolve_locale(Locale::En).unwrap(), Locale::En);
    }

    #[test]
    fn test_set_language_repairs_corrupt_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{truncated").unwrap();

        let store = FilePreferenceStore::new(&path);
        store.set_language(Locale::Es).unwrap();
        assert_eq!(store.language().unwrap(), Some(Locale::Es));

        let raw: serde_json::Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(raw["language"], "es");
    }

    #[test]
    fn test_wrongly_typed_language_is_ignored() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, r#"{"language": 5}"#).unwrap();
        assert_eq!(FilePreferenceStore::new(&path).language().unwrap(), None);
    }
}

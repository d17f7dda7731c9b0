use std::path::Path;

use snafu::prelude::*;

use crate::domain::entity::Settings;
use crate::domain::repository::settings::{LoadSettingsError, SaveSettingsError};
use crate::domain::repository::SettingsRepository;
use crate::storage::record::RecordFile;

/// A [`SettingsRepository`] implementation persisting a TOML record, kept
/// user-editable so preferences can also be changed with a text editor.
pub struct SettingsFile {
    record: RecordFile,
}

impl SettingsFile {
    /// Creates a new [`SettingsFile`].
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            record: RecordFile::new(path),
        }
    }
}

#[async_trait::async_trait]
impl SettingsRepository for SettingsFile {
    async fn load(&self) -> Result<Option<Settings>, LoadSettingsError> {
        let content = whatever!(self.record.read(), "Could not read settings record");
        let Some(content) = content else {
            return Ok(None);
        };

        let settings: Settings =
            whatever!(toml::from_str(&content), "Could not parse settings record");
        Ok(Some(settings.sanitized()))
    }

    async fn save(&self, settings: &Settings) -> Result<(), SaveSettingsError> {
        let content = whatever!(
            toml::to_string_pretty(settings),
            "Could not serialize settings",
        );
        whatever!(
            self.record.write(&content),
            "Could not write settings record",
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use assert_fs::prelude::*;
    use assert_fs::TempDir;

    #[tokio::test]
    async fn load_missing_record_yields_none() {
        let tmp = TempDir::new().expect("Test environment should support temporary directories");
        let repository = SettingsFile::new(tmp.child("settings.toml").to_path_buf());

        assert_eq!(repository.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let tmp = TempDir::new().expect("Test environment should support temporary directories");
        let repository = SettingsFile::new(tmp.child("settings.toml").to_path_buf());

        let settings = Settings {
            focus_minutes: 50,
            auto_start_breaks: true,
            ..Settings::default()
        };
        repository.save(&settings).await.unwrap();

        assert_eq!(repository.load().await.unwrap(), Some(settings));
    }

    #[tokio::test]
    async fn load_merges_partial_record() {
        let tmp = TempDir::new().expect("Test environment should support temporary directories");
        let file = tmp.child("settings.toml");
        file.write_str("focus_minutes = 40\n").unwrap();

        let repository = SettingsFile::new(file.to_path_buf());
        let settings = repository.load().await.unwrap().unwrap();

        assert_eq!(settings.focus_minutes, 40);
        assert_eq!(settings.short_break_minutes, 5);
        assert!(!settings.auto_start_breaks);
    }

    #[tokio::test]
    async fn load_sanitizes_zero_duration() {
        let tmp = TempDir::new().expect("Test environment should support temporary directories");
        let file = tmp.child("settings.toml");
        file.write_str("focus_minutes = 0\n").unwrap();

        let repository = SettingsFile::new(file.to_path_buf());
        let settings = repository.load().await.unwrap().unwrap();

        assert_eq!(settings.focus_minutes, 25);
    }

    #[tokio::test]
    async fn load_rejects_malformed_record() {
        let tmp = TempDir::new().expect("Test environment should support temporary directories");
        let file = tmp.child("settings.toml");
        file.write_str("not toml at all [").unwrap();

        let repository = SettingsFile::new(file.to_path_buf());
        assert!(repository.load().await.is_err());
    }
}

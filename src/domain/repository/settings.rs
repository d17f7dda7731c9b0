use std::error::Error as StdError;

use snafu::prelude::*;

use crate::domain::entity::Settings;

/// An abstract interface for the persisted settings record.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SettingsRepository: Send + Sync + 'static {
    /// Load the saved settings. Yields `None` when nothing has been saved
    /// yet, in which case callers fall back to defaults.
    ///
    /// # Errors
    ///
    /// This function will return an error if the record exists but cannot
    /// be read or parsed.
    async fn load(&self) -> Result<Option<Settings>, LoadSettingsError>;

    /// Persist the settings, replacing any previous record.
    ///
    /// # Errors
    ///
    /// This function will return an error if the record cannot be written.
    async fn save(&self, settings: &Settings) -> Result<(), SaveSettingsError>;
}

/// An error type of loading the persisted [`Settings`].
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum LoadSettingsError {
    #[snafu(whatever, display("Load settings failed: {message}"))]
    #[non_exhaustive]
    Unknown {
        message: String,
        #[snafu(source(from(Box<dyn StdError>, Some)))]
        source: Option<Box<dyn StdError>>,
    },
}

/// An error type of saving the persisted [`Settings`].
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum SaveSettingsError {
    #[snafu(whatever, display("Save settings failed: {message}"))]
    #[non_exhaustive]
    Unknown {
        message: String,
        #[snafu(source(from(Box<dyn StdError>, Some)))]
        source: Option<Box<dyn StdError>>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn settings_repository_load() {
        let mock = init_mock();

        assert_eq!(mock.load().await.unwrap(), Some(Settings::default()));
        assert!(mock.save(&Settings::default()).await.is_err());
    }

    fn init_mock() -> MockSettingsRepository {
        let mut mock = MockSettingsRepository::new();
        mock.expect_load()
            .returning(|| Ok(Some(Settings::default())));
        mock.expect_save().returning(|_| whatever!("error"));
        mock
    }
}

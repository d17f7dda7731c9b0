use std::error::Error as StdError;

use snafu::prelude::*;

use crate::domain::entity::Stats;

/// An abstract interface for the persisted stats record.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait StatsRepository: Send + Sync + 'static {
    /// Load the saved stats. Yields `None` when nothing has been saved yet,
    /// in which case counters start from zero.
    ///
    /// # Errors
    ///
    /// This function will return an error if the record exists but cannot
    /// be read or parsed.
    async fn load(&self) -> Result<Option<Stats>, LoadStatsError>;

    /// Persist the stats, replacing any previous record.
    ///
    /// # Errors
    ///
    /// This function will return an error if the record cannot be written.
    async fn save(&self, stats: &Stats) -> Result<(), SaveStatsError>;
}

/// An error type of loading the persisted [`Stats`].
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum LoadStatsError {
    #[snafu(whatever, display("Load stats failed: {message}"))]
    #[non_exhaustive]
    Unknown {
        message: String,
        #[snafu(source(from(Box<dyn StdError>, Some)))]
        source: Option<Box<dyn StdError>>,
    },
}

/// An error type of saving the persisted [`Stats`].
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum SaveStatsError {
    #[snafu(whatever, display("Save stats failed: {message}"))]
    #[non_exhaustive]
    Unknown {
        message: String,
        #[snafu(source(from(Box<dyn StdError>, Some)))]
        source: Option<Box<dyn StdError>>,
    },
}

use std::path::Path;

use snafu::prelude::*;

use crate::domain::entity::Stats;
use crate::domain::repository::stats::{LoadStatsError, SaveStatsError};
use crate::domain::repository::StatsRepository;
use crate::storage::record::RecordFile;

/// A [`StatsRepository`] implementation persisting a JSON record.
pub struct StatsFile {
    record: RecordFile,
}

impl StatsFile {
    /// Creates a new [`StatsFile`].
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            record: RecordFile::new(path),
        }
    }
}

#[async_trait::async_trait]
impl StatsRepository for StatsFile {
    async fn load(&self) -> Result<Option<Stats>, LoadStatsError> {
        let content = whatever!(self.record.read(), "Could not read stats record");
        let Some(content) = content else {
            return Ok(None);
        };

        let stats = whatever!(
            serde_json::from_str(&content),
            "Could not parse stats record",
        );
        Ok(Some(stats))
    }

    async fn save(&self, stats: &Stats) -> Result<(), SaveStatsError> {
        let content = whatever!(
            serde_json::to_string_pretty(stats),
            "Could not serialize stats",
        );
        whatever!(self.record.write(&content), "Could not write stats record");
        Ok(())
    }
}

mod record;
mod settings;
mod stats;

pub use record::{RecordFile, RecordFileError};
pub use settings::SettingsFile;
pub use stats::StatsFile;

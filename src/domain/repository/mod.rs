pub mod settings;
pub mod stats;

pub use settings::SettingsRepository;
pub use stats::StatsRepository;

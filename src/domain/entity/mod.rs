pub mod mode;
pub mod settings;
pub mod stats;

pub use mode::Mode;
pub use settings::{Settings, SettingsPatch};
pub use stats::Stats;

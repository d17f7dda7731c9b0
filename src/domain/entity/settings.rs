use serde::{Deserialize, Serialize};

use crate::domain::entity::Mode;

/// Persisted user preferences: the length of each session kind in minutes,
/// plus the auto-start behavior for each side of the work/break cycle.
///
/// Missing fields take their defaults on deserialization and unknown fields
/// are ignored, so records written by older or newer versions still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub focus_minutes: u64,
    pub short_break_minutes: u64,
    pub long_break_minutes: u64,
    pub auto_start_breaks: bool,
    pub auto_start_pomodoros: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            focus_minutes: 25,
            short_break_minutes: 5,
            long_break_minutes: 15,
            auto_start_breaks: false,
            auto_start_pomodoros: false,
        }
    }
}

impl Settings {
    /// Get the configured length of one `mode` session in minutes.
    pub fn minutes(&self, mode: Mode) -> u64 {
        match mode {
            Mode::Focus => self.focus_minutes,
            Mode::ShortBreak => self.short_break_minutes,
            Mode::LongBreak => self.long_break_minutes,
        }
    }

    /// Get the countdown length for one `mode` session in seconds.
    pub fn duration_secs(&self, mode: Mode) -> u64 {
        self.minutes(mode) * 60
    }

    /// Replace non-positive durations with their defaults. A hand-edited
    /// record may carry a zero, which would make a session complete on its
    /// first tick.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        if self.focus_minutes == 0 {
            self.focus_minutes = defaults.focus_minutes;
        }
        if self.short_break_minutes == 0 {
            self.short_break_minutes = defaults.short_break_minutes;
        }
        if self.long_break_minutes == 0 {
            self.long_break_minutes = defaults.long_break_minutes;
        }
        self
    }

    /// Merge a partial update. Fields the patch leaves out keep their
    /// previous values, as do duration fields the patch sets to an invalid
    /// (zero) value.
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(minutes) = patch.focus_minutes.filter(|&m| m > 0) {
            self.focus_minutes = minutes;
        }
        if let Some(minutes) = patch.short_break_minutes.filter(|&m| m > 0) {
            self.short_break_minutes = minutes;
        }
        if let Some(minutes) = patch.long_break_minutes.filter(|&m| m > 0) {
            self.long_break_minutes = minutes;
        }
        if let Some(auto) = patch.auto_start_breaks {
            self.auto_start_breaks = auto;
        }
        if let Some(auto) = patch.auto_start_pomodoros {
            self.auto_start_pomodoros = auto;
        }
    }
}

/// A partial update to [`Settings`]. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub focus_minutes: Option<u64>,
    pub short_break_minutes: Option<u64>,
    pub long_break_minutes: Option<u64>,
    pub auto_start_breaks: Option<bool>,
    pub auto_start_pomodoros: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.minutes(Mode::Focus), 25);
        assert_eq!(settings.minutes(Mode::ShortBreak), 5);
        assert_eq!(settings.minutes(Mode::LongBreak), 15);
        assert!(!settings.auto_start_breaks);
        assert!(!settings.auto_start_pomodoros);
    }

    #[test]
    fn settings_duration_secs() {
        let settings = Settings::default();
        assert_eq!(settings.duration_secs(Mode::Focus), 1500);
        assert_eq!(settings.duration_secs(Mode::ShortBreak), 300);
        assert_eq!(settings.duration_secs(Mode::LongBreak), 900);
    }

    #[test]
    fn settings_sanitized_replaces_zero_durations() {
        let settings = Settings {
            focus_minutes: 0,
            short_break_minutes: 10,
            long_break_minutes: 0,
            ..Settings::default()
        };

        let settings = settings.sanitized();
        assert_eq!(settings.focus_minutes, 25);
        assert_eq!(settings.short_break_minutes, 10);
        assert_eq!(settings.long_break_minutes, 15);
    }

    #[test]
    fn settings_apply_merges_valid_fields() {
        let mut settings = Settings::default();
        settings.apply(SettingsPatch {
            focus_minutes: Some(30),
            auto_start_breaks: Some(true),
            ..SettingsPatch::default()
        });

        assert_eq!(settings.focus_minutes, 30);
        assert_eq!(settings.short_break_minutes, 5);
        assert!(settings.auto_start_breaks);
        assert!(!settings.auto_start_pomodoros);
    }

    #[test]
    fn settings_apply_keeps_previous_value_for_invalid_duration() {
        let mut settings = Settings::default();
        settings.apply(SettingsPatch {
            focus_minutes: Some(0),
            ..SettingsPatch::default()
        });

        assert_eq!(settings.focus_minutes, 25);
    }

    #[test]
    fn settings_round_trip() {
        let settings = Settings {
            focus_minutes: 50,
            auto_start_pomodoros: true,
            ..Settings::default()
        };

        let content = toml::to_string(&settings).unwrap();
        let loaded: Settings = toml::from_str(&content).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn settings_deserialize_merges_missing_and_unknown_fields() {
        let content = "focus_minutes = 40\nunknown_field = \"whatever\"\n";
        let loaded: Settings = toml::from_str(content).unwrap();
        assert_eq!(loaded.focus_minutes, 40);
        assert_eq!(loaded.short_break_minutes, 5);
        assert_eq!(loaded.long_break_minutes, 15);
    }
}

use std::fmt::{Display, Formatter, Result as FmtResult};

/// The kind of session the countdown is measuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Focus,
    ShortBreak,
    LongBreak,
}

impl Mode {
    /// Get an initialized [`Mode`].
    pub fn initial() -> Self {
        Self::Focus
    }

    /// Get the [`Mode`] entered when a session of this mode runs down to
    /// zero. The automatic cycle only alternates between focus sessions and
    /// short breaks; a long break is reachable solely through an explicit
    /// mode switch.
    pub fn after_completion(self) -> Self {
        match self {
            Self::Focus => Self::ShortBreak,
            Self::ShortBreak | Self::LongBreak => Self::Focus,
        }
    }

    /// Returns `true` if this [`Mode`] is one of the break modes.
    pub fn is_break(self) -> bool {
        matches!(self, Self::ShortBreak | Self::LongBreak)
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Focus => f.write_str("Focus"),
            Self::ShortBreak => f.write_str("Short Break"),
            Self::LongBreak => f.write_str("Long Break"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_after_completion() {
        let mode = Mode::initial();
        assert_eq!(mode, Mode::Focus);
        let mode = mode.after_completion();
        assert_eq!(mode, Mode::ShortBreak);
        let mode = mode.after_completion();
        assert_eq!(mode, Mode::Focus);
        assert_eq!(Mode::LongBreak.after_completion(), Mode::Focus);
    }

    #[test]
    fn mode_is_break() {
        assert!(!Mode::Focus.is_break());
        assert!(Mode::ShortBreak.is_break());
        assert!(Mode::LongBreak.is_break());
    }
}

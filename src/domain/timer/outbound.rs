use std::error::Error as StdError;

use snafu::prelude::*;

/// Which side of the work/break cycle just finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Focus,
    Break,
}

/// A public port for emitting a best-effort session-end alert. The timer
/// logs and ignores failures; an alert that cannot be shown never blocks a
/// state transition.
#[async_trait::async_trait]
pub trait NotifyPort: Send + Sync + 'static {
    /// Emit an alert for a finished session of the given kind.
    ///
    /// # Errors
    ///
    /// This function will return an error if failed to make an alert.
    async fn alert_session_end(&self, kind: AlertKind) -> Result<(), NotifyError>;
}

/// An error type of the alert operation.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum NotifyError {
    #[snafu(whatever, display("Could not emit a notification: {message}"))]
    Unknown {
        message: String,
        #[snafu(source(from(Box<dyn StdError>, Some)))]
        source: Option<Box<dyn StdError>>,
    },
}

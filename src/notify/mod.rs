use notify_rust::Notification;
use snafu::prelude::*;

use crate::domain::timer::outbound::{AlertKind, NotifyError, NotifyPort};

/// A [`NotifyPort`] implementation emitting XDG desktop notifications.
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    app_name: String,
}

impl DesktopNotifier {
    /// Creates a new [`DesktopNotifier`].
    pub fn new(app_name: String) -> Self {
        Self { app_name }
    }
}

#[async_trait::async_trait]
impl NotifyPort for DesktopNotifier {
    async fn alert_session_end(&self, kind: AlertKind) -> Result<(), NotifyError> {
        let (summary, body) = match kind {
            AlertKind::Focus => ("Focus Session Finished", "Time for a break."),
            AlertKind::Break => ("Break Finished", "Ready to work?"),
        };

        let mut notification = Notification::new();
        notification.appname(&self.app_name);
        notification.summary(summary);
        notification.body(body);

        let _ = whatever!(
            notification.show_async().await,
            "Could not show notification",
        );

        Ok(())
    }
}

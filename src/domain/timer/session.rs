use std::sync::Arc;

use snafu::prelude::*;

use crate::domain::entity::{Mode, Settings, SettingsPatch, Stats};
use crate::domain::repository::settings::LoadSettingsError;
use crate::domain::repository::stats::LoadStatsError;
use crate::domain::repository::{SettingsRepository, StatsRepository};
use crate::domain::timer::clock::{Clock, TickSubscription};
use crate::domain::timer::observer::TimerObserver;
use crate::domain::timer::outbound::{AlertKind, NotifyPort};
use crate::tracing_report;

/// The session timer state machine. Owns the current mode, the countdown,
/// the settings and the cumulative stats, and drives every transition
/// between them. Collaborators are injected at construction: a [`Clock`]
/// delivering ticks, repositories persisting settings and stats, and a
/// [`NotifyPort`] emitting session-end alerts.
///
/// The timer is running exactly while it holds a clock subscription. The
/// `Option` holding the handle is the whole running flag, so a second
/// outstanding subscription cannot exist.
pub struct SessionTimer {
    mode: Mode,
    remaining_seconds: u64,
    settings: Settings,
    stats: Stats,
    subscription: Option<Box<dyn TickSubscription>>,
    clock: Arc<dyn Clock>,
    settings_repository: Arc<dyn SettingsRepository>,
    stats_repository: Arc<dyn StatsRepository>,
    notifier: Arc<dyn NotifyPort>,
    observers: Vec<Box<dyn TimerObserver>>,
}

impl SessionTimer {
    /// Load persisted settings and stats and seed an idle timer in focus
    /// mode with a full countdown. Absent records yield defaults.
    ///
    /// # Errors
    ///
    /// This function will return an error if either repository fails to
    /// load its record.
    pub async fn setup(
        clock: Arc<dyn Clock>,
        settings_repository: Arc<dyn SettingsRepository>,
        stats_repository: Arc<dyn StatsRepository>,
        notifier: Arc<dyn NotifyPort>,
    ) -> Result<Self, SetupSessionTimerError> {
        let settings = settings_repository
            .load()
            .await
            .context(SettingsSnafu)?
            .unwrap_or_default()
            .sanitized();
        let stats = stats_repository
            .load()
            .await
            .context(StatsSnafu)?
            .unwrap_or_default();

        let mode = Mode::initial();
        let remaining_seconds = settings.duration_secs(mode);

        Ok(Self {
            mode,
            remaining_seconds,
            settings,
            stats,
            subscription: None,
            clock,
            settings_repository,
            stats_repository,
            notifier,
            observers: Vec::new(),
        })
    }

    /// Register an observer to be informed of all subsequent state changes.
    pub fn observe(&mut self, observer: Box<dyn TimerObserver>) {
        self.observers.push(observer);
    }

    /// Returns the current [`Mode`].
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the remaining countdown in seconds.
    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    /// Returns `true` if the countdown is actively decrementing.
    pub fn is_running(&self) -> bool {
        self.subscription.is_some()
    }

    /// Returns a reference to the current [`Settings`].
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns the current [`Stats`].
    pub fn stats(&self) -> Stats {
        self.stats
    }

    /// Begin counting down. A no-op while already running, which keeps the
    /// clock subscription unique.
    pub fn start(&mut self) {
        if self.subscription.is_some() {
            return;
        }

        self.subscription = Some(self.clock.subscribe());
        self.emit(|observer| observer.on_run_state_changed(true));
    }

    /// Stop counting down, keeping mode and remaining time. A no-op while
    /// already idle. The clock subscription is canceled before returning.
    pub fn pause(&mut self) {
        let Some(subscription) = self.subscription.take() else {
            return;
        };

        subscription.cancel();
        self.emit(|observer| observer.on_run_state_changed(false));
    }

    /// Stop counting down and restore the current mode's full duration.
    /// Idempotent; the mode is left unchanged.
    pub fn reset(&mut self) {
        self.pause();
        self.remaining_seconds = self.settings.duration_secs(self.mode);
        self.emit(|observer| observer.on_tick(self.remaining_seconds, self.mode));
    }

    /// Advance the countdown by one second. Ticks arriving while idle are
    /// ignored; a subscription canceled in the same instant may still have
    /// one tick in flight. Reaching zero completes the session within the
    /// same call.
    pub async fn tick(&mut self) {
        if self.subscription.is_none() {
            return;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);

        if self.remaining_seconds == 0 {
            self.complete_session().await;
        } else {
            self.emit(|observer| observer.on_tick(self.remaining_seconds, self.mode));
        }
    }

    /// Switch to `mode` and restore its full duration. Always leaves the
    /// timer idle: a manual mode switch never auto-runs. The auto-advance
    /// path issues its own [`start`] afterwards when the settings say so.
    ///
    /// [`start`]: SessionTimer::start
    pub fn switch_mode(&mut self, mode: Mode) {
        self.pause();
        self.mode = mode;
        self.remaining_seconds = self.settings.duration_secs(mode);
        self.emit(|observer| observer.on_mode_changed(mode));
        self.emit(|observer| observer.on_tick(self.remaining_seconds, self.mode));
    }

    /// Merge a settings patch and persist the result. While idle the
    /// countdown is reseeded so the displayed duration reflects the edit;
    /// while running the countdown is left untouched, so an edit never
    /// truncates a session in progress. A failed write is logged and does
    /// not roll back the merge.
    pub async fn update_settings(&mut self, patch: SettingsPatch) {
        self.settings.apply(patch);

        if let Err(err) = self.settings_repository.save(&self.settings).await {
            tracing_report!(err);
        }

        if self.subscription.is_none() {
            self.remaining_seconds = self.settings.duration_secs(self.mode);
            self.emit(|observer| observer.on_tick(self.remaining_seconds, self.mode));
        }
    }

    /// Finish the current session: alert, account a completed focus
    /// session, then advance the mode and auto-start when configured. The
    /// automatic cycle alternates focus and short break; long breaks stay
    /// manual-only.
    async fn complete_session(&mut self) {
        self.pause();

        let finished = self.mode;
        let kind = if finished.is_break() {
            AlertKind::Break
        } else {
            AlertKind::Focus
        };

        if let Err(err) = self.notifier.alert_session_end(kind).await {
            tracing_report!(err);
        }

        if finished == Mode::Focus {
            self.stats
                .record_focus_session(self.settings.duration_secs(Mode::Focus));

            if let Err(err) = self.stats_repository.save(&self.stats).await {
                tracing_report!(err);
            }

            let stats = self.stats;
            self.emit(|observer| observer.on_stats_changed(&stats));
        }

        let next = finished.after_completion();
        self.switch_mode(next);

        let auto_start = if next.is_break() {
            self.settings.auto_start_breaks
        } else {
            self.settings.auto_start_pomodoros
        };

        if auto_start {
            self.start();
        }
    }

    fn emit<F: Fn(&dyn TimerObserver)>(&self, action: F) {
        for observer in &self.observers {
            action(observer.as_ref());
        }
    }
}

/// An error for initializing the session timer.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum SetupSessionTimerError {
    #[snafu(display("Could not load persisted settings"))]
    Settings { source: LoadSettingsError },
    #[snafu(display("Could not load persisted stats"))]
    Stats { source: LoadStatsError },
}

use crate::domain::entity::{Mode, Stats};

/// An outward-facing observer of timer state changes. Renderers and other
/// surfaces subscribe through [`SessionTimer::observe`] instead of polling.
/// All methods default to doing nothing, so implementors only override the
/// changes they care about.
///
/// [`SessionTimer::observe`]: crate::domain::timer::SessionTimer::observe
pub trait TimerObserver: Send + 'static {
    /// The countdown moved to a new remaining duration, either by ticking
    /// or by being reseeded after a reset, mode switch or settings edit.
    fn on_tick(&self, _remaining_seconds: u64, _mode: Mode) {}

    /// The current mode changed.
    fn on_mode_changed(&self, _mode: Mode) {}

    /// The cumulative counters changed after a completed focus session.
    fn on_stats_changed(&self, _stats: &Stats) {}

    /// The timer started or stopped counting down.
    fn on_run_state_changed(&self, _running: bool) {}
}

use std::path::PathBuf;
use std::sync::Arc;

use pomozen::domain::entity::{Mode, Stats};
use pomozen::domain::timer::{SessionTimer, TimerObserver};
use pomozen::notify::DesktopNotifier;
use pomozen::runtime::TokioClock;
use pomozen::storage::{SettingsFile, StatsFile};
use pomozen::utils::xdg::{Xdg, XdgBaseKind};
use snafu::{prelude::*, Whatever};
use tokio::sync::mpsc::Receiver;

use crate::cli::Arguments;

const APP_NAME: &str = "pomozen";

pub struct Bootstrap {
    pub timer: SessionTimer,
    pub ticks: Receiver<()>,
}

pub async fn bootstrap(arg: &Arguments) -> Result<Bootstrap, Whatever> {
    let settings_path = record_path(&arg.settings, XdgBaseKind::Config, "settings.toml")?;
    let stats_path = record_path(&arg.stats, XdgBaseKind::Data, "stats.json")?;

    let (sender, ticks) = tokio::sync::mpsc::channel(1);
    let clock = Arc::new(TokioClock::new(sender));
    let settings_repository = Arc::new(SettingsFile::new(settings_path));
    let stats_repository = Arc::new(StatsFile::new(stats_path));
    let notifier = Arc::new(DesktopNotifier::new(APP_NAME.to_owned()));

    let mut timer = SessionTimer::setup(clock, settings_repository, stats_repository, notifier)
        .await
        .whatever_context("Could not setup session timer")?;
    timer.observe(Box::new(ConsoleRenderer));

    Ok(Bootstrap { timer, ticks })
}

fn record_path(
    custom: &Option<PathBuf>,
    kind: XdgBaseKind,
    file: &str,
) -> Result<PathBuf, Whatever> {
    match custom {
        Some(path) => Ok(path.clone()),
        None => {
            let xdg = Xdg::new(APP_NAME).whatever_context("Could not use XDG base directories")?;
            xdg.resolve_create(kind, file)
                .whatever_context("Could not use XDG base directories")
        }
    }
}

pub fn format_remaining(remaining_seconds: u64) -> String {
    format!(
        "{:02}:{:02}",
        remaining_seconds / 60,
        remaining_seconds % 60
    )
}

/// Renders state changes to the terminal.
struct ConsoleRenderer;

impl TimerObserver for ConsoleRenderer {
    fn on_tick(&self, remaining_seconds: u64, mode: Mode) {
        println!("{mode}  {}", format_remaining(remaining_seconds));
    }

    fn on_mode_changed(&self, mode: Mode) {
        println!("Switched to {mode}");
    }

    fn on_stats_changed(&self, stats: &Stats) {
        println!(
            "Sessions completed: {}, total focus time: {:.1}h",
            stats.sessions_completed,
            stats.total_focus_seconds as f64 / 3600.0,
        );
    }

    fn on_run_state_changed(&self, running: bool) {
        println!("{}", if running { "Running" } else { "Paused" });
    }
}

mod cli;
mod setup;

use clap::Parser;
use pomozen::domain::entity::{Mode, SettingsPatch};
use pomozen::domain::timer::SessionTimer;
use snafu::{prelude::*, Whatever};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::Arguments;
use crate::setup::format_remaining;

#[snafu::report]
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Whatever> {
    let arg = Arguments::parse();

    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(arg.verbosity)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .whatever_context("Could not setup logger")?;

    let setup::Bootstrap { mut timer, mut ticks } = setup::bootstrap(&arg).await?;

    println!(
        "{}  {}",
        timer.mode(),
        format_remaining(timer.remaining_seconds()),
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            Some(()) = ticks.recv() => timer.tick().await,
            line = lines.next_line() => {
                let Some(line) = line.whatever_context("Could not read from stdin")? else {
                    break;
                };
                if !dispatch(&mut timer, line.trim()).await {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Run one line command against the timer. Returns `false` when the user
/// asked to quit.
async fn dispatch(timer: &mut SessionTimer, command: &str) -> bool {
    let mut words = command.split_whitespace();

    match words.next() {
        Some("start") => timer.start(),
        Some("pause") => timer.pause(),
        Some("reset") => timer.reset(),
        Some("focus") => timer.switch_mode(Mode::Focus),
        Some("short") => timer.switch_mode(Mode::ShortBreak),
        Some("long") => timer.switch_mode(Mode::LongBreak),
        Some("status") => status(timer),
        Some("set") => match (words.next(), words.next()) {
            (Some(field), Some(value)) => update(timer, field, value).await,
            _ => println!("Usage: set <focus|short|long|auto-breaks|auto-pomodoros> <value>"),
        },
        Some("quit") | Some("exit") => return false,
        Some(other) => println!("Unknown command: {other}"),
        None => {}
    }

    true
}

fn status(timer: &SessionTimer) {
    let stats = timer.stats();
    println!(
        "{}  {}  ({})",
        timer.mode(),
        format_remaining(timer.remaining_seconds()),
        if timer.is_running() { "running" } else { "paused" },
    );
    println!(
        "Sessions completed: {}, total focus time: {:.1}h",
        stats.sessions_completed,
        stats.total_focus_seconds as f64 / 3600.0,
    );
}

async fn update(timer: &mut SessionTimer, field: &str, value: &str) {
    let mut patch = SettingsPatch::default();

    match field {
        "focus" => patch.focus_minutes = value.parse().ok(),
        "short" => patch.short_break_minutes = value.parse().ok(),
        "long" => patch.long_break_minutes = value.parse().ok(),
        "auto-breaks" => patch.auto_start_breaks = parse_switch(value),
        "auto-pomodoros" => patch.auto_start_pomodoros = parse_switch(value),
        other => {
            println!("Unknown setting: {other}");
            return;
        }
    }

    if patch == SettingsPatch::default() {
        println!("Invalid value: {value}");
        return;
    }

    timer.update_settings(patch).await;
}

fn parse_switch(value: &str) -> Option<bool> {
    match value {
        "on" => Some(true),
        "off" => Some(false),
        _ => None,
    }
}

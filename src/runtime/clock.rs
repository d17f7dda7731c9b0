use tokio::sync::mpsc::Sender;
use tokio::task::JoinHandle;
use tokio::time::{Duration, MissedTickBehavior};

use crate::domain::timer::clock::{Clock, TickSubscription};

/// A [`Clock`] backed by a tokio interval task. Each subscription spawns
/// one task pushing a unit through the channel once per period; the
/// receiving side belongs to the event loop that owns the timer, which
/// turns every received unit into one `tick` command.
pub struct TokioClock {
    ticks: Sender<()>,
    period: Duration,
}

impl TokioClock {
    /// Creates a new [`TokioClock`] with a one-second period.
    pub fn new(ticks: Sender<()>) -> Self {
        Self::with_period(ticks, Duration::from_secs(1))
    }

    /// Creates a new [`TokioClock`] with a custom period.
    pub fn with_period(ticks: Sender<()>, period: Duration) -> Self {
        Self { ticks, period }
    }
}

impl Clock for TokioClock {
    fn subscribe(&self) -> Box<dyn TickSubscription> {
        let ticks = self.ticks.clone();
        let period = self.period;

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick of a tokio interval completes immediately.
            interval.tick().await;

            loop {
                interval.tick().await;
                if ticks.send(()).await.is_err() {
                    break;
                }
            }
        });

        Box::new(TokioSubscription { task })
    }
}

struct TokioSubscription {
    task: JoinHandle<()>,
}

impl TickSubscription for TokioSubscription {
    fn cancel(self: Box<Self>) {
        self.task.abort();
    }
}

impl Drop for TokioSubscription {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::sync::mpsc;

    #[tokio::test(start_paused = true)]
    async fn delivers_one_tick_per_period() {
        let (sender, mut receiver) = mpsc::channel(8);
        let clock = TokioClock::new(sender);
        let subscription = clock.subscribe();

        let start = tokio::time::Instant::now();
        for _ in 0..3 {
            receiver.recv().await.unwrap();
        }
        assert_eq!(start.elapsed(), Duration::from_secs(3));

        subscription.cancel();
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_delivery() {
        let (sender, mut receiver) = mpsc::channel(8);
        let clock = TokioClock::new(sender);
        let subscription = clock.subscribe();

        receiver.recv().await.unwrap();
        subscription.cancel();

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(receiver.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_cancels() {
        let (sender, mut receiver) = mpsc::channel(8);
        let clock = TokioClock::new(sender);

        drop(clock.subscribe());

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(receiver.try_recv().is_err());
    }
}

pub mod clock;
pub mod observer;
pub mod outbound;
pub mod session;

pub use clock::{Clock, TickSubscription};
pub use observer::TimerObserver;
pub use outbound::{AlertKind, NotifyError, NotifyPort};
pub use session::{SessionTimer, SetupSessionTimerError};

/// A source of roughly once-per-second callbacks driving a running
/// countdown.
pub trait Clock: Send + Sync + 'static {
    /// Begin tick delivery. The returned handle is the sole owner of the
    /// subscription: canceling or dropping it stops delivery.
    fn subscribe(&self) -> Box<dyn TickSubscription>;
}

/// A cancelable handle to one periodic tick subscription.
pub trait TickSubscription: Send + 'static {
    /// Stop tick delivery synchronously. Dropping the handle has the same
    /// effect; this method makes the cancellation explicit at call sites.
    fn cancel(self: Box<Self>);
}

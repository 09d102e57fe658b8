/// Per-value sink. Receives the priming `0.0` and every interpolated value.
pub type ValueSink = Box<dyn FnMut(f32)>;

/// Completion sink. Fires at most once.
pub type CompleteSink = Box<dyn FnOnce()>;

/// Where a tween is in its delay-then-animate sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting out the configured delay. No values are emitted.
    Delay,
    /// Advancing progress, one value per tick.
    Animating,
    /// Progress reached 1 (or duration was zero) and completion fired.
    Finished,
    /// Cancelled by the driver before finishing.
    Disposed,
}

impl Phase {
    /// Whether the driver should keep ticking.
    pub fn is_active(self) -> bool {
        matches!(self, Phase::Delay | Phase::Animating)
    }
}

/// Outcome of a single frame tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickResult {
    /// Value emitted this tick, if any. `None` during delay and after the
    /// tween has stopped.
    pub value: Option<f32>,
    /// True once the tween has completed. Stays true on later ticks.
    pub finished: bool,
}

impl TickResult {
    /// A tick that produced nothing (delay, disposed).
    pub const IDLE: TickResult = TickResult { value: None, finished: false };

    /// A tick after completion.
    pub const DONE: TickResult = TickResult { value: None, finished: true };

    pub fn emitted(value: f32, finished: bool) -> Self {
        Self { value: Some(value), finished }
    }
}

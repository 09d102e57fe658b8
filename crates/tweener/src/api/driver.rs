use crate::api::types::{Phase, TickResult};

/// Something an external frame loop can tick and cancel.
///
/// The host owns the loop: it calls [`FrameDriven::advance`] once per frame
/// with the unscaled elapsed time, and may call [`FrameDriven::dispose`] at any
/// point to stop further emissions.
pub trait FrameDriven {
    /// Advance by `dt` seconds of unscaled time.
    fn advance(&mut self, dt: f32) -> TickResult;

    /// Stop ticking and release any held callbacks. Idempotent.
    fn dispose(&mut self);

    /// Current phase.
    fn phase(&self) -> Phase;

    /// Whether the driver should keep ticking.
    fn is_active(&self) -> bool {
        self.phase().is_active()
    }
}

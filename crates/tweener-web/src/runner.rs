use tweener::{FrameDriven, Phase, TickResult};

/// Generic driver that owns one frame-driven tween.
///
/// The browser's `requestAnimationFrame` loop is the frame clock: it calls
/// [`TweenRunner::tick`] with the unscaled seconds since the previous frame.
/// `WebTween` wraps a `TweenRunner<Tween>` because wasm-bindgen cannot export
/// generic structs directly.
pub struct TweenRunner<T: FrameDriven> {
    tween: T,
    /// Frames delivered while the tween was active.
    frames: u32,
    /// Unscaled seconds delivered while the tween was active.
    elapsed: f32,
    last: TickResult,
}

impl<T: FrameDriven> TweenRunner<T> {
    pub fn new(tween: T) -> Self {
        Self {
            tween,
            frames: 0,
            elapsed: 0.0,
            last: TickResult::IDLE,
        }
    }

    /// Run one frame. Returns true while the host should keep calling.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.tween.is_active() {
            return false;
        }

        self.frames += 1;
        self.elapsed += dt.max(0.0);
        self.last = self.tween.advance(dt);

        if self.last.finished {
            log::info!(
                "tween finished after {} frames ({:.3}s)",
                self.frames,
                self.elapsed
            );
        }
        self.tween.is_active()
    }

    /// Cancel the tween and release its callbacks.
    pub fn dispose(&mut self) {
        if self.tween.is_active() {
            log::info!("tween disposed after {} frames", self.frames);
        }
        self.tween.dispose();
    }

    pub fn phase(&self) -> Phase {
        self.tween.phase()
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Result of the most recent active frame.
    pub fn last(&self) -> TickResult {
        self.last
    }

    pub fn tween(&self) -> &T {
        &self.tween
    }
}

// core/tween.rs
//
// Single-value tween driven one frame at a time by the host.
//
// Usage:
//   let mut tween = Tween::ease_out(0.5).from_to(0.0, 100.0).on_value(|v| ...).start()?;
//   tween.tick(dt);  // once per frame, until tick(..).finished

use std::fmt;

use crate::api::config::TweenConfig;
use crate::api::driver::FrameDriven;
use crate::api::error::TweenError;
use crate::api::types::{CompleteSink, Phase, TickResult, ValueSink};
use crate::extensions::easing::{lerp, Curve};

/// One animation from `from` to `to` over `duration` seconds after `delay`.
///
/// The sequence starts at construction: the value sink receives a priming
/// `0.0` immediately. After that each [`Tween::tick`] either counts down the
/// delay or emits exactly one interpolated value. On the tick where progress
/// reaches 1 the completion sink fires, both sinks are dropped, and later ticks
/// do nothing.
pub struct Tween {
    config: TweenConfig,
    /// Progress per second; `None` for zero duration.
    rate: Option<f32>,
    phase: Phase,
    /// Unscaled time spent in the delay phase.
    waited: f32,
    /// Normalized time, x in [0, 1].
    progress: f32,
    /// Curve-shaped progress, y.
    shaped: f32,
    /// Last emitted value.
    value: f32,
    on_value: Option<ValueSink>,
    on_complete: Option<CompleteSink>,
}

impl Tween {
    /// Validate `config` and start the sequence.
    ///
    /// Either sink may be `None`; absent sinks are skipped.
    pub fn start(
        config: TweenConfig,
        on_value: Option<ValueSink>,
        on_complete: Option<CompleteSink>,
    ) -> Result<Self, TweenError> {
        if let Err(err) = config.validate() {
            log::warn!("tween rejected: {}", err);
            return Err(err);
        }

        let phase = if config.delay > 0.0 {
            Phase::Delay
        } else {
            Phase::Animating
        };

        let mut tween = Self {
            rate: config.progress_rate(),
            config,
            phase,
            waited: 0.0,
            progress: 0.0,
            shaped: 0.0,
            value: 0.0,
            on_value,
            on_complete,
        };

        log::debug!(
            "tween start: {} {} -> {} delay={}s duration={}s",
            config.curve,
            config.from,
            config.to,
            config.delay,
            config.duration
        );
        tween.emit(0.0);
        Ok(tween)
    }

    /// Advance by one frame of `dt` unscaled seconds.
    ///
    /// Negative or non-finite `dt` counts as zero so progress never moves
    /// backwards.
    pub fn tick(&mut self, dt: f32) -> TickResult {
        let dt = if dt.is_finite() && dt >= 0.0 {
            dt
        } else {
            log::debug!("tween ignoring invalid dt {}", dt);
            0.0
        };

        match self.phase {
            Phase::Delay => {
                self.waited += dt;
                if self.waited >= self.config.delay {
                    self.phase = Phase::Animating;
                }
                log::trace!("tween delay {}/{}s", self.waited, self.config.delay);
                TickResult::IDLE
            }
            Phase::Animating => self.step(dt),
            Phase::Finished => TickResult::DONE,
            Phase::Disposed => TickResult::IDLE,
        }
    }

    /// Cancel the tween. No further values or completion are emitted and both
    /// sinks are released. Has no effect on the phase of a finished tween.
    pub fn dispose(&mut self) {
        if self.phase.is_active() {
            log::debug!("tween disposed at progress {}", self.progress);
            self.phase = Phase::Disposed;
        }
        self.on_value = None;
        self.on_complete = None;
    }

    fn step(&mut self, dt: f32) -> TickResult {
        self.progress = match self.rate {
            Some(rate) => (self.progress + rate * dt).clamp(0.0, 1.0),
            None => 1.0,
        };
        let finished = self.rate.is_none() || self.progress >= 1.0;

        self.shaped = self.config.curve.apply(self.progress);
        self.value = lerp(self.config.from, self.config.to, self.shaped);
        log::trace!("tween x={} y={} value={}", self.progress, self.shaped, self.value);

        self.emit(self.value);
        if finished {
            self.complete();
        }
        TickResult::emitted(self.value, finished)
    }

    fn emit(&mut self, value: f32) {
        if let Some(sink) = self.on_value.as_mut() {
            sink(value);
        }
    }

    fn complete(&mut self) {
        self.phase = Phase::Finished;
        self.on_value = None;
        if let Some(sink) = self.on_complete.take() {
            sink();
        }
        log::debug!("tween finished at {}", self.value);
    }

    // -- Accessors --

    pub fn config(&self) -> &TweenConfig {
        &self.config
    }

    pub fn curve(&self) -> Curve {
        self.config.curve
    }

    pub fn from(&self) -> f32 {
        self.config.from
    }

    pub fn to(&self) -> f32 {
        self.config.to
    }

    pub fn delay(&self) -> f32 {
        self.config.delay
    }

    pub fn duration(&self) -> f32 {
        self.config.duration
    }

    /// Normalized progress x in [0, 1].
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Curve-shaped progress y for the latest tick.
    pub fn shaped_progress(&self) -> f32 {
        self.shaped
    }

    /// Last emitted value (the priming `0.0` before the first animation tick).
    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn is_disposed(&self) -> bool {
        self.phase == Phase::Disposed
    }

    /// Whether any sink is still held.
    pub fn has_sinks(&self) -> bool {
        self.on_value.is_some() || self.on_complete.is_some()
    }
}

impl FrameDriven for Tween {
    fn advance(&mut self, dt: f32) -> TickResult {
        self.tick(dt)
    }

    fn dispose(&mut self) {
        Tween::dispose(self);
    }

    fn phase(&self) -> Phase {
        self.phase
    }
}

impl fmt::Debug for Tween {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tween")
            .field("config", &self.config)
            .field("phase", &self.phase)
            .field("waited", &self.waited)
            .field("progress", &self.progress)
            .field("shaped", &self.shaped)
            .field("value", &self.value)
            .field("on_value", &self.on_value.is_some())
            .field("on_complete", &self.on_complete.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Values and completion count captured from a tween's sinks.
    #[derive(Default)]
    struct Recorder {
        values: RefCell<Vec<f32>>,
        completed: Cell<u32>,
    }

    fn start_recorded(config: TweenConfig) -> (Tween, Rc<Recorder>) {
        let rec = Rc::new(Recorder::default());
        let values = rec.clone();
        let done = rec.clone();
        let tween = Tween::start(
            config,
            Some(Box::new(move |v| values.values.borrow_mut().push(v))),
            Some(Box::new(move || done.completed.set(done.completed.get() + 1))),
        )
        .unwrap();
        (tween, rec)
    }

    #[test]
    fn primes_with_zero() {
        let config = TweenConfig {
            from: 3.0,
            to: 7.0,
            ..TweenConfig::default()
        };
        let (tween, rec) = start_recorded(config);
        assert_eq!(*rec.values.borrow(), vec![0.0]);
        assert_eq!(tween.phase(), Phase::Animating);
        assert_eq!(tween.value(), 0.0);
    }

    #[test]
    fn linear_half_then_complete() {
        let config = TweenConfig {
            to: 10.0,
            duration: 2.0,
            ..TweenConfig::default()
        };
        let (mut tween, rec) = start_recorded(config);

        let first = tween.tick(1.0);
        assert_eq!(first, TickResult::emitted(5.0, false));
        assert_eq!(tween.progress(), 0.5);
        assert_eq!(rec.completed.get(), 0);

        let second = tween.tick(1.0);
        assert_eq!(second, TickResult::emitted(10.0, true));
        assert_eq!(rec.completed.get(), 1);
        assert_eq!(*rec.values.borrow(), vec![0.0, 5.0, 10.0]);
        assert!(tween.is_finished());
    }

    #[test]
    fn no_ticks_after_finish() {
        let (mut tween, rec) = start_recorded(TweenConfig::new(Curve::EaseOut, 0.5));
        assert!(tween.tick(1.0).finished);

        for _ in 0..3 {
            assert_eq!(tween.tick(1.0), TickResult::DONE);
        }
        assert_eq!(rec.values.borrow().len(), 2);
        assert_eq!(rec.completed.get(), 1);
        assert!(!tween.has_sinks());
    }

    #[test]
    fn progress_clamps_at_one() {
        let (mut tween, _rec) = start_recorded(TweenConfig::new(Curve::Linear, 1.0));
        let result = tween.tick(5.0);
        assert_eq!(tween.progress(), 1.0);
        assert_eq!(result.value, Some(1.0));
    }

    #[test]
    fn zero_duration_single_step() {
        let config = TweenConfig {
            from: 5.0,
            to: 5.0,
            duration: 0.0,
            ..TweenConfig::default()
        };
        let (mut tween, rec) = start_recorded(config);
        let result = tween.tick(0.0);
        assert_eq!(result, TickResult::emitted(5.0, true));
        assert_eq!(tween.shaped_progress(), 1.0);
        assert_eq!(*rec.values.borrow(), vec![0.0, 5.0]);
        assert_eq!(rec.completed.get(), 1);
    }

    #[test]
    fn delay_consumes_whole_ticks() {
        let config = TweenConfig {
            delay: 1.0,
            duration: 1.0,
            ..TweenConfig::default()
        };
        let (mut tween, rec) = start_recorded(config);
        assert_eq!(tween.phase(), Phase::Delay);

        assert_eq!(tween.tick(0.6), TickResult::IDLE);
        assert_eq!(tween.phase(), Phase::Delay);
        // Reaches the delay: still silent, animation begins next tick.
        assert_eq!(tween.tick(0.6), TickResult::IDLE);
        assert_eq!(tween.phase(), Phase::Animating);
        assert_eq!(*rec.values.borrow(), vec![0.0]);

        let result = tween.tick(0.25);
        assert_eq!(result, TickResult::emitted(0.25, false));
    }

    #[test]
    fn invalid_dt_does_not_rewind() {
        let (mut tween, _rec) = start_recorded(TweenConfig::new(Curve::Linear, 4.0));
        tween.tick(1.0);
        let before = tween.progress();
        tween.tick(-1.0);
        assert_eq!(tween.progress(), before);
        tween.tick(f32::NAN);
        assert_eq!(tween.progress(), before);
    }

    #[test]
    fn dispose_stops_emissions() {
        let (mut tween, rec) = start_recorded(TweenConfig::new(Curve::Linear, 2.0));
        tween.tick(0.5);
        tween.dispose();
        assert!(tween.is_disposed());
        assert!(!tween.has_sinks());

        assert_eq!(tween.tick(1.0), TickResult::IDLE);
        assert_eq!(rec.values.borrow().len(), 2);
        assert_eq!(rec.completed.get(), 0);
    }

    #[test]
    fn dispose_after_finish_keeps_finished() {
        let (mut tween, _rec) = start_recorded(TweenConfig::new(Curve::Linear, 0.0));
        tween.tick(0.016);
        tween.dispose();
        assert!(tween.is_finished());
    }

    #[test]
    fn sinks_are_optional() {
        let mut tween = Tween::start(TweenConfig::new(Curve::BounceOut, 1.0), None, None).unwrap();
        assert!(!tween.has_sinks());
        tween.tick(0.5);
        let result = tween.tick(0.5);
        assert!(result.finished);
        assert!((tween.value() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn negative_duration_fails() {
        let err = Tween::start(TweenConfig::new(Curve::EaseIn, -1.0), None, None).unwrap_err();
        assert!(matches!(err, TweenError::InvalidDuration(_)));
    }

    #[test]
    fn drop_releases_sinks() {
        let rec = Rc::new(Recorder::default());
        let held = rec.clone();
        let tween = Tween::start(
            TweenConfig::default(),
            Some(Box::new(move |v| held.values.borrow_mut().push(v))),
            None,
        )
        .unwrap();
        assert_eq!(Rc::strong_count(&rec), 2);
        drop(tween);
        assert_eq!(Rc::strong_count(&rec), 1);
    }

    #[test]
    fn driven_through_trait() {
        fn run(driver: &mut dyn FrameDriven) -> u32 {
            let mut frames = 0;
            while driver.is_active() {
                driver.advance(0.1);
                frames += 1;
            }
            frames
        }

        let (mut tween, rec) = start_recorded(TweenConfig::new(Curve::EaseInOut, 0.35));
        assert_eq!(run(&mut tween), 4);
        assert_eq!(rec.completed.get(), 1);
    }
}

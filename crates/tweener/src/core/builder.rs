use crate::api::config::TweenConfig;
use crate::api::error::TweenError;
use crate::api::types::{CompleteSink, ValueSink};
use crate::core::tween::Tween;
use crate::extensions::easing::Curve;

/// Collects a tween's configuration and sinks before starting it.
///
/// Defaults to a 0 → 1 tween with no delay and no sinks. Nothing is emitted
/// until [`TweenBuilder::start`].
pub struct TweenBuilder {
    config: TweenConfig,
    on_value: Option<ValueSink>,
    on_complete: Option<CompleteSink>,
}

impl TweenBuilder {
    pub fn new(curve: Curve, duration: f32) -> Self {
        Self::from_config(TweenConfig::new(curve, duration))
    }

    pub fn from_config(config: TweenConfig) -> Self {
        Self {
            config,
            on_value: None,
            on_complete: None,
        }
    }

    // -- Builder methods --

    pub fn from_to(mut self, from: f32, to: f32) -> Self {
        self.config.from = from;
        self.config.to = to;
        self
    }

    pub fn delay(mut self, delay: f32) -> Self {
        self.config.delay = delay;
        self
    }

    pub fn on_value(mut self, sink: impl FnMut(f32) + 'static) -> Self {
        self.on_value = Some(Box::new(sink));
        self
    }

    pub fn on_complete(mut self, sink: impl FnOnce() + 'static) -> Self {
        self.on_complete = Some(Box::new(sink));
        self
    }

    pub fn config(&self) -> &TweenConfig {
        &self.config
    }

    /// Validate and start. The value sink receives `0.0` before this returns.
    pub fn start(self) -> Result<Tween, TweenError> {
        Tween::start(self.config, self.on_value, self.on_complete)
    }
}

impl Tween {
    pub fn builder(curve: Curve, duration: f32) -> TweenBuilder {
        TweenBuilder::new(curve, duration)
    }

    pub fn linear(duration: f32) -> TweenBuilder {
        TweenBuilder::new(Curve::Linear, duration)
    }

    /// Slow start.
    pub fn ease_in(duration: f32) -> TweenBuilder {
        TweenBuilder::new(Curve::EaseIn, duration)
    }

    /// Slow end.
    pub fn ease_out(duration: f32) -> TweenBuilder {
        TweenBuilder::new(Curve::EaseOut, duration)
    }

    pub fn ease_in_out(duration: f32) -> TweenBuilder {
        TweenBuilder::new(Curve::EaseInOut, duration)
    }

    pub fn bounce_in(duration: f32) -> TweenBuilder {
        TweenBuilder::new(Curve::BounceIn, duration)
    }

    pub fn bounce_out(duration: f32) -> TweenBuilder {
        TweenBuilder::new(Curve::BounceOut, duration)
    }
}

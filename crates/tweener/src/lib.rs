pub mod api;
pub mod core;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::config::TweenConfig;
pub use api::driver::FrameDriven;
pub use api::error::TweenError;
pub use api::types::{CompleteSink, Phase, TickResult, ValueSink};
pub use core::builder::TweenBuilder;
pub use core::tween::Tween;
pub use extensions::{Curve, bounce, lerp, ease};

// extensions/mod.rs
//
// Curve math, kept free of Tween state so hosts can sample curves directly.

pub mod easing;

pub use easing::{Curve, bounce, lerp, ease};

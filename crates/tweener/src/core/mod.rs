pub mod builder;
pub mod tween;

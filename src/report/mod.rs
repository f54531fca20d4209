//! Presentation boundary: structured findings become display text here
//! and nowhere else.

pub mod render;

pub use render::*;

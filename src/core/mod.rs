//! Core application primitives (HTTP hosting)

pub mod http;

pub use http::*;

//! # Art Generation
//!
//! Card generators. Each one lives in its own module and renders onto a
//! [`Canvas`](crate::render::canvas::Canvas).

pub mod stipple;

pub use stipple::Stipple;

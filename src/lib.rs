//! # Stipplecard - Complementary Color Stipple Cards
//!
//! Stipplecard renders small decorative cards from a seed color. It provides:
//!
//! - **Color math**: hex RGB to HSL, complementary hues
//! - **Stippling**: a hundred two-tone dots with a heavy-tailed horizontal spread
//! - **Encoding**: PNG output, base64 `<img>` tags
//! - **Server**: an HTTP endpoint that renders, persists and returns a card
//!
//! ## Quick Start
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use stipplecard::{art::Stipple, color::Palette, render};
//!
//! let palette = Palette::from_seed("#00FF00");
//! assert_eq!(palette.complement_style(), "hsl(300,100%,50%)");
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let canvas = Stipple::new(palette).render(&mut rng);
//! let png = render::encode_png(&canvas)?;
//! assert!(!png.is_empty());
//!
//! # Ok::<(), stipplecard::error::StippleError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`color`] | HSL conversion and CSS colors |
//! | [`art`] | Card generators |
//! | [`render`] | Canvas and PNG encoding |
//! | [`storage`] | Persistence backends |
//! | [`server`] | HTTP handler and server |
//! | [`error`] | Error types |

pub mod art;
pub mod color;
pub mod error;
pub mod render;
pub mod server;
pub mod storage;

// Re-exports for convenience
pub use error::StippleError;
pub use storage::{Storage, StorageConfig};

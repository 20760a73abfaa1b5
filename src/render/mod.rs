//! # Rendering Module
//!
//! Raster surface and PNG encoding for stipple cards.
//!
//! ## Modules
//!
//! - [`canvas`]: Fixed-size RGBA surface with fill style, rectangles and circles
//!
//! ## Usage Example
//!
//! ```
//! use stipplecard::render::{self, canvas::Canvas};
//!
//! let mut canvas = Canvas::new();
//! canvas.set_fill_style("hsl(0,0%,10%)");
//! canvas.fill_rect(0, 0, 200, 150);
//!
//! let png = render::encode_png(&canvas).unwrap();
//! assert!(png.starts_with(b"\x89PNG"));
//! ```

pub mod canvas;

use image::ImageFormat;
use std::io::Cursor;

use crate::error::StippleError;
use canvas::Canvas;

/// Encode the canvas as a PNG buffer.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>, StippleError> {
    let mut bytes = Vec::new();
    canvas
        .pixels()
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| StippleError::Image(format!("Failed to encode PNG: {}", e)))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_png_roundtrips_dimensions() {
        let canvas = Canvas::new();
        let png = encode_png(&canvas).unwrap();
        let decoded = image::load_from_memory(&png).unwrap();
        assert_eq!(decoded.width(), canvas::CANVAS_WIDTH);
        assert_eq!(decoded.height(), canvas::CANVAS_HEIGHT);
    }
}

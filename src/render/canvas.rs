//! # Canvas
//!
//! A fixed-size RGBA drawing surface with the small slice of a 2D drawing
//! context the stipple renderer needs: a current fill style, rectangle fills
//! and filled circles.
//!
//! Fill styles are CSS color strings. Assigning one that does not parse is
//! ignored and the previous fill style stays in effect.

use image::{Rgba, RgbaImage};

use crate::color::parse_css_color;

/// Canvas width in pixels.
pub const CANVAS_WIDTH: u32 = 200;
/// Canvas height in pixels.
pub const CANVAS_HEIGHT: u32 = 150;

/// Initial fill style (opaque black).
const DEFAULT_FILL: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// A 200x150 raster surface. Starts fully transparent.
#[derive(Debug, Clone)]
pub struct Canvas {
    pixels: RgbaImage,
    fill: Rgba<u8>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            pixels: RgbaImage::new(CANVAS_WIDTH, CANVAS_HEIGHT),
            fill: DEFAULT_FILL,
        }
    }

    /// Set the fill style from a CSS color string.
    ///
    /// Returns whether the style was accepted.
    pub fn set_fill_style(&mut self, style: &str) -> bool {
        match parse_css_color(style) {
            Some(color) => {
                self.fill = color;
                true
            }
            None => false,
        }
    }

    /// Current fill color.
    pub fn fill_style(&self) -> Rgba<u8> {
        self.fill
    }

    /// Fill an axis-aligned rectangle, clipped to the canvas.
    pub fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32) {
        let x_end = x.saturating_add(width).min(CANVAS_WIDTH);
        let y_end = y.saturating_add(height).min(CANVAS_HEIGHT);
        for py in y.min(y_end)..y_end {
            for px in x.min(x_end)..x_end {
                self.pixels.put_pixel(px, py, self.fill);
            }
        }
    }

    /// Fill a circle centered at `(cx, cy)`.
    ///
    /// A pixel is painted when its center lies strictly inside the radius.
    /// Non-finite input or a non-positive radius paints nothing.
    pub fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64) {
        if !(cx.is_finite() && cy.is_finite() && radius.is_finite()) || radius <= 0.0 {
            return;
        }

        let Some((x0, x1)) = clip_span(cx - radius, cx + radius, CANVAS_WIDTH) else {
            return;
        };
        let Some((y0, y1)) = clip_span(cy - radius, cy + radius, CANVAS_HEIGHT) else {
            return;
        };

        let r2 = radius * radius;
        for py in y0..y1 {
            let dy = f64::from(py) + 0.5 - cy;
            for px in x0..x1 {
                let dx = f64::from(px) + 0.5 - cx;
                if dx * dx + dy * dy < r2 {
                    self.pixels.put_pixel(px, py, self.fill);
                }
            }
        }
    }

    /// Read a single pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.pixels.get_pixel(x, y)
    }

    /// Borrow the underlying image.
    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }
}

/// Pixel index range `[start, end)` covering `[lo, hi]`, clipped to `[0, limit)`.
fn clip_span(lo: f64, hi: f64, limit: u32) -> Option<(u32, u32)> {
    let limit_f = f64::from(limit);
    if hi < 0.0 || lo >= limit_f {
        return None;
    }
    let start = lo.floor().max(0.0) as u32;
    let end = (hi.ceil() + 1.0).min(limit_f) as u32;
    (start < end).then_some((start, end))
}

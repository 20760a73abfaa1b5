//! # Stipple
//!
//! Scattered two-tone dots on a dark card.
//!
//! ## Description
//!
//! A hundred filled circles alternate between a base color and its
//! complement. Vertical placement is uniform over the drawable height.
//! Horizontal placement uses `50 / sqrt(u) - 50`, a heavy-tailed transform
//! that piles dots up near the left edge and flings a long tail of them far
//! to the right, many past the edge of the canvas. Nothing is clamped.
//!
//! Rendering is split in two: [`plan`] draws every random number up front,
//! [`Stipple::paint`] rasterizes a plan without touching the RNG.

use rand::{Rng, distr::OpenClosed01};
use std::fmt;

use crate::color::Palette;
use crate::render::canvas::{CANVAS_HEIGHT, CANVAS_WIDTH, Canvas};

/// Number of dots drawn per card.
pub const DOT_COUNT: usize = 100;
/// Logical drawing width.
pub const DRAW_WIDTH: f64 = 100.0;
/// Logical drawing height.
pub const DRAW_HEIGHT: f64 = 100.0;
/// Upper bound (exclusive) of dot radii.
pub const MAX_RADIUS: f64 = 4.0;
/// Top margin added to every y coordinate.
pub const Y_OFFSET: f64 = 5.0;
/// Card background, a near-black neutral.
pub const BACKGROUND: &str = "hsl(0,0%,10%)";

/// Which palette color a dot is filled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    Base,
    Complement,
}

impl Ink {
    /// Odd draw indices use the base color, even ones the complement.
    pub fn for_index(i: usize) -> Self {
        if i % 2 == 1 { Ink::Base } else { Ink::Complement }
    }
}

/// One planned dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub ink: Ink,
}

/// Draw the positions, radii and inks of all dots, in paint order.
///
/// Per dot the RNG is consulted three times: x, then y, then radius.
pub fn plan<R: Rng + ?Sized>(rng: &mut R) -> Vec<Dot> {
    (0..DOT_COUNT)
        .map(|i| {
            let u: f64 = rng.sample(OpenClosed01);
            let x = (1.0 / u.sqrt()) * 50.0 - DRAW_WIDTH / 2.0;
            let y = rng.random::<f64>() * DRAW_HEIGHT + Y_OFFSET;
            let radius = rng.random::<f64>() * MAX_RADIUS;
            Dot {
                x,
                y,
                radius,
                ink: Ink::for_index(i),
            }
        })
        .collect()
}

/// Stipple card renderer for one palette.
#[derive(Debug, Clone)]
pub struct Stipple {
    palette: Palette,
}

impl Stipple {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Plan and paint a card in one go.
    pub fn render<R: Rng + ?Sized>(&self, rng: &mut R) -> Canvas {
        self.paint(&plan(rng))
    }

    /// Rasterize a dot plan.
    ///
    /// Dots whose color does not parse (a `NaN` palette) keep whatever fill
    /// style was last accepted, which is the background until a valid
    /// color comes along.
    pub fn paint(&self, dots: &[Dot]) -> Canvas {
        let base = self.palette.base_style();
        let complement = self.palette.complement_style();

        let mut canvas = Canvas::new();
        canvas.set_fill_style(BACKGROUND);
        canvas.fill_rect(0, 0, CANVAS_WIDTH, CANVAS_HEIGHT);
        canvas.set_fill_style(BACKGROUND);

        for dot in dots {
            let style = match dot.ink {
                Ink::Base => &base,
                Ink::Complement => &complement,
            };
            canvas.set_fill_style(style);
            canvas.fill_circle(dot.x, dot.y, dot.radius);
        }

        canvas
    }
}

impl fmt::Display for Stipple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dots={} {}", DOT_COUNT, self.palette)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::parse_css_color;
    use image::Rgba;
    use rand::{SeedableRng, rngs::StdRng};

    fn background() -> Rgba<u8> {
        parse_css_color(BACKGROUND).unwrap()
    }

    #[test]
    fn test_plan_draws_fifty_of_each_ink() {
        let dots = plan(&mut StdRng::seed_from_u64(1));
        assert_eq!(dots.len(), DOT_COUNT);

        let base = dots.iter().filter(|d| d.ink == Ink::Base).count();
        let complement = dots.iter().filter(|d| d.ink == Ink::Complement).count();
        assert_eq!(base, 50);
        assert_eq!(complement, 50);

        for (i, dot) in dots.iter().enumerate() {
            let expected = if i % 2 == 1 { Ink::Base } else { Ink::Complement };
            assert_eq!(dot.ink, expected, "dot {}", i);
        }
    }

    #[test]
    fn test_plan_ranges() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..20 {
            for dot in plan(&mut rng) {
                assert!((0.0..MAX_RADIUS).contains(&dot.radius), "radius {}", dot.radius);
                assert!((5.0..105.0).contains(&dot.y), "y {}", dot.y);
                assert!(dot.x.is_finite());
                assert!(dot.x >= 0.0, "x {}", dot.x);
            }
        }
    }

    #[test]
    fn test_x_is_heavy_tailed() {
        let mut rng = StdRng::seed_from_u64(3);
        let xs: Vec<f64> = (0..50).flat_map(|_| plan(&mut rng)).map(|d| d.x).collect();
        // P(x > 450) = P(u < 0.01); over 5000 draws a few land far out
        assert!(xs.iter().any(|&x| x > 450.0));
        // ...while most stay close to the left
        let near = xs.iter().filter(|&&x| x < 100.0).count();
        assert!(near > xs.len() * 3 / 4);
    }

    #[test]
    fn test_plan_is_seedable() {
        let a = plan(&mut StdRng::seed_from_u64(42));
        let b = plan(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_display_names_palette() {
        let stipple = Stipple::new(Palette::from_seed("#00FF00"));
        assert_eq!(stipple.palette().complement_style(), "hsl(300,100%,50%)");
        assert_eq!(
            stipple.to_string(),
            "dots=100 seed=#00FF00 base=hsl(120,100%,50%) complement=hsl(300,100%,50%)"
        );
    }

    #[test]
    fn test_paint_background_fills_canvas() {
        let stipple = Stipple::new(Palette::from_seed("#00FF00"));
        let canvas = stipple.paint(&[]);
        assert!(canvas.pixels().pixels().all(|p| *p == background()));
    }

    #[test]
    fn test_paint_uses_only_palette_colors() {
        let stipple = Stipple::new(Palette::from_seed("#00FF00"));
        let canvas = stipple.render(&mut StdRng::seed_from_u64(4));

        let green = Rgba([0, 255, 0, 255]);
        let magenta = Rgba([255, 0, 255, 255]);
        for p in canvas.pixels().pixels() {
            assert!(
                *p == background() || *p == green || *p == magenta,
                "unexpected pixel {:?}",
                p
            );
        }
    }

    #[test]
    fn test_later_dots_cover_earlier_ones() {
        let stipple = Stipple::new(Palette::from_seed("#FF0000"));
        let dots = [
            Dot { x: 20.0, y: 20.0, radius: 3.0, ink: Ink::Complement },
            Dot { x: 20.0, y: 20.0, radius: 3.0, ink: Ink::Base },
        ];
        let canvas = stipple.paint(&dots);
        assert_eq!(canvas.pixel(20, 20), Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_nan_palette_paints_in_background() {
        let stipple = Stipple::new(Palette::from_seed("#NOTHEX"));
        let canvas = stipple.render(&mut StdRng::seed_from_u64(5));
        assert!(canvas.pixels().pixels().all(|p| *p == background()));
    }
}

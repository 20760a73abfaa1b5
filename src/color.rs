//! # Color
//!
//! Hex RGB to HSL conversion, complementary hues, and the CSS color strings
//! the [`Canvas`](crate::render::canvas::Canvas) understands.
//!
//! Seed colors are taken verbatim from callers. Nothing is validated: a
//! malformed hex string yields `NaN` channels, and `NaN` flows through every
//! later step instead of raising an error.

use image::Rgba;
use rand::Rng;
use std::fmt;

/// Characters a random seed color is drawn from.
const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// A hue/saturation/lightness triple.
///
/// Components are whole numbers after conversion (hue in degrees, saturation
/// and lightness in percent) but are kept as `f64` so that `NaN` from a
/// malformed seed can propagate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// True when every component is a finite number.
    pub fn is_finite(&self) -> bool {
        self.hue.is_finite() && self.saturation.is_finite() && self.lightness.is_finite()
    }
}

/// Formats as a CSS color, e.g. `hsl(120,100%,50%)`.
impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({},{}%,{}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}

/// Convert a 6-digit hex RGB string (optional leading `#`) to HSL.
///
/// Each channel is read from a fixed two-character slice. Leading hex digits
/// of the slice are used and the rest ignored; a slice with no leading hex
/// digit becomes `NaN`.
pub fn hex_to_hsl(color: &str) -> Hsl {
    let hex: Vec<char> = color.replacen('#', "", 1).chars().collect();
    let channel = |start: usize| {
        let end = (start + 2).min(hex.len());
        parse_hex_prefix(&hex[start.min(end)..end]) / 255.0
    };
    let (r, g, b) = (channel(0), channel(2), channel(4));

    if r.is_nan() || g.is_nan() || b.is_nan() {
        return Hsl::new(f64::NAN, f64::NAN, f64::NAN);
    }

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = (max + min) / 2.0;

    let (hue, saturation) = if max == min {
        // Achromatic
        (0.0, 0.0)
    } else {
        let delta = max - min;
        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };
        let hue = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };
        (hue / 6.0, saturation)
    };

    Hsl::new(
        round_half_up(360.0 * hue),
        round_half_up(saturation * 100.0),
        round_half_up(lightness * 100.0),
    )
}

/// Rotate the hue half-way around the color wheel.
pub fn complement(hsl: Hsl) -> Hsl {
    Hsl::new((hsl.hue + 180.0) % 360.0, hsl.saturation, hsl.lightness)
}

/// Generate a random `#RRGGBB` color, each digit uniform over `0-9A-F`.
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut color = String::with_capacity(7);
    color.push('#');
    for _ in 0..6 {
        color.push(HEX_DIGITS[rng.random_range(0..HEX_DIGITS.len())] as char);
    }
    color
}

/// Parse the leading hex digits of a channel slice, ignoring leading
/// whitespace, one sign character and a `0x` prefix.
fn parse_hex_prefix(digits: &[char]) -> f64 {
    let mut rest = digits
        .iter()
        .copied()
        .skip_while(|c| c.is_whitespace())
        .peekable();
    let sign = match rest.peek() {
        Some(&'-') => {
            rest.next();
            -1.0
        }
        Some(&'+') => {
            rest.next();
            1.0
        }
        _ => 1.0,
    };

    // A radix prefix is skipped, as radix-16 parseInt does
    let rest: Vec<char> = rest.collect();
    let digits = match rest.as_slice() {
        ['0', 'x' | 'X', tail @ ..] => tail,
        all => all,
    };

    let mut value: Option<f64> = None;
    for &c in digits {
        match c.to_digit(16) {
            Some(d) => value = Some(value.unwrap_or(0.0) * 16.0 + f64::from(d)),
            None => break,
        }
    }
    value.map_or(f64::NAN, |v| sign * v)
}

/// Round to the nearest integer, ties toward positive infinity.
#[inline]
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// The pair of fill colors a stipple card is drawn with.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Seed color as supplied or generated.
    pub seed: String,
    pub base: Hsl,
    pub complement: Hsl,
}

impl Palette {
    /// Resolve a seed color into its base and complementary HSL colors.
    pub fn from_seed(seed: &str) -> Self {
        let base = hex_to_hsl(seed);
        Self {
            seed: seed.to_string(),
            base,
            complement: complement(base),
        }
    }

    /// CSS fill style for the base color.
    pub fn base_style(&self) -> String {
        self.base.to_string()
    }

    /// CSS fill style for the complementary color.
    pub fn complement_style(&self) -> String {
        self.complement.to_string()
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "seed={} base={} complement={}",
            self.seed, self.base, self.complement
        )
    }
}

/// Parse a CSS color string into an opaque RGBA pixel.
///
/// Supports `hsl(h,s%,l%)` and `#RRGGBB`. Returns `None` for anything else,
/// including components that are not finite numbers.
pub fn parse_css_color(style: &str) -> Option<Rgba<u8>> {
    let style = style.trim();

    if let Some(hex) = style.strip_prefix('#') {
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        return Some(Rgba([channel(0)?, channel(2)?, channel(4)?, 255]));
    }

    let inner = style
        .strip_prefix("hsl(")
        .and_then(|rest| rest.strip_suffix(')'))?;
    let mut parts = inner.split(',').map(str::trim);
    let hue = parse_finite(parts.next()?)?;
    let saturation = parse_finite(parts.next()?.strip_suffix('%')?)?;
    let lightness = parse_finite(parts.next()?.strip_suffix('%')?)?;
    if parts.next().is_some() {
        return None;
    }

    let [r, g, b] = hsl_to_rgb(
        hue.rem_euclid(360.0),
        saturation.clamp(0.0, 100.0),
        lightness.clamp(0.0, 100.0),
    );
    Some(Rgba([r, g, b, 255]))
}

fn parse_finite(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Standard HSL to RGB conversion. Hue in `[0,360)`, saturation and
/// lightness in percent.
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> [u8; 3] {
    let s = saturation / 100.0;
    let l = lightness / 100.0;

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = l - chroma / 2.0;
    let to_u8 = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    [to_u8(r), to_u8(g), to_u8(b)]
}

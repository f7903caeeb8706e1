//! Viridis colour scale.

use std::fmt;

/// An sRGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
        let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * t).round() as u8;
        Rgb::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Viridis sampled at nine evenly spaced points.
pub const VIRIDIS: [Rgb; 9] = [
    Rgb::new(0x44, 0x01, 0x54),
    Rgb::new(0x47, 0x2d, 0x7b),
    Rgb::new(0x3b, 0x52, 0x8b),
    Rgb::new(0x2c, 0x72, 0x8e),
    Rgb::new(0x21, 0x91, 0x8c),
    Rgb::new(0x28, 0xae, 0x80),
    Rgb::new(0x5e, 0xc9, 0x62),
    Rgb::new(0xad, 0xdc, 0x30),
    Rgb::new(0xfd, 0xe7, 0x25),
];

/// Fill for nodes without a value.
pub const MISSING: Rgb = Rgb::new(0x9e, 0x9e, 0x9e);

/// Viridis at `t` in `[0, 1]` (clamped).
pub fn viridis(t: f64) -> Rgb {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let scaled = t * (VIRIDIS.len() - 1) as f64;
    let lo = scaled.floor() as usize;
    let hi = (lo + 1).min(VIRIDIS.len() - 1);
    Rgb::lerp(VIRIDIS[lo], VIRIDIS[hi], scaled - lo as f64)
}

/// Maps a value domain onto viridis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    pub min: f64,
    pub max: f64,
}

impl ColorScale {
    /// Domain spanning the finite values; `None` when there are none.
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Option<Self> {
        values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some(Self { min: v, max: v }),
                Some(s) => Some(Self {
                    min: s.min.min(v),
                    max: s.max.max(v),
                }),
            })
    }

    /// Position of `value` within the domain; a degenerate domain maps to the middle.
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= f64::EPSILON {
            0.5
        } else {
            ((value - self.min) / span).clamp(0.0, 1.0)
        }
    }

    pub fn color(&self, value: Option<f64>) -> Rgb {
        match value {
            Some(v) if v.is_finite() => viridis(self.normalize(v)),
            _ => MISSING,
        }
    }
}

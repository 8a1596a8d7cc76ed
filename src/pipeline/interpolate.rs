use palette::Mix;

use crate::color::Color;

/// Color space in which neighbouring stops are blended.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum BlendSpace {
    /// Per-channel linear blend of the 8-bit sRGB values.
    #[default]
    Rgb,
    /// Perceptual blend in Oklab.
    Oklab,
}

impl BlendSpace {
    pub fn blend(self, c1: Color, c2: Color, t: f64) -> Color {
        match self {
            BlendSpace::Rgb => interpolate_color(c1, c2, t),
            BlendSpace::Oklab => interpolate_oklab(c1, c2, t),
        }
    }
}

/// Linear blend from `c1` (t = 0) to `c2` (t = 1), rounded per channel.
///
/// `t` is not clamped: values outside [0, 1] extrapolate and saturate at the
/// channel bounds.
pub fn interpolate_color(c1: Color, c2: Color, t: f64) -> Color {
    let lerp = |a: u8, b: u8| {
        let a = a as f64;
        (a + (b as f64 - a) * t).round() as u8
    };
    Color::new(lerp(c1.r, c2.r), lerp(c1.g, c2.g), lerp(c1.b, c2.b))
}

/// Blend through Oklab so midpoints keep a perceptually even lightness.
pub fn interpolate_oklab(c1: Color, c2: Color, t: f64) -> Color {
    let mixed = c1.to_oklab().mix(c2.to_oklab(), t as f32);
    Color::from_oklab(mixed)
}

use std::str::FromStr;

use palette::{FromColor, IntoColor, Oklab, Srgb};
use thiserror::Error;

/// Fallback color used when no seeds are supplied.
pub const WHITE: Color = Color {
    r: 255,
    g: 255,
    b: 255,
};

/// Stock seed colors, used to pad a seed list that is shorter than requested.
pub const DEFAULT_SEEDS: [Color; 6] = [
    Color::new(0x9b, 0xce, 0x7b),
    Color::new(0xf0, 0xea, 0xd1),
    Color::new(0xa9, 0x83, 0x67),
    Color::new(0xf0, 0xea, 0xd1),
    Color::new(0xea, 0xc0, 0x1a),
    Color::new(0xfa, 0x00, 0x00),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("invalid hex color: expected 3 or 6 hex digits, got {0}")]
    InvalidLength(usize),
    #[error("invalid hex color: '{0}' contains non-hex characters")]
    InvalidDigit(String),
}

/// Core color type used throughout the pipeline.
/// Wraps sRGB u8 components and provides conversions to the other representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string like `#ff8800`, `FF8800` or the shorthand `#f80`.
    ///
    /// Shorthand is expanded by doubling each digit, then the six digits are
    /// read as one 24-bit integer and split into channels.
    pub fn from_hex(hex: &str) -> Result<Self, ParseColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError::InvalidDigit(hex.to_string()));
        }

        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            n => return Err(ParseColorError::InvalidLength(n)),
        };

        let num = u32::from_str_radix(&expanded, 16)
            .map_err(|_| ParseColorError::InvalidDigit(hex.to_string()))?;
        Ok(Self {
            r: (num >> 16) as u8,
            g: ((num >> 8) & 0xff) as u8,
            b: (num & 0xff) as u8,
        })
    }

    /// Serialize to lowercase hex `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Convert to `palette::Srgb<u8>`.
    pub fn to_srgb_u8(self) -> Srgb<u8> {
        Srgb::new(self.r, self.g, self.b)
    }

    /// Create from `palette::Srgb<u8>`.
    pub fn from_srgb_u8(srgb: Srgb<u8>) -> Self {
        Self {
            r: srgb.red,
            g: srgb.green,
            b: srgb.blue,
        }
    }

    /// Convert to Oklab (for perceptual blending).
    pub fn to_oklab(self) -> Oklab {
        let srgb_f32: Srgb<f32> = self.to_srgb_u8().into_format();
        srgb_f32.into_color()
    }

    /// Create from Oklab, clamping out-of-gamut results.
    pub fn from_oklab(oklab: Oklab) -> Self {
        let srgb_f32: Srgb<f32> = Srgb::from_color(oklab);
        Self::from_srgb_f32_clamped(srgb_f32)
    }

    /// Clamp an Srgb<f32> to [0, 1] and convert to Color.
    fn from_srgb_f32_clamped(srgb: Srgb<f32>) -> Self {
        let r = (srgb.red.clamp(0.0, 1.0) * 255.0).round() as u8;
        let g = (srgb.green.clamp(0.0, 1.0) * 255.0).round() as u8;
        let b = (srgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { r, g, b }
    }

    /// WCAG 2.0 relative luminance.
    ///
    /// Linearizes each sRGB channel, then computes the weighted sum.
    pub fn relative_luminance(self) -> f32 {
        fn linearize(c: u8) -> f32 {
            let c = c as f32 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        let r = linearize(self.r);
        let g = linearize(self.g);
        let b = linearize(self.b);
        0.2126 * r + 0.7152 * g + 0.0722 * b
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

use tracing::debug;

use crate::color::{Color, ParseColorError, DEFAULT_SEEDS, WHITE};
use crate::pipeline::interpolate::BlendSpace;
use crate::pipeline::rotate::rotate_hue;

/// Largest seed list the generator offers for editing.
pub const MAX_SEEDS: usize = 6;

/// How a palette is derived, decided by the number of seeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// No seeds: every entry is white.
    Blank,
    /// One seed: walk the hue wheel from it.
    HueRotation,
    /// Two or more seeds: piecewise-linear blend through them in order.
    Interpolation,
}

impl Strategy {
    pub fn for_seed_count(count: usize) -> Self {
        match count {
            0 => Strategy::Blank,
            1 => Strategy::HueRotation,
            _ => Strategy::Interpolation,
        }
    }
}

/// An ordered, finished list of palette colors.
///
/// There is no way to mutate a palette once built; consumers get slices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Color> {
        self.colors.iter()
    }

    /// Lowercase `#rrggbb` strings in palette order.
    pub fn to_hex_list(&self) -> Vec<String> {
        self.colors.iter().map(|c| c.to_hex()).collect()
    }

    /// `(name, value)` pairs for the `--gradient-color-N` custom properties,
    /// numbered from 1.
    pub fn css_variables(&self) -> Vec<(String, String)> {
        self.colors
            .iter()
            .enumerate()
            .map(|(i, c)| (format!("--gradient-color-{}", i + 1), c.to_hex()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter {
        self.colors.iter()
    }
}

/// Build a palette of `total` colors from `seeds`, blending stops in sRGB.
pub fn generate_palette(seeds: &[Color], total: usize) -> Palette {
    generate_palette_with(seeds, total, BlendSpace::Rgb)
}

/// Build a palette of `total` colors from `seeds`.
///
/// * no seeds: `total` copies of white
/// * one seed: hue rotation, see [`rotate_hue`]
/// * two or more: the seeds are evenly spaced stops and each entry is
///   blended from the two stops around its position. The first and last
///   entries are the first and last seeds exactly.
///
/// `total == 1` with several seeds yields only the first seed.
pub fn generate_palette_with(seeds: &[Color], total: usize, blend: BlendSpace) -> Palette {
    let strategy = Strategy::for_seed_count(seeds.len());
    debug!(seeds = seeds.len(), total, ?strategy, ?blend, "generating palette");

    let colors = match strategy {
        Strategy::Blank => vec![WHITE; total],
        Strategy::HueRotation => rotate_hue(seeds[0], total),
        Strategy::Interpolation => interpolate_stops(seeds, total, blend),
    };
    Palette { colors }
}

/// Parse hex seeds and build the palette, failing on the first malformed seed.
pub fn generate_from_hex<S: AsRef<str>>(
    seeds: &[S],
    total: usize,
) -> Result<Palette, ParseColorError> {
    let seeds = seeds
        .iter()
        .map(|s| Color::from_hex(s.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(generate_palette(&seeds, total))
}

fn interpolate_stops(stops: &[Color], total: usize, blend: BlendSpace) -> Vec<Color> {
    let last = stops.len() - 1;
    (0..total)
        .map(|i| {
            let t = if total > 1 {
                i as f64 / (total - 1) as f64
            } else {
                0.0
            };
            let seg = t * last as f64;
            let idx = seg.floor() as usize;
            let local_t = seg - idx as f64;

            if idx >= last {
                stops[last]
            } else if local_t == 0.0 {
                stops[idx]
            } else {
                blend.blend(stops[idx], stops[idx + 1], local_t)
            }
        })
        .collect()
}

/// Pick the seeds to generate from: the first `customize` of `user`, padded
/// from [`DEFAULT_SEEDS`] when `user` is shorter.
pub fn seed_list(user: &[Color], customize: usize) -> Vec<Color> {
    let mut seeds: Vec<Color> = user.iter().copied().take(customize).collect();
    while seeds.len() < customize {
        seeds.push(DEFAULT_SEEDS[seeds.len() % DEFAULT_SEEDS.len()]);
    }
    seeds
}

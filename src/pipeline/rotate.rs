use crate::color::Color;

/// Angular step between consecutive palette entries. The walk repeats every
/// `360 / HUE_STEP_DEGREES` entries.
pub const HUE_STEP_DEGREES: usize = 40;

/// Walk the hue wheel from `seed` in fixed steps, keeping its saturation and
/// lightness. Entry 0 reproduces the seed's hue.
pub fn rotate_hue(seed: Color, total: usize) -> Vec<Color> {
    let base = seed.to_hsl();
    (0..total)
        .map(|i| {
            let angle = (i * HUE_STEP_DEGREES) % 360;
            base.rotate(angle as f64 / 360.0).to_color()
        })
        .collect()
}

//! Cosine palette synthesis and hue-relation derivation
//!
//! The palette is the continuous function `a + b * cos(2pi * (c*t + d))`
//! evaluated component-wise, which maps a scalar phase to a smoothly varying
//! RGB triple. A hue relation then derives the banner's working color from
//! the palette output by rotating hue in HSV space.

use crate::color::hsv::{Hsv, Rgb};
use crate::io::configuration::{
    ANALOGOUS_STEP, COMPLEMENTARY_STEP, TETRAD_STEP, TRIAD_STEP,
};
use ndarray::Array2;
use rand::{Rng, rngs::StdRng};

/// Component-wise coefficients of the cosine palette formula
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteCoeffs {
    /// DC offset per channel
    pub a: [f32; 3],
    /// Oscillation amplitude per channel
    pub b: [f32; 3],
    /// Frequency per channel
    pub c: [f32; 3],
    /// Phase per channel
    pub d: [f32; 3],
}

/// Palette coefficients plus the phase window sampled by the pipeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteParams {
    /// Cosine formula coefficients
    pub coeffs: PaletteCoeffs,
    /// Width of the sampled phase window
    pub range: f32,
    /// Phase offset of the sampled window
    pub cycle: f32,
}

/// Rule for deriving a second color from a base color
///
/// The rotation relations shift hue by a fixed angular step (possibly a
/// random multiple); `Flat` collapses to an achromatic tone of fixed value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorRelation {
    /// Hue shifted by a random multiple (1 or 2) of 30 degrees, either way
    Analogous,
    /// Hue shifted by 180 degrees
    Complementary,
    /// Hue shifted by 120 or 240 degrees
    Triad,
    /// Hue shifted by 90, 180, or 270 degrees
    Tetrad,
    /// Saturation zeroed and value forced to a constant
    Flat {
        /// The forced value channel
        value: f32,
    },
}

impl ColorRelation {
    /// Near-black flat tone
    pub const BLACK: Self = Self::Flat { value: 0.1 };
    /// Full-white flat tone
    pub const WHITE: Self = Self::Flat { value: 1.0 };

    /// Whether this relation forces an achromatic tone
    pub const fn is_flat(&self) -> bool {
        matches!(self, Self::Flat { .. })
    }
}

fn cosine_channel(a: f32, b: f32, c: f32, d: f32, t: f32) -> f32 {
    let phase = c.mul_add(t, d);
    b.mul_add((std::f32::consts::TAU * phase).cos(), a)
}

/// Evaluate the cosine palette at phase `t`
///
/// Channels are clamped into [0,1] by [`Rgb::new`]; coefficient sets whose
/// oscillation exceeds the unit range simply saturate.
pub fn cosine_color(t: f32, coeffs: &PaletteCoeffs) -> Rgb {
    let [ar, ag, ab] = coeffs.a;
    let [br, bg, bb] = coeffs.b;
    let [cr, cg, cb] = coeffs.c;
    let [dr, dg, db] = coeffs.d;

    Rgb::new(
        cosine_channel(ar, br, cr, dr, t),
        cosine_channel(ag, bg, cg, dg, t),
        cosine_channel(ab, bb, cb, db, t),
    )
}

/// Evaluate the palette once per cell, phased by that cell's noise sample
///
/// `t = noise * range + cycle`, so the noise field drives spatial color
/// variation across the emblem.
pub fn per_cell_palette(
    noise_map: &Array2<f64>,
    range: f32,
    cycle: f32,
    coeffs: &PaletteCoeffs,
) -> Array2<Rgb> {
    Array2::from_shape_fn(noise_map.dim(), |index| {
        let sample = noise_map.get(index).copied().unwrap_or(0.5) as f32;
        cosine_color(sample.mul_add(range, cycle), coeffs)
    })
}

/// Fill a uniform palette with a single color
pub fn solid_palette(shape: (usize, usize), color: Rgb) -> Array2<Rgb> {
    Array2::from_elem(shape, color)
}

/// Rotate a base color's hue according to the relation
///
/// Random multiples are drawn from the supplied generator so a fixed seed
/// reproduces the same derived color. The wrapped result is always in [0,1).
pub fn shift_hue(base: Hsv, relation: ColorRelation, rng: &mut StdRng) -> Hsv {
    match relation {
        ColorRelation::Analogous => {
            let steps = rng.random_range(1u32..3) as f32;
            let sign = if rng.random_range(0u32..2) == 0 {
                -1.0
            } else {
                1.0
            };
            Hsv::new(ANALOGOUS_STEP.mul_add(steps * sign, base.h), base.s, base.v)
        }
        ColorRelation::Complementary => Hsv::new(base.h + COMPLEMENTARY_STEP, base.s, base.v),
        ColorRelation::Triad => {
            let steps = rng.random_range(1u32..3) as f32;
            Hsv::new(TRIAD_STEP.mul_add(steps, base.h), base.s, base.v)
        }
        ColorRelation::Tetrad => {
            let steps = rng.random_range(1u32..4) as f32;
            Hsv::new(TETRAD_STEP.mul_add(steps, base.h), base.s, base.v)
        }
        ColorRelation::Flat { value } => Hsv::new(base.h, 0.0, value),
    }
}

//! Compositing pass turning a mask, palette, and noise map into pixels
//!
//! Writes one pixel per cell it owns and leaves every other cell of the
//! shared buffer untouched, which is how earlier passes survive under later
//! empty regions. Shading applies two periodic band modulations: a coarse
//! horizontal banding blended with noise so stripe edges come out irregular,
//! and a fixed count of hard-edged vertical bands from a rounded cosine.

use crate::color::hsv::{Hsv, Rgb};
use crate::io::configuration::{BLUE_TINT, SHADE_STRENGTH};
use ndarray::Array2;

/// Composite one pass into the shared pixel buffer
///
/// Occupied cells receive the banded, blue-tinted palette color. With
/// `outline` enabled, unoccupied cells adjacent (4-connected) to an occupied
/// cell are stroked solid black; everything else keeps its prior content.
pub fn render(
    pixels: &mut Array2<Option<Rgb>>,
    mask: &Array2<bool>,
    palette: &Array2<Rgb>,
    noise_map: &Array2<f64>,
    outline: bool,
) {
    let (rows, cols) = mask.dim();

    for ((row, col), &occupied) in mask.indexed_iter() {
        if occupied {
            let base = palette.get((row, col)).copied().unwrap_or(Rgb::BLACK);
            let sample = noise_map.get((row, col)).copied().unwrap_or(0.5) as f32;

            let row_term = row_band(row, rows, sample);
            let col_term = column_band(col, cols);

            let Hsv { h, mut s, mut v } = base.to_hsv();
            v -= row_term * v * SHADE_STRENGTH;
            s += row_term * s * SHADE_STRENGTH;
            v -= col_term * v * SHADE_STRENGTH;
            s += col_term * s * SHADE_STRENGTH;

            let shaded = Hsv::new(h, s, v).to_rgb();
            let tinted = Rgb::new(
                shaded.r,
                shaded.g,
                (row_term + col_term).mul_add(BLUE_TINT, shaded.b),
            );

            if let Some(slot) = pixels.get_mut((row, col)) {
                *slot = Some(tinted);
            }
        } else if outline && borders_occupied(mask, row, col) {
            if let Some(slot) = pixels.get_mut((row, col)) {
                *slot = Some(Rgb::BLACK);
            }
        }
    }
}

// Coarse horizontal banding blended with the noise sample; quantized to
// four levels in [0,1]
fn row_band(row: usize, rows: usize, sample: f32) -> f32 {
    let position = (row as f32 / (rows - 1) as f32).mul_add(9.0, sample * 3.0);
    (3.0 - position / 4.0).floor() / 3.0
}

// Four hard-edged vertical bands from a rounded cosine, in {0, 1/2, 1}
fn column_band(col: usize, cols: usize) -> f32 {
    let angle = col as f32 / (cols - 1) as f32 * std::f32::consts::TAU * 4.0;
    (angle.cos() + 1.0).round() / 2.0
}

// 4-connected occupancy test with coordinates clamped at the frame
fn borders_occupied(mask: &Array2<bool>, row: usize, col: usize) -> bool {
    let (rows, cols) = mask.dim();
    let at = |r: usize, c: usize| mask.get((r, c)).copied().unwrap_or(false);

    at(row, col.saturating_sub(1))
        || at(row, (col + 1).min(cols - 1))
        || at(row.saturating_sub(1), col)
        || at((row + 1).min(rows - 1), col)
}

//! Seeded constrained random walk
//!
//! Carves an organic region into a fresh mask by wandering from a start
//! cell, one king-move step at a time. Steps landing outside the allowed
//! region are discarded (the walker stays put); out-of-range coordinates
//! reflect according to the edge policy. With symmetry enabled every marked
//! cell is mirrored about the vertical centerline.

use crate::spatial::grid::mirror_col;
use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Boundary behavior for steps leaving the interior
///
/// The two reflection points are intentionally different and produce
/// visibly different walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgePolicy {
    /// Reflect about the inner boundary; the walk bounces off the frame
    Bounce,
    /// Reflect about `dim - 2`; the walk re-enters from the far side
    Wrap,
}

/// Parameters of one carving walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkParams {
    /// Number of steps to attempt
    pub iterations: usize,
    /// Seed determining the full step sequence
    pub seed: u32,
    /// Boundary behavior
    pub edges: EdgePolicy,
    /// Mirror every marked cell about the vertical centerline
    pub symmetric: bool,
    /// Requested start cell as (row, col)
    pub start: [usize; 2],
}

/// Run the walk and return the carved mask
///
/// Cells outside `allowed` can never become occupied; if the requested
/// start cell is not allowed, the nearest allowed row in the same column is
/// used instead (ties to the first found scanning from the last row down).
pub fn carve(allowed: &Array2<bool>, params: &WalkParams) -> Array2<bool> {
    let (rows, cols) = allowed.dim();
    let mut mask = Array2::from_elem((rows, cols), false);

    let start = resolve_start(allowed, params.start);
    mark(&mut mask, allowed, start, params.symmetric);

    let mut rng = StdRng::seed_from_u64(u64::from(params.seed));
    let mut current = [start[0] as i32, start[1] as i32];

    for _ in 0..params.iterations {
        let step_col = rng.random_range(-1i32..=1);
        let step_row = rng.random_range(-1i32..=1);

        let candidate = [
            reflect(current[0] + step_row, rows as i32, params.edges),
            reflect(current[1] + step_col, cols as i32, params.edges),
        ];

        let cell = [candidate[0] as usize, candidate[1] as usize];
        if is_allowed(allowed, cell) {
            current = candidate;
            mark(&mut mask, allowed, cell, params.symmetric);
        }
    }

    mask
}

// Reflect a coordinate back into [1, len - 2] when it leaves that interior
const fn reflect(coord: i32, len: i32, edges: EdgePolicy) -> i32 {
    if coord >= 1 && coord < len - 1 {
        coord
    } else {
        match edges {
            EdgePolicy::Bounce => (1 - coord).abs(),
            EdgePolicy::Wrap => (coord - (len - 2)).abs(),
        }
    }
}

fn is_allowed(allowed: &Array2<bool>, cell: [usize; 2]) -> bool {
    allowed.get((cell[0], cell[1])).copied().unwrap_or(false)
}

// Mark a cell (and its mirror when symmetric); only allowed cells are ever
// set, so occupancy stays contained in the allowed region
fn mark(mask: &mut Array2<bool>, allowed: &Array2<bool>, cell: [usize; 2], symmetric: bool) {
    let (_, cols) = mask.dim();

    if is_allowed(allowed, cell) {
        if let Some(slot) = mask.get_mut((cell[0], cell[1])) {
            *slot = true;
        }
    }

    if symmetric {
        let mirrored = [cell[0], mirror_col(cell[1], cols)];
        if is_allowed(allowed, mirrored) {
            if let Some(slot) = mask.get_mut((mirrored[0], mirrored[1])) {
                *slot = true;
            }
        }
    }
}

// Nearest allowed row in the start column, ties to the first found scanning
// from the last row downward; falls back to the request when none exists
fn resolve_start(allowed: &Array2<bool>, start: [usize; 2]) -> [usize; 2] {
    if is_allowed(allowed, start) {
        return start;
    }

    let (rows, _) = allowed.dim();
    let mut best: Option<usize> = None;

    for row in (0..rows).rev() {
        if is_allowed(allowed, [row, start[1]]) {
            let distance = start[0].abs_diff(row);
            if best.is_none_or(|found| distance < start[0].abs_diff(found)) {
                best = Some(row);
            }
        }
    }

    best.map_or(start, |row| [row, start[1]])
}

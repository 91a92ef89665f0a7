//! Cellular-automaton smoothing with configurable birth/survival rules
//!
//! Repeatedly relaxes a carved mask toward a coherent silhouette. Each
//! generation reads a frozen snapshot of the previous one, so updates never
//! observe partial results; the outermost rows and columns are never
//! evaluated and keep their state for the whole run.

use bitvec::prelude::{BitVec, bitvec};
use ndarray::Array2;
use std::fmt;

/// Number of distinct live-neighbor counts (0 through 8)
const NEIGHBOR_COUNTS: usize = 9;

/// Set of live-neighbor counts triggering a transition
///
/// One instance describes the birth rule (counts that bring a dead cell to
/// life) or the survival rule (counts that keep a live cell alive). Counts
/// above 8 are silently ignored on insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborRule {
    bits: BitVec,
}

impl NeighborRule {
    /// Create a rule matching no neighbor count
    pub fn empty() -> Self {
        Self {
            bits: bitvec![0; NEIGHBOR_COUNTS],
        }
    }

    /// Create a rule matching every neighbor count
    pub fn all() -> Self {
        Self {
            bits: bitvec![1; NEIGHBOR_COUNTS],
        }
    }

    /// Create a rule from a list of neighbor counts
    pub fn from_counts(counts: &[u8]) -> Self {
        let mut rule = Self::empty();
        for &count in counts {
            if usize::from(count) < NEIGHBOR_COUNTS {
                rule.bits.set(usize::from(count), true);
            }
        }
        rule
    }

    /// Test whether a neighbor count triggers this rule
    pub fn contains(&self, count: u8) -> bool {
        self.bits.get(usize::from(count)).as_deref() == Some(&true)
    }

    /// Whether no count triggers this rule
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Extract the matching counts in ascending order
    pub fn counts(&self) -> Vec<u8> {
        self.bits.iter_ones().map(|count| count as u8).collect()
    }
}

impl fmt::Display for NeighborRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NeighborRule({:?})", self.counts())
    }
}

/// Run `generations` smoothing steps over the mask in place
///
/// A dead interior cell becomes alive when its live-neighbor count is in
/// `birth` and the cell is inside the allowed region; a live cell dies when
/// its count is not in `survive`. All other cells keep their state.
pub fn smooth(
    mask: &mut Array2<bool>,
    allowed: &Array2<bool>,
    birth: &NeighborRule,
    survive: &NeighborRule,
    generations: usize,
) {
    let (rows, cols) = mask.dim();
    if rows < 3 || cols < 3 {
        return;
    }

    for _ in 0..generations {
        let snapshot = mask.clone();

        for row in 1..rows - 1 {
            for col in 1..cols - 1 {
                let alive = snapshot.get((row, col)).copied().unwrap_or(false);
                let count = live_neighbors(&snapshot, row, col);

                let next = if alive {
                    survive.contains(count)
                } else {
                    birth.contains(count) && allowed.get((row, col)).copied().unwrap_or(false)
                };

                if let Some(cell) = mask.get_mut((row, col)) {
                    *cell = next;
                }
            }
        }
    }
}

// Count live cells among the 8 surrounding cells of an interior cell
fn live_neighbors(snapshot: &Array2<bool>, row: usize, col: usize) -> u8 {
    let mut count = 0;
    for r in row - 1..=row + 1 {
        for c in col - 1..=col + 1 {
            if (r, c) != (row, col) && snapshot.get((r, c)).copied().unwrap_or(false) {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::{NeighborRule, smooth};
    use ndarray::Array2;

    fn set(mask: &mut Array2<bool>, cells: &[(usize, usize)]) {
        for &cell in cells {
            if let Some(slot) = mask.get_mut(cell) {
                *slot = true;
            }
        }
    }

    #[test]
    fn rule_membership() {
        let rule = NeighborRule::from_counts(&[3, 5, 12]);
        assert!(rule.contains(3));
        assert!(rule.contains(5));
        assert!(!rule.contains(4));
        assert_eq!(rule.counts(), vec![3, 5]);
    }

    #[test]
    fn empty_birth_full_survive_is_identity() {
        let allowed = Array2::from_elem((8, 8), true);
        let mut mask = Array2::from_elem((8, 8), false);
        set(&mut mask, &[(2, 2), (2, 3), (3, 2), (5, 5), (1, 6)]);
        let original = mask.clone();

        smooth(
            &mut mask,
            &allowed,
            &NeighborRule::empty(),
            &NeighborRule::all(),
            25,
        );

        assert_eq!(mask, original);
    }

    #[test]
    fn frame_cells_are_never_evaluated() {
        let allowed = Array2::from_elem((6, 6), true);
        // Fill everything, then apply a rule under which every evaluated
        // cell dies; only the frame may remain
        let mut mask = Array2::from_elem((6, 6), true);

        smooth(
            &mut mask,
            &allowed,
            &NeighborRule::empty(),
            &NeighborRule::empty(),
            1,
        );

        for ((row, col), &occupied) in mask.indexed_iter() {
            let frame = row == 0 || col == 0 || row == 5 || col == 5;
            assert_eq!(occupied, frame, "cell ({row}, {col})");
        }
    }

    #[test]
    fn blinker_oscillates_under_conway_rules() {
        let allowed = Array2::from_elem((5, 5), true);
        let birth = NeighborRule::from_counts(&[3]);
        let survive = NeighborRule::from_counts(&[2, 3]);

        let mut mask = Array2::from_elem((5, 5), false);
        set(&mut mask, &[(1, 2), (2, 2), (3, 2)]);
        let vertical = mask.clone();

        smooth(&mut mask, &allowed, &birth, &survive, 1);

        let mut horizontal = Array2::from_elem((5, 5), false);
        set(&mut horizontal, &[(2, 1), (2, 2), (2, 3)]);
        assert_eq!(mask, horizontal);

        smooth(&mut mask, &allowed, &birth, &survive, 1);
        assert_eq!(mask, vertical);
    }

    #[test]
    fn birth_respects_allowed_region() {
        // A dead cell with exactly three live neighbors, but outside the
        // allowed region, must stay dead
        let mut allowed = Array2::from_elem((5, 5), true);
        if let Some(slot) = allowed.get_mut((2, 2)) {
            *slot = false;
        }

        let mut mask = Array2::from_elem((5, 5), false);
        set(&mut mask, &[(1, 1), (1, 2), (1, 3)]);

        smooth(
            &mut mask,
            &allowed,
            &NeighborRule::from_counts(&[3]),
            &NeighborRule::all(),
            1,
        );

        assert_eq!(mask.get((2, 2)).copied(), Some(false));
    }
}

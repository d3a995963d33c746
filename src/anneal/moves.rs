//! Pivot-rotation move proposal.

use rand::Rng;

use super::walk::random_walk;
use crate::lattice::Coord;

/// Proposes a neighboring conformation from the current one.
///
/// Picks a pivot uniformly among the interior chain positions and
/// rotates the suffix from the pivot to the chain end by 90° clockwise
/// about the pivot cell; the prefix and the pivot itself are unchanged.
/// Rotation is an isometry, so connectivity within the suffix is
/// preserved; only collisions between the rotated suffix and the rest
/// of the chain can invalidate the result.
///
/// The candidate is returned regardless of validity; the caller checks
/// [`crate::lattice::is_valid`] before scoring or accepting it.
///
/// Chains shorter than 3 cells have no interior pivot, so the "move" is
/// to regenerate a fresh random walk (which cannot get stuck at these
/// lengths).
pub fn propose<R: Rng>(current: &[Coord], rng: &mut R) -> Vec<Coord> {
    if current.len() < 3 {
        loop {
            if let Some(path) = random_walk(current.len(), rng) {
                return path;
            }
        }
    }

    let pivot_idx = rng.random_range(1..current.len() - 1);
    let pivot = current[pivot_idx];

    let mut candidate = Vec::with_capacity(current.len());
    candidate.extend_from_slice(&current[..pivot_idx]);
    candidate.extend(current[pivot_idx..].iter().map(|&c| rotate_cw(c, pivot)));
    candidate
}

/// Rotates `cell` 90° clockwise about `pivot`: `(dx, dy) -> (dy, -dx)`
/// in pivot-relative coordinates.
fn rotate_cw(cell: Coord, pivot: Coord) -> Coord {
    let dx = cell.x - pivot.x;
    let dy = cell.y - pivot.y;
    Coord::new(pivot.x + dy, pivot.y - dx)
}

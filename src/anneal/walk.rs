//! Random self-avoiding walk generation.

use std::collections::HashSet;

use rand::Rng;

use crate::lattice::Coord;

/// Generates a random self-avoiding walk of `len` cells starting at
/// the origin.
///
/// Greedy, no backtracking: at each step the walk picks uniformly among
/// the unoccupied lattice neighbors of its tip. If the tip has no free
/// neighbor before `len` is reached the walk is stuck and `None` is
/// returned; the caller retries with a fresh draw. Getting stuck is a
/// known limitation of the greedy construction and becomes more likely
/// for longer chains.
pub fn random_walk<R: Rng>(len: usize, rng: &mut R) -> Option<Vec<Coord>> {
    let mut path = Vec::with_capacity(len);
    if len == 0 {
        return Some(path);
    }
    path.push(Coord::new(0, 0));

    let mut occupied: HashSet<Coord> = path.iter().copied().collect();
    while path.len() < len {
        let tip = *path.last().unwrap();
        let free: Vec<Coord> = tip
            .neighbors()
            .into_iter()
            .filter(|c| !occupied.contains(c))
            .collect();
        if free.is_empty() {
            return None;
        }
        let next = free[rng.random_range(0..free.len())];
        occupied.insert(next);
        path.push(next);
    }
    Some(path)
}

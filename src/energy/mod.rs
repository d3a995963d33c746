//! HP contact energy.
//!
//! The energy of a conformation is the negated count of non-bonded H-H
//! contacts: pairs of hydrophobic residues that occupy adjacent lattice
//! cells but are not consecutive in the chain. Chain neighbors always
//! touch and carry no folding information, so they are excluded.
//!
//! Both functions assume a valid (self-avoiding, connected) path of the
//! same length as the sequence; validity is the caller's responsibility.

use std::collections::HashMap;

use crate::lattice::Coord;
use crate::model::HpSequence;

/// Chain positions of hydrophobic residues, keyed by occupied cell.
/// Self-avoidance makes the mapping unique.
fn h_occupancy(sequence: &HpSequence, path: &[Coord]) -> HashMap<Coord, usize> {
    sequence
        .residues()
        .iter()
        .zip(path)
        .enumerate()
        .filter(|(_, (residue, _))| residue.is_hydrophobic())
        .map(|(i, (_, &coord))| (coord, i))
        .collect()
}

/// Non-bonded H-H contact pairs in canonical `(i, j)` order with `i < j`.
///
/// A pair is counted once, when `j > i + 1`: the `j > i` half de-dupes
/// the two directions of the same contact, and excluding `j == i + 1`
/// drops bonded chain neighbors.
pub fn hh_contacts(sequence: &HpSequence, path: &[Coord]) -> Vec<(usize, usize)> {
    debug_assert_eq!(sequence.len(), path.len());
    let occupancy = h_occupancy(sequence, path);
    let mut contacts = Vec::new();
    for (i, (residue, &coord)) in sequence.residues().iter().zip(path).enumerate() {
        if !residue.is_hydrophobic() {
            continue;
        }
        for neighbor in coord.neighbors() {
            if let Some(&j) = occupancy.get(&neighbor) {
                if j > i + 1 {
                    contacts.push((i, j));
                }
            }
        }
    }
    contacts
}

/// HP energy: `-1` per non-bonded H-H contact.
///
/// An all-polar sequence, or any conformation without fold-induced
/// contacts, scores 0.
pub fn energy(sequence: &HpSequence, path: &[Coord]) -> i32 {
    debug_assert_eq!(sequence.len(), path.len());
    let occupancy = h_occupancy(sequence, path);
    let mut contacts = 0;
    for (i, (residue, &coord)) in sequence.residues().iter().zip(path).enumerate() {
        if !residue.is_hydrophobic() {
            continue;
        }
        for neighbor in coord.neighbors() {
            if let Some(&j) = occupancy.get(&neighbor) {
                if j > i + 1 {
                    contacts += 1;
                }
            }
        }
    }
    -contacts
}

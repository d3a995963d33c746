//! Residue types and HP sequences.
//!
//! The HP model reduces each residue to a binary class: Hydrophobic (H)
//! or Polar (P). A sequence is fixed at construction and never mutated
//! during a search.

use std::fmt;
use std::str::FromStr;

use crate::error::FoldError;

/// Residue class in the HP model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Residue {
    Hydrophobic,
    Polar,
}

impl Residue {
    /// Whether this residue contributes to H-H contact energy.
    pub fn is_hydrophobic(self) -> bool {
        matches!(self, Residue::Hydrophobic)
    }

    /// The single-letter symbol, `'H'` or `'P'`.
    pub fn symbol(self) -> char {
        match self {
            Residue::Hydrophobic => 'H',
            Residue::Polar => 'P',
        }
    }
}

/// An immutable, non-empty sequence of HP residues.
///
/// Construct via [`HpSequence::new`] or parse from a string over the
/// case-insensitive `{H, P}` alphabet:
///
/// ```
/// use hpfold::model::{HpSequence, Residue};
///
/// let seq: HpSequence = "hpph".parse().unwrap();
/// assert_eq!(seq.len(), 4);
/// assert_eq!(seq.residue(0), Residue::Hydrophobic);
/// assert!("HXPH".parse::<HpSequence>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HpSequence {
    residues: Vec<Residue>,
}

impl HpSequence {
    /// Wraps a residue list. Fails on an empty list.
    pub fn new(residues: Vec<Residue>) -> Result<Self, FoldError> {
        if residues.is_empty() {
            return Err(FoldError::EmptySequence);
        }
        Ok(Self { residues })
    }

    /// Number of residues.
    #[allow(clippy::len_without_is_empty)] // never empty by construction
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    /// The residue at chain position `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len()`.
    pub fn residue(&self, i: usize) -> Residue {
        self.residues[i]
    }

    /// All residues in chain order.
    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }
}

impl FromStr for HpSequence {
    type Err = FoldError;

    /// Parses a string like `"HPPH"`. Case-insensitive; any symbol
    /// outside `{H, P}` is rejected.
    fn from_str(s: &str) -> Result<Self, FoldError> {
        let residues = s
            .chars()
            .enumerate()
            .map(|(position, symbol)| match symbol.to_ascii_uppercase() {
                'H' => Ok(Residue::Hydrophobic),
                'P' => Ok(Residue::Polar),
                _ => Err(FoldError::Symbol { symbol, position }),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(residues)
    }
}

impl fmt::Display for HpSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for residue in &self.residues {
            write!(f, "{}", residue.symbol())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_case() {
        let seq: HpSequence = "HpPh".parse().unwrap();
        assert_eq!(
            seq.residues(),
            &[
                Residue::Hydrophobic,
                Residue::Polar,
                Residue::Polar,
                Residue::Hydrophobic,
            ]
        );
    }

    #[test]
    fn test_parse_rejects_unknown_symbol() {
        let err = "HPXH".parse::<HpSequence>().unwrap_err();
        assert_eq!(
            err,
            FoldError::Symbol {
                symbol: 'X',
                position: 2
            }
        );
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert_eq!("".parse::<HpSequence>().unwrap_err(), FoldError::EmptySequence);
    }

    #[test]
    fn test_new_rejects_empty() {
        assert_eq!(HpSequence::new(vec![]).unwrap_err(), FoldError::EmptySequence);
    }

    #[test]
    fn test_display_round_trip() {
        let seq: HpSequence = "hhpphp".parse().unwrap();
        assert_eq!(seq.to_string(), "HHPPHP");
    }

    #[test]
    fn test_single_residue() {
        let seq: HpSequence = "p".parse().unwrap();
        assert_eq!(seq.len(), 1);
        assert!(!seq.residue(0).is_hydrophobic());
    }
}

//! Text rendering of a folded conformation.
//!
//! Draws the backbone-and-contact diagram on a character grid: residue
//! letters at lattice cells, `-`/`|` for chain bonds, `·` for
//! non-bonded H-H contacts. Purely a consumer of engine outputs; the
//! search never depends on this module.

use crate::energy::hh_contacts;
use crate::lattice::Coord;
use crate::model::HpSequence;

/// Renders a conformation as an ASCII diagram.
///
/// Each lattice cell maps to every second grid column and row, leaving
/// the odd positions free for bond and contact marks. Rows run from the
/// highest `y` down, so the diagram reads like a plot.
///
/// ```
/// use hpfold::lattice::Coord;
/// use hpfold::model::HpSequence;
/// use hpfold::render::ascii_fold;
///
/// let seq: HpSequence = "HPPH".parse().unwrap();
/// let path = vec![
///     Coord::new(0, 0),
///     Coord::new(1, 0),
///     Coord::new(1, 1),
///     Coord::new(0, 1),
/// ];
/// assert_eq!(ascii_fold(&seq, &path), "H-P\n· |\nH-P\n");
/// ```
pub fn ascii_fold(sequence: &HpSequence, path: &[Coord]) -> String {
    if path.is_empty() {
        return String::new();
    }

    let min_x = path.iter().map(|c| c.x).min().unwrap_or(0);
    let max_x = path.iter().map(|c| c.x).max().unwrap_or(0);
    let min_y = path.iter().map(|c| c.y).min().unwrap_or(0);
    let max_y = path.iter().map(|c| c.y).max().unwrap_or(0);

    let width = 2 * (max_x - min_x) as usize + 1;
    let height = 2 * (max_y - min_y) as usize + 1;
    let mut grid = vec![vec![' '; width]; height];

    // Grid position of a cell; odd rows/columns hold bond marks.
    let col = |c: Coord| 2 * (c.x - min_x) as usize;
    let row = |c: Coord| 2 * (max_y - c.y) as usize;

    // Contacts first, so bonds and residues overwrite where they overlap.
    for (i, j) in hh_contacts(sequence, path) {
        let (a, b) = (path[i], path[j]);
        grid[(row(a) + row(b)) / 2][(col(a) + col(b)) / 2] = '·';
    }

    for bond in path.windows(2) {
        let (a, b) = (bond[0], bond[1]);
        let mark = if a.y == b.y { '-' } else { '|' };
        grid[(row(a) + row(b)) / 2][(col(a) + col(b)) / 2] = mark;
    }

    for (i, &cell) in path.iter().enumerate() {
        grid[row(cell)][col(cell)] = sequence.residue(i).symbol();
    }

    let mut out = String::new();
    for line in grid {
        let rendered: String = line.into_iter().collect();
        out.push_str(rendered.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_square_with_contact() {
        let seq: HpSequence = "HPPH".parse().unwrap();
        let path = vec![
            Coord::new(0, 0),
            Coord::new(1, 0),
            Coord::new(1, 1),
            Coord::new(0, 1),
        ];
        assert_eq!(ascii_fold(&seq, &path), "H-P\n· |\nH-P\n");
    }

    #[test]
    fn test_straight_chain() {
        let seq: HpSequence = "HPH".parse().unwrap();
        let path = vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)];
        assert_eq!(ascii_fold(&seq, &path), "H-P-H\n");
    }

    #[test]
    fn test_vertical_chain() {
        let seq: HpSequence = "PH".parse().unwrap();
        let path = vec![Coord::new(0, 1), Coord::new(0, 0)];
        assert_eq!(ascii_fold(&seq, &path), "P\n|\nH\n");
    }

    #[test]
    fn test_negative_coordinates_shift_into_view() {
        let seq: HpSequence = "PP".parse().unwrap();
        let path = vec![Coord::new(-3, -7), Coord::new(-2, -7)];
        assert_eq!(ascii_fold(&seq, &path), "P-P\n");
    }

    #[test]
    fn test_single_residue() {
        let seq: HpSequence = "H".parse().unwrap();
        assert_eq!(ascii_fold(&seq, &[Coord::new(0, 0)]), "H\n");
    }
}

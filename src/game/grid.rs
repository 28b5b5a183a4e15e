//! Board snapshots and win evaluation

use super::Mark;
use std::fmt;

/// Number of cells on the board
pub const CELL_COUNT: usize = 9;

/// The 8 winning triples, checked in this order: rows, columns, diagonals
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A position on the board, always in `0..9`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellIndex(usize);

impl CellIndex {
    pub fn new(index: usize) -> Option<Self> {
        (index < CELL_COUNT).then_some(CellIndex(index))
    }

    /// Map a digit key `'1'..='9'` to cells 0..8
    pub fn from_digit(c: char) -> Option<Self> {
        let n = c.to_digit(10)? as usize;
        n.checked_sub(1).and_then(Self::new)
    }

    /// All cells in row-major order
    pub fn all() -> impl Iterator<Item = CellIndex> {
        (0..CELL_COUNT).map(CellIndex)
    }

    pub fn get(self) -> usize {
        self.0
    }

    pub fn row(self) -> usize {
        self.0 / 3
    }

    pub fn col(self) -> usize {
        self.0 % 3
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A complete board snapshot
///
/// `Grid` is a plain value: a move never mutates an existing grid, it produces a
/// new one with [`Grid::with_mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    cells: [Mark; CELL_COUNT],
}

impl Grid {
    /// The all-empty starting grid
    pub fn empty() -> Self {
        Grid::default()
    }

    pub fn from_marks(cells: [Mark; CELL_COUNT]) -> Self {
        Grid { cells }
    }

    pub fn get(&self, index: CellIndex) -> Mark {
        self.cells[index.0]
    }

    /// A copy of this grid with one cell replaced
    pub fn with_mark(&self, index: CellIndex, mark: Mark) -> Grid {
        let mut cells = self.cells;
        cells[index.0] = mark;
        Grid { cells }
    }

    pub fn marks(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|m| !m.is_empty())
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|m| !m.is_empty()).count()
    }

    /// Cells that differ between `self` and `other`
    pub fn diff(&self, other: &Grid) -> Vec<CellIndex> {
        CellIndex::all()
            .filter(|&i| self.get(i) != other.get(i))
            .collect()
    }
}

/// The first winning triple in [`WINNING_LINES`] order, if any
pub fn winning_line(grid: &Grid) -> Option<[CellIndex; 3]> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let cells = grid.marks();
        let first = cells[a];
        if !first.is_empty() && first == cells[b] && first == cells[c] {
            Some([CellIndex(a), CellIndex(b), CellIndex(c)])
        } else {
            None
        }
    })
}

/// The mark occupying the first complete triple, or `None` if nobody has won
pub fn evaluate_winner(grid: &Grid) -> Option<Mark> {
    winning_line(grid).map(|[a, _, _]| grid.get(a))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(cells: &[(usize, Mark)]) -> Grid {
        cells.iter().fold(Grid::empty(), |g, &(i, m)| {
            g.with_mark(CellIndex::new(i).unwrap(), m)
        })
    }

    #[test]
    fn test_empty_grid_has_no_winner() {
        assert_eq!(evaluate_winner(&Grid::empty()), None);
        assert!(!Grid::empty().is_full());
    }

    #[test]
    fn test_every_line_wins_for_either_mark() {
        for line in WINNING_LINES {
            for mark in [Mark::X, Mark::O] {
                let grid = grid_with(&[(line[0], mark), (line[1], mark), (line[2], mark)]);
                assert_eq!(evaluate_winner(&grid), Some(mark), "line {:?}", line);
            }
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        for line in WINNING_LINES {
            let grid = grid_with(&[(line[0], Mark::X), (line[1], Mark::O), (line[2], Mark::X)]);
            assert_eq!(evaluate_winner(&grid), None, "line {:?}", line);

            let partial = grid_with(&[(line[0], Mark::X), (line[1], Mark::X)]);
            assert_eq!(evaluate_winner(&partial), None, "line {:?}", line);
        }
    }

    #[test]
    fn test_first_line_in_order_is_reported() {
        // Row 0 and column 0 both complete; row 0 comes first
        let grid = grid_with(&[
            (0, Mark::X),
            (1, Mark::X),
            (2, Mark::X),
            (3, Mark::X),
            (6, Mark::X),
        ]);
        let line = winning_line(&grid).unwrap();
        assert_eq!(line.map(CellIndex::get), [0, 1, 2]);
    }

    #[test]
    fn test_full_board_without_winner() {
        use Mark::{O, X};
        let grid = Grid::from_marks([X, O, X, X, O, O, O, X, X]);
        assert!(grid.is_full());
        assert_eq!(evaluate_winner(&grid), None);
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let grid = Grid::empty();
        let index = CellIndex::new(4).unwrap();
        let next = grid.with_mark(index, Mark::X);
        assert_eq!(grid.get(index), Mark::Empty);
        assert_eq!(next.get(index), Mark::X);
        assert_eq!(grid.diff(&next), vec![index]);
    }

    #[test]
    fn test_cell_index_bounds() {
        assert!(CellIndex::new(8).is_some());
        assert!(CellIndex::new(9).is_none());
        assert_eq!(CellIndex::from_digit('1'), CellIndex::new(0));
        assert_eq!(CellIndex::from_digit('9'), CellIndex::new(8));
        assert_eq!(CellIndex::from_digit('0'), None);
        assert_eq!(CellIndex::from_digit('a'), None);

        let seven = CellIndex::new(7).unwrap();
        assert_eq!((seven.row(), seven.col()), (2, 1));
    }
}

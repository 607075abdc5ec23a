use rand::Rng;
use serde::{Deserialize, Serialize};

/// Single coordinate axis used for row/column counts and positions.
pub type Coord = u8;

/// Count type used for bomb counts and total-cell counts.
pub type CellCount = u16;

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// A `(row, column)` coordinate on the board.
///
/// Validity is always relative to a board size, see [`Position::is_valid`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: Coord,
    pub column: Coord,
}

impl Position {
    pub const fn new(row: Coord, column: Coord) -> Self {
        Self { row, column }
    }

    pub const fn is_valid(self, rows: Coord, columns: Coord) -> bool {
        self.row < rows && self.column < columns
    }

    /// Draws row and column independently and uniformly from `[0, max_rows)` and `[0, max_columns)`.
    ///
    /// Nothing prevents drawing the same position twice, callers deal with collisions.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, max_rows: Coord, max_columns: Coord) -> Self {
        Self {
            row: rng.random_range(0..max_rows),
            column: rng.random_range(0..max_columns),
        }
    }

    /// In-bounds neighbors of this position, never including the position itself.
    pub fn neighbors(self, rows: Coord, columns: Coord) -> NeighborIter {
        NeighborIter::new(self, (rows, columns))
    }

    pub(crate) fn from_flat_index(index: usize, columns: Coord) -> Self {
        let columns = usize::from(columns);
        Self {
            row: (index / columns) as Coord,
            column: (index % columns) as Coord,
        }
    }
}

impl From<(Coord, Coord)> for Position {
    fn from((row, column): (Coord, Coord)) -> Self {
        Self::new(row, column)
    }
}

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Position {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.row.into(), self.column.into()]
    }
}

const DISPLACEMENTS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `position`, returning a value only when it remains in bounds.
fn apply_delta(position: Position, delta: (i8, i8), bounds: (Coord, Coord)) -> Option<Position> {
    let (rows, columns) = bounds;
    let row = position.row.checked_add_signed(delta.0)?;
    let column = position.column.checked_add_signed(delta.1)?;
    let next = Position::new(row, column);
    next.is_valid(rows, columns).then_some(next)
}

#[derive(Debug)]
pub struct NeighborIter {
    center: Position,
    bounds: (Coord, Coord),
    index: u8,
}

impl NeighborIter {
    fn new(center: Position, bounds: (Coord, Coord)) -> Self {
        Self {
            center,
            bounds,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Position;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(&delta) = DISPLACEMENTS.get(usize::from(self.index)) {
            self.index += 1;
            if let Some(next) = apply_delta(self.center, delta, self.bounds) {
                return Some(next);
            }
        }
        None
    }
}

use pathviz_core::Pos;

/// Manhattan (L1) distance between two positions.
#[inline]
pub fn manhattan(a: Pos, b: Pos) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Estimate of the remaining cost between two cells.
///
/// Must never overestimate the true number of unit steps (admissible), and
/// must be consistent, or the search may close a cell with a non-optimal
/// cost.
pub trait Heuristic {
    fn estimate(&self, from: Pos, to: Pos) -> i32;
}

/// [`manhattan`] as a [`Heuristic`]. The default.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Heuristic for Manhattan {
    #[inline]
    fn estimate(&self, from: Pos, to: Pos) -> i32 {
        manhattan(from, to)
    }
}

/// Always zero; turns the search into Dijkstra's algorithm.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Zero;

impl Heuristic for Zero {
    #[inline]
    fn estimate(&self, _from: Pos, _to: Pos) -> i32 {
        0
    }
}

//! The [`Grid`] type: an N×N square of [`Cell`]s with derived adjacency.
//!
//! Cells live in one row-major `Vec`; everything outside this module refers
//! to them by position or by flat index, never by reference. Neighbor sets
//! are a derived structure: they are rebuilt only by
//! [`recompute_neighbors`](Grid::recompute_neighbors) and go stale as soon
//! as a barrier is edited.

use std::fmt;

use crate::cell::{Cell, Role};
use crate::error::GridError;
use crate::geom::Pos;

// ---------------------------------------------------------------------------
// Grid
// ---------------------------------------------------------------------------

/// A fixed-size square grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
    neighbors: Vec<Vec<usize>>,
}

impl Grid {
    /// Create a `size`×`size` grid with every cell [`Role::Empty`].
    pub fn new(size: usize) -> Result<Self, GridError> {
        let len = size
            .checked_mul(size)
            .filter(|&n| n > 0 && size <= i32::MAX as usize)
            .ok_or(GridError::InvalidSize(size))?;
        let mut cells = Vec::with_capacity(len);
        for row in 0..size {
            for col in 0..size {
                cells.push(Cell::new(Pos::new(row as i32, col as i32)));
            }
        }
        Ok(Self {
            size,
            cells,
            neighbors: vec![Vec::new(); len],
        })
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a grid has at least one cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        let n = self.size as i64;
        p.row >= 0 && p.col >= 0 && (p.row as i64) < n && (p.col as i64) < n
    }

    /// Convert a position to a flat row-major index. `None` if out of bounds.
    #[inline]
    pub fn index(&self, p: Pos) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        Some(p.row as usize * self.size + p.col as usize)
    }

    /// Convert a flat index back to a position.
    #[inline]
    pub fn pos(&self, idx: usize) -> Pos {
        Pos::new((idx / self.size) as i32, (idx % self.size) as i32)
    }

    /// Same as [`index`](Self::index) but with an error for out-of-bounds
    /// positions.
    pub fn checked_index(&self, p: Pos) -> Result<usize, GridError> {
        self.index(p).ok_or(GridError::OutOfBounds {
            pos: p,
            size: self.size,
        })
    }

    // -----------------------------------------------------------------------
    // Roles
    // -----------------------------------------------------------------------

    /// The cell at `p`, if in bounds.
    pub fn cell(&self, p: Pos) -> Option<&Cell> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// The role at `p`, if in bounds.
    pub fn role(&self, p: Pos) -> Option<Role> {
        self.cell(p).map(Cell::role)
    }

    /// The role at flat index `idx`.
    ///
    /// # Panics
    ///
    /// If `idx >= self.len()`.
    #[inline]
    pub fn role_at(&self, idx: usize) -> Role {
        self.cells[idx].role
    }

    /// Overwrite the role at `p`.
    ///
    /// Cross-cell rules such as a single start cell are the caller's job.
    pub fn set_role(&mut self, p: Pos, role: Role) -> Result<(), GridError> {
        let i = self.checked_index(p)?;
        self.cells[i].set_role(role);
        Ok(())
    }

    /// Overwrite the role at flat index `idx`.
    ///
    /// # Panics
    ///
    /// If `idx >= self.len()`.
    #[inline]
    pub fn set_role_at(&mut self, idx: usize, role: Role) {
        self.cells[idx].set_role(role);
    }

    /// Number of cells with the given role.
    pub fn count(&self, role: Role) -> usize {
        self.cells.iter().filter(|c| c.role == role).count()
    }

    /// Positions of every cell with the given role, row-major.
    pub fn positions(&self, role: Role) -> Vec<Pos> {
        self.cells
            .iter()
            .filter(|c| c.role == role)
            .map(Cell::pos)
            .collect()
    }

    /// Row-major iterator over `(Pos, Role)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Role)> + '_ {
        self.cells.iter().map(|c| (c.pos(), c.role))
    }

    // -----------------------------------------------------------------------
    // Adjacency
    // -----------------------------------------------------------------------

    /// Rebuild every cell's neighbor set from the current roles.
    ///
    /// A neighbor is a cardinal, in-bounds, non-barrier cell. Barrier cells
    /// get an empty set. Must be called after barrier edits and before a
    /// search; nothing calls it implicitly.
    pub fn recompute_neighbors(&mut self) {
        for idx in 0..self.cells.len() {
            let mut set = std::mem::take(&mut self.neighbors[idx]);
            set.clear();
            if !self.cells[idx].is_barrier() {
                let p = self.cells[idx].pos();
                for n in p.neighbors_4() {
                    if let Some(ni) = self.index(n) {
                        if !self.cells[ni].is_barrier() {
                            set.push(ni);
                        }
                    }
                }
            }
            self.neighbors[idx] = set;
        }
    }

    /// Neighbor set of the cell at flat index `idx`, as of the last
    /// [`recompute_neighbors`](Self::recompute_neighbors).
    #[inline]
    pub fn neighbors(&self, idx: usize) -> &[usize] {
        &self.neighbors[idx]
    }

    // -----------------------------------------------------------------------
    // Bulk resets
    // -----------------------------------------------------------------------

    /// Reset every Open, Closed and Path cell to Empty. Start, End and
    /// Barrier are kept.
    pub fn clear_non_terminal(&mut self) {
        for c in self.cells.iter_mut() {
            if !c.role.is_user_placed() {
                c.reset();
            }
        }
    }

    /// Reset every cell to Empty and drop all neighbor sets.
    pub fn reset_all(&mut self) {
        for c in self.cells.iter_mut() {
            c.reset();
        }
        for set in self.neighbors.iter_mut() {
            set.clear();
        }
    }

    // -----------------------------------------------------------------------
    // Text form
    // -----------------------------------------------------------------------

    /// Parse the text form produced by `Display`.
    ///
    /// One line per row, one character per cell (see [`Role::to_char`]).
    /// Leading and trailing whitespace on each line is ignored, as are blank
    /// lines, so indented string literals work.
    pub fn parse(s: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let size = lines.len();
        let mut grid = Grid::new(size).map_err(|_| GridError::Parse {
            line: 0,
            reason: "no rows".into(),
        })?;
        for (row, line) in lines.iter().enumerate() {
            let width = line.chars().count();
            if width != size {
                return Err(GridError::Parse {
                    line: row + 1,
                    reason: format!("expected {size} cells, found {width}"),
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let role = Role::from_char(ch).ok_or_else(|| GridError::Parse {
                    line: row + 1,
                    reason: format!("unknown cell character {ch:?}"),
                })?;
                grid.cells[row * size + col].set_role(role);
            }
        }
        Ok(grid)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.size) {
            for c in row {
                write!(f, "{}", c.role.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Serde representation
// ---------------------------------------------------------------------------

/// Roles only; neighbor sets are derived and rebuilt after loading.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct GridRepr {
    size: usize,
    roles: Vec<Role>,
}

#[cfg(feature = "serde")]
impl serde::Serialize for Grid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        GridRepr {
            size: self.size,
            roles: self.cells.iter().map(Cell::role).collect(),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Grid {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let repr = GridRepr::deserialize(deserializer)?;
        let mut g = Grid::new(repr.size).map_err(D::Error::custom)?;
        if repr.roles.len() != g.len() {
            return Err(D::Error::custom(format!(
                "expected {} roles, found {}",
                g.len(),
                repr.roles.len()
            )));
        }
        for (c, role) in g.cells.iter_mut().zip(repr.roles) {
            c.set_role(role);
        }
        Ok(g)
    }
}

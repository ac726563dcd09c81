//! [`Editor`]: the command surface a front end drives.
//!
//! The editor owns a [`Grid`] and remembers which cells are the designated
//! start and end. Those are plain positions, cleared whenever the cell
//! stops being Start/End or the grid is rebuilt.

use pathviz_core::{Grid, GridError, Pos, Role};

use crate::astar::{Outcome, Search};
use crate::distance::Heuristic;

/// What a [`place`](Editor::place) command did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Placed {
    Start,
    End,
    Barrier,
    /// The cell is already the start or end.
    Ignored,
}

/// A grid plus its designated start and end cells.
#[derive(Debug, Clone)]
pub struct Editor {
    grid: Grid,
    start: Option<Pos>,
    end: Option<Pos>,
}

impl Editor {
    /// A fresh `size`×`size` grid with nothing placed.
    pub fn new(size: usize) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::new(size)?,
            start: None,
            end: None,
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn start(&self) -> Option<Pos> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Pos> {
        self.end
    }

    /// Whether both terminals are placed.
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Primary action on a cell.
    ///
    /// The first placement becomes the start, the next the end, and every
    /// later one a barrier. The start and end cells themselves are never
    /// overwritten.
    pub fn place(&mut self, p: Pos) -> Result<Placed, GridError> {
        let role = self.grid.role(p).ok_or(GridError::OutOfBounds {
            pos: p,
            size: self.grid.size(),
        })?;

        let placed = if self.start.is_none() && role != Role::End {
            self.start = Some(p);
            Placed::Start
        } else if self.end.is_none() && role != Role::Start {
            self.end = Some(p);
            Placed::End
        } else if !role.is_terminal() {
            Placed::Barrier
        } else {
            return Ok(Placed::Ignored);
        };

        let new_role = match placed {
            Placed::Start => Role::Start,
            Placed::End => Role::End,
            _ => Role::Barrier,
        };
        self.grid.set_role(p, new_role)?;
        Ok(placed)
    }

    /// Secondary action on a cell: reset it to Empty, dropping the start or
    /// end designation if it had one.
    pub fn erase(&mut self, p: Pos) -> Result<(), GridError> {
        self.grid.set_role(p, Role::Empty)?;
        if self.start == Some(p) {
            self.start = None;
        } else if self.end == Some(p) {
            self.end = None;
        }
        Ok(())
    }

    /// Reset the whole grid and forget start and end.
    pub fn rebuild(&mut self) {
        self.grid.reset_all();
        self.start = None;
        self.end = None;
    }

    /// Recompute adjacency, wipe the previous run's markings and search.
    ///
    /// Returns `None` without touching the grid when start or end is
    /// missing. `on_progress` is called once after the wipe and then by the
    /// search itself.
    pub fn run<H, F>(&mut self, search: &mut Search<H>, mut on_progress: F) -> Option<Outcome>
    where
        H: Heuristic,
        F: FnMut(&Grid),
    {
        let (Some(start), Some(end)) = (self.start, self.end) else {
            log::warn!("run requested without start and end placed");
            return None;
        };

        self.grid.recompute_neighbors();
        self.grid.clear_non_terminal();
        on_progress(&self.grid);

        match search.run(&mut self.grid, start, end, on_progress) {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                log::warn!("search rejected: {e}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_order() {
        let mut ed = Editor::new(4).unwrap();
        assert_eq!(ed.place(Pos::new(0, 0)).unwrap(), Placed::Start);
        assert_eq!(ed.place(Pos::new(3, 3)).unwrap(), Placed::End);
        assert_eq!(ed.place(Pos::new(1, 1)).unwrap(), Placed::Barrier);
        assert_eq!(ed.place(Pos::new(0, 0)).unwrap(), Placed::Ignored);
        assert_eq!(ed.place(Pos::new(3, 3)).unwrap(), Placed::Ignored);
        assert_eq!(ed.grid().to_string(), "S...\n.#..\n....\n...E\n");
    }

    #[test]
    fn start_click_does_not_become_end() {
        let mut ed = Editor::new(3).unwrap();
        ed.place(Pos::new(1, 1)).unwrap();
        assert_eq!(ed.place(Pos::new(1, 1)).unwrap(), Placed::Ignored);
        assert_eq!(ed.end(), None);
    }

    #[test]
    fn erased_start_is_replaced_but_end_kept() {
        let mut ed = Editor::new(3).unwrap();
        ed.place(Pos::new(0, 0)).unwrap();
        ed.place(Pos::new(2, 2)).unwrap();
        ed.erase(Pos::new(0, 0)).unwrap();
        assert_eq!(ed.start(), None);
        assert_eq!(ed.end(), Some(Pos::new(2, 2)));
        // Clicking the end does not steal it as the new start.
        assert_eq!(ed.place(Pos::new(2, 2)).unwrap(), Placed::Ignored);
        assert_eq!(ed.place(Pos::new(1, 0)).unwrap(), Placed::Start);
        assert_eq!(ed.grid().count(Role::Start), 1);
        assert_eq!(ed.grid().count(Role::End), 1);
    }

    #[test]
    fn erasing_a_barrier_leaves_terminals() {
        let mut ed = Editor::new(3).unwrap();
        ed.place(Pos::new(0, 0)).unwrap();
        ed.place(Pos::new(2, 2)).unwrap();
        ed.place(Pos::new(1, 1)).unwrap();
        ed.erase(Pos::new(1, 1)).unwrap();
        assert!(ed.is_ready());
        assert_eq!(ed.grid().count(Role::Barrier), 0);
    }

    #[test]
    fn out_of_bounds_commands_fail() {
        let mut ed = Editor::new(3).unwrap();
        assert!(ed.place(Pos::new(3, 0)).is_err());
        assert!(ed.erase(Pos::new(-1, 0)).is_err());
        assert_eq!(ed.start(), None);
    }

    #[test]
    fn run_without_terminals_is_a_no_op() {
        let mut ed = Editor::new(3).unwrap();
        ed.place(Pos::new(0, 0)).unwrap();
        let mut calls = 0;
        assert_eq!(ed.run(&mut Search::new(), |_| calls += 1), None);
        assert_eq!(calls, 0);
    }

    #[test]
    fn rebuild_forgets_everything() {
        let mut ed = Editor::new(3).unwrap();
        ed.place(Pos::new(0, 0)).unwrap();
        ed.place(Pos::new(2, 2)).unwrap();
        ed.place(Pos::new(1, 1)).unwrap();
        ed.rebuild();
        assert!(!ed.is_ready());
        assert_eq!(ed.grid().count(Role::Empty), 9);
        assert_eq!(ed.place(Pos::new(1, 1)).unwrap(), Placed::Start);
    }

    #[test]
    fn rerun_is_idempotent() {
        let mut ed = Editor::new(6).unwrap();
        ed.place(Pos::new(0, 0)).unwrap();
        ed.place(Pos::new(5, 5)).unwrap();
        for p in [Pos::new(1, 1), Pos::new(2, 2), Pos::new(3, 3), Pos::new(0, 4)] {
            ed.place(p).unwrap();
        }
        let mut search = Search::new();
        let first = ed.run(&mut search, |_| {}).unwrap();
        let snapshot = ed.grid().to_string();
        let second = ed.run(&mut search, |_| {}).unwrap();
        assert_eq!(first, second);
        assert_eq!(ed.grid().to_string(), snapshot);
    }

    #[test]
    fn new_barrier_changes_the_result() {
        let mut ed = Editor::new(3).unwrap();
        ed.place(Pos::new(0, 0)).unwrap();
        ed.place(Pos::new(0, 2)).unwrap();
        let mut search = Search::new();
        let before = ed.run(&mut search, |_| {}).unwrap();
        assert_eq!(before.steps(), Some(2));

        ed.place(Pos::new(0, 1)).unwrap();
        let after = ed.run(&mut search, |_| {}).unwrap();
        assert_eq!(after.steps(), Some(4));

        ed.place(Pos::new(1, 1)).unwrap();
        ed.place(Pos::new(2, 1)).unwrap();
        let blocked = ed.run(&mut search, |_| {}).unwrap();
        assert_eq!(blocked, Outcome::Exhausted);
        assert_eq!(ed.grid().count(Role::Path), 0);
    }
}

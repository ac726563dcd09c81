use pathviz_core::{Grid, GridError, Pos, Role};

use crate::cancel::Cancel;
use crate::distance::{Heuristic, Manhattan};
use crate::frontier::Frontier;
use crate::reconstruct::{NO_PARENT, reconstruct};

/// Sentinel for "no known cost yet".
const UNBOUNDED: i32 = i32::MAX;

/// How a search run ended.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// End was reached. `path` runs from start to end, both included.
    Success { path: Vec<Pos> },
    /// The frontier emptied without reaching end. Not an error.
    Exhausted,
    /// The run's [`Cancel`] token was set before it finished.
    Cancelled,
}

impl Outcome {
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    /// Number of unit steps on the found path.
    pub fn steps(&self) -> Option<usize> {
        match self {
            Outcome::Success { path } => Some(path.len().saturating_sub(1)),
            _ => None,
        }
    }
}

/// Counters for the most recent run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Cells popped and closed.
    pub expanded: usize,
    /// Frontier pushes, the start included.
    pub pushed: usize,
    /// Outdated frontier entries skipped on pop.
    pub stale: usize,
}

/// One closed cell, in expansion order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Expansion {
    pub pos: Pos,
    /// Cost from start when the cell was closed.
    pub g: i32,
}

/// A* search engine over a [`Grid`].
///
/// The engine keeps no state between runs beyond the last [`SearchStats`]
/// (and the expansion log, if enabled): costs, predecessors, the frontier
/// and the closed set are allocated per run and dropped when it ends.
#[derive(Debug, Default)]
pub struct Search<H = Manhattan> {
    heuristic: H,
    cancel: Option<Cancel>,
    stats: SearchStats,
    log_expansions: bool,
    expansions: Vec<Expansion>,
}

impl Search<Manhattan> {
    /// Engine using the Manhattan heuristic.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H: Heuristic> Search<H> {
    /// Engine using a custom heuristic.
    pub fn with_heuristic(heuristic: H) -> Self {
        Self {
            heuristic,
            cancel: None,
            stats: SearchStats::default(),
            log_expansions: false,
            expansions: Vec::new(),
        }
    }

    /// Poll `cancel` between expansions.
    pub fn with_cancel(mut self, cancel: Cancel) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Record every closed cell and its cost; see
    /// [`expansions`](Self::expansions).
    pub fn with_expansion_log(mut self) -> Self {
        self.log_expansions = true;
        self
    }

    /// Counters for the most recent run.
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Cells closed by the most recent run, in order. Empty unless
    /// [`with_expansion_log`](Self::with_expansion_log) was used.
    #[inline]
    pub fn expansions(&self) -> &[Expansion] {
        &self.expansions
    }

    /// Find a shortest path from `start` to `end`, animating it on `grid`.
    ///
    /// Uses the neighbor sets from the last
    /// [`Grid::recompute_neighbors`]; this method never recomputes them.
    /// Newly discovered cells are marked [`Role::Open`], expanded cells
    /// [`Role::Closed`], and on success the interior of the route
    /// [`Role::Path`]. Start and End keep their roles throughout.
    ///
    /// `on_progress` runs after each expansion and after each
    /// reconstruction step, with the grid in its current state.
    ///
    /// Fails only if `start` or `end` is out of bounds, in which case the
    /// grid is untouched.
    pub fn run<F>(
        &mut self,
        grid: &mut Grid,
        start: Pos,
        end: Pos,
        mut on_progress: F,
    ) -> Result<Outcome, GridError>
    where
        F: FnMut(&Grid),
    {
        let start_idx = grid.checked_index(start)?;
        let end_idx = grid.checked_index(end)?;
        let len = grid.len();

        log::debug!("search {start} -> {end} on {0}x{0} grid", grid.size());

        let mut g_score = vec![UNBOUNDED; len];
        let mut f_score = vec![UNBOUNDED; len];
        let mut came_from = vec![NO_PARENT; len];
        let mut closed = vec![false; len];
        let mut frontier = Frontier::new();
        let mut stats = SearchStats::default();
        self.expansions.clear();

        g_score[start_idx] = 0;
        f_score[start_idx] = self.heuristic.estimate(start, end);
        frontier.push(f_score[start_idx], 0, start_idx);
        stats.pushed += 1;

        let mut nbuf: Vec<usize> = Vec::with_capacity(4);

        let outcome = loop {
            if self.cancel.as_ref().is_some_and(Cancel::is_cancelled) {
                break Outcome::Cancelled;
            }

            let Some(current) = frontier.pop() else {
                break Outcome::Exhausted;
            };
            let ci = current.idx;

            // Lazy deletion: skip entries superseded by a cheaper push.
            if closed[ci] || current.f != f_score[ci] {
                stats.stale += 1;
                continue;
            }

            closed[ci] = true;
            stats.expanded += 1;
            if self.log_expansions {
                self.expansions.push(Expansion {
                    pos: grid.pos(ci),
                    g: g_score[ci],
                });
            }
            mark(grid, ci, Role::Closed);
            log::trace!("expand {} g={} f={}", grid.pos(ci), current.g, current.f);

            if ci == end_idx {
                let path = reconstruct(grid, &came_from, end_idx, start_idx, &mut on_progress);
                if end_idx != start_idx {
                    grid.set_role_at(end_idx, Role::End);
                }
                break Outcome::Success { path };
            }

            let current_g = g_score[ci];
            nbuf.clear();
            nbuf.extend_from_slice(grid.neighbors(ci));

            for &ni in nbuf.iter() {
                if closed[ni] {
                    continue;
                }
                let tentative_g = current_g + 1;
                if tentative_g >= g_score[ni] {
                    continue;
                }
                came_from[ni] = ci;
                g_score[ni] = tentative_g;
                f_score[ni] = tentative_g + self.heuristic.estimate(grid.pos(ni), end);
                frontier.push(f_score[ni], tentative_g, ni);
                stats.pushed += 1;
                mark(grid, ni, Role::Open);
            }

            on_progress(&*grid);
        };

        self.stats = stats;
        log::debug!(
            "search finished: {} (expanded {}, pushed {}, stale {})",
            outcome_kind(&outcome),
            stats.expanded,
            stats.pushed,
            stats.stale
        );
        Ok(outcome)
    }
}

/// Set `role` unless the cell is Start or End.
#[inline]
fn mark(grid: &mut Grid, idx: usize, role: Role) {
    if !grid.role_at(idx).is_terminal() {
        grid.set_role_at(idx, role);
    }
}

fn outcome_kind(o: &Outcome) -> &'static str {
    match o {
        Outcome::Success { .. } => "success",
        Outcome::Exhausted => "exhausted",
        Outcome::Cancelled => "cancelled",
    }
}

//! Property-based checks of the search against breadth-first distances.
//!
//! Random square grids with random barriers and terminals:
//!
//! 1. Found paths are shortest, and unreachable ends are reported as such.
//! 2. Every cell is closed with its true distance from start.
//! 3. Re-running after clearing reproduces the same path and markings.
//! 4. Blocking a path cell forces a route that avoids it.

use pathviz_core::{Grid, Pos, Role};
use pathviz_search::{Outcome, Search, UNREACHABLE, bfs_distances};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
struct Scenario {
    size: usize,
    barriers: Vec<bool>,
    start: Pos,
    end: Pos,
}

impl Scenario {
    fn build(&self) -> Grid {
        let mut g = Grid::new(self.size).unwrap();
        for (i, &b) in self.barriers.iter().enumerate() {
            if b {
                let p = g.pos(i);
                g.set_role(p, Role::Barrier).unwrap();
            }
        }
        g.set_role(self.start, Role::Start).unwrap();
        if self.end != self.start {
            g.set_role(self.end, Role::End).unwrap();
        }
        g.recompute_neighbors();
        g
    }
}

fn scenario_strategy() -> impl Strategy<Value = Scenario> {
    (2usize..=9).prop_flat_map(|size| {
        let n = size as i32;
        (
            Just(size),
            prop::collection::vec(prop::bool::weighted(0.3), size * size),
            (0..n, 0..n),
            (0..n, 0..n),
        )
            .prop_map(|(size, barriers, (sr, sc), (er, ec))| Scenario {
                size,
                barriers,
                start: Pos::new(sr, sc),
                end: Pos::new(er, ec),
            })
    })
}

fn distance_to(g: &Grid, from: Pos, to: Pos) -> i32 {
    bfs_distances(g, from).unwrap()[g.index(to).unwrap()]
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Optimality
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn path_length_matches_bfs(sc in scenario_strategy()) {
        prop_assume!(sc.start != sc.end);
        let mut g = sc.build();
        let expected = distance_to(&g, sc.start, sc.end);
        let out = Search::new().run(&mut g, sc.start, sc.end, |_| {}).unwrap();

        if expected == UNREACHABLE {
            prop_assert_eq!(out, Outcome::Exhausted);
            prop_assert_eq!(g.count(Role::Path), 0);
        } else {
            prop_assert_eq!(out.steps(), Some(expected as usize));
            prop_assert_eq!(g.count(Role::Path) as i32 + 1, expected);
            prop_assert_eq!(g.role(sc.start), Some(Role::Start));
            prop_assert_eq!(g.role(sc.end), Some(Role::End));
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Closed cells carry their true distance
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn closed_costs_are_optimal(sc in scenario_strategy()) {
        let mut g = sc.build();
        let dist = bfs_distances(&g, sc.start).unwrap();
        let mut search = Search::new().with_expansion_log();
        search.run(&mut g, sc.start, sc.end, |_| {}).unwrap();

        let mut seen = std::collections::HashSet::new();
        for x in search.expansions() {
            prop_assert!(seen.insert(x.pos), "{} closed twice", x.pos);
            prop_assert_eq!(x.g, dist[g.index(x.pos).unwrap()], "at {}", x.pos);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Clear and re-run is idempotent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn rerun_reproduces_result(sc in scenario_strategy()) {
        let mut g = sc.build();
        let mut search = Search::new();
        let first = search.run(&mut g, sc.start, sc.end, |_| {}).unwrap();
        let first_grid = g.to_string();

        g.clear_non_terminal();
        g.recompute_neighbors();
        let second = search.run(&mut g, sc.start, sc.end, |_| {}).unwrap();

        prop_assert_eq!(first, second);
        prop_assert_eq!(first_grid, g.to_string());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Barrier edits are seen after recomputing neighbors
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn blocking_the_route_reroutes(sc in scenario_strategy(), pick in any::<prop::sample::Index>()) {
        let mut g = sc.build();
        let mut search = Search::new();
        let Outcome::Success { path } = search.run(&mut g, sc.start, sc.end, |_| {}).unwrap() else {
            return Ok(());
        };
        prop_assume!(path.len() > 2);
        let blocked = path[1 + pick.index(path.len() - 2)];

        g.clear_non_terminal();
        g.set_role(blocked, Role::Barrier).unwrap();
        g.recompute_neighbors();
        let expected = distance_to(&g, sc.start, sc.end);
        let out = search.run(&mut g, sc.start, sc.end, |_| {}).unwrap();

        match out {
            Outcome::Success { path: rerouted } => {
                prop_assert!(!rerouted.contains(&blocked));
                prop_assert!(rerouted.len() >= path.len());
                prop_assert_eq!(rerouted.len() as i32 - 1, expected);
            }
            Outcome::Exhausted => prop_assert_eq!(expected, UNREACHABLE),
            Outcome::Cancelled => prop_assert!(false, "no cancel token was set"),
        }
    }
}

use std::collections::VecDeque;

use pathviz_core::{Grid, GridError, Pos};

/// Sentinel distance for cells the breadth-first search never reached.
pub const UNREACHABLE: i32 = i32::MAX;

/// Unit-cost breadth-first distances from `source` to every cell.
///
/// Follows the grid's current neighbor sets, so call
/// [`Grid::recompute_neighbors`] first. The result is indexed by flat cell
/// index; unreached cells hold [`UNREACHABLE`]. Roles are not touched.
pub fn bfs_distances(grid: &Grid, source: Pos) -> Result<Vec<i32>, GridError> {
    let si = grid.checked_index(source)?;
    let mut dist = vec![UNREACHABLE; grid.len()];
    let mut queue: VecDeque<usize> = VecDeque::new();

    dist[si] = 0;
    queue.push_back(si);

    while let Some(ci) = queue.pop_front() {
        let nd = dist[ci] + 1;
        for &ni in grid.neighbors(ci) {
            if dist[ni] != UNREACHABLE {
                continue;
            }
            dist[ni] = nd;
            queue.push_back(ni);
        }
    }

    Ok(dist)
}

/// Number of cells reachable from `source`, itself included.
pub fn reachable_count(grid: &Grid, source: Pos) -> Result<usize, GridError> {
    Ok(bfs_distances(grid, source)?
        .iter()
        .filter(|&&d| d != UNREACHABLE)
        .count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_grid_distances_are_manhattan() {
        let mut g = Grid::new(4).unwrap();
        g.recompute_neighbors();
        let d = bfs_distances(&g, Pos::new(0, 0)).unwrap();
        for i in 0..g.len() {
            let p = g.pos(i);
            assert_eq!(d[i], p.row + p.col);
        }
    }

    #[test]
    fn walls_force_detours_and_cut_regions() {
        let mut g = Grid::parse(
            "
            ..#.
            .##.
            ...#
            ##..
            ",
        )
        .unwrap();
        g.recompute_neighbors();
        let d = bfs_distances(&g, Pos::new(0, 0)).unwrap();
        let at = |r, c| d[g.index(Pos::new(r, c)).unwrap()];
        assert_eq!(at(3, 3), 6);
        assert_eq!(at(0, 3), UNREACHABLE);
        assert_eq!(at(1, 3), UNREACHABLE);
        assert_eq!(reachable_count(&g, Pos::new(0, 0)).unwrap(), 8);
    }

    #[test]
    fn out_of_bounds_source_is_rejected() {
        let g = Grid::new(2).unwrap();
        assert!(bfs_distances(&g, Pos::new(2, 2)).is_err());
    }
}

use pathviz_core::{Grid, Pos, Role};

/// Parent sentinel for cells with no predecessor.
pub const NO_PARENT: usize = usize::MAX;

/// Walk the predecessor chain from `end` back to `start`, marking every
/// interior cell [`Role::Path`].
///
/// Start and End keep their roles. `on_progress` is called once per step.
/// Returns the route from `start` to `end`, both included.
///
/// `came_from` must hold an unbroken chain from `end` to `start`, which is
/// the case after a successful search.
pub fn reconstruct<F>(
    grid: &mut Grid,
    came_from: &[usize],
    end: usize,
    start: usize,
    on_progress: &mut F,
) -> Vec<Pos>
where
    F: FnMut(&Grid),
{
    let mut route = vec![grid.pos(end)];
    let mut current = end;
    while current != start {
        if !grid.role_at(current).is_terminal() {
            grid.set_role_at(current, Role::Path);
        }
        let prev = came_from[current];
        if prev == NO_PARENT {
            log::warn!("broken predecessor chain at {}", grid.pos(current));
            break;
        }
        current = prev;
        route.push(grid.pos(current));
        on_progress(&*grid);
    }
    route.reverse();
    route
}

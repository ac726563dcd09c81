//! Translating crossterm events into editor commands.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind};

use pathviz_core::Pos;

use crate::render::cell_at;

/// A user intent.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Left click on a cell.
    Place(Pos),
    /// Right click on a cell.
    Erase(Pos),
    /// Space.
    Run,
    /// `c`: clear the whole grid.
    Rebuild,
    /// `q` or Esc.
    Quit,
    /// The terminal was resized; redraw everything.
    Redraw,
}

/// Map an event to a command. Clicks outside the grid and unbound keys map
/// to `None`.
pub fn to_command(ev: &Event, grid_size: usize) -> Option<Command> {
    match ev {
        Event::Key(KeyEvent { code, kind, .. }) => {
            if *kind == KeyEventKind::Release {
                return None;
            }
            match code {
                KeyCode::Char(' ') => Some(Command::Run),
                KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::Rebuild),
                KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
                _ => None,
            }
        }
        Event::Mouse(me) => {
            let pos = cell_at(grid_size, me.column, me.row)?;
            match me.kind {
                MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
                    Some(Command::Place(pos))
                }
                MouseEventKind::Down(MouseButton::Right)
                | MouseEventKind::Drag(MouseButton::Right) => Some(Command::Erase(pos)),
                _ => None,
            }
        }
        Event::Resize(..) => Some(Command::Redraw),
        _ => None,
    }
}

/// Whether `ev` asks to abort a running search.
pub fn is_abort(ev: &Event) -> bool {
    matches!(
        ev,
        Event::Key(KeyEvent {
            code: KeyCode::Esc | KeyCode::Char('q'),
            kind: KeyEventKind::Press,
            ..
        })
    )
}

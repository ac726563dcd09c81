//! The [`Cell`] type: one grid unit with a position and a [`Role`].

use crate::geom::Pos;

/// Semantic state of a cell.
///
/// Roles carry no rendering information; a front end maps them to whatever
/// visual style it likes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    #[default]
    Empty,
    Start,
    End,
    Barrier,
    Open,
    Closed,
    Path,
}

impl Role {
    /// All roles, in declaration order.
    pub const ALL: [Role; 7] = [
        Role::Empty,
        Role::Start,
        Role::End,
        Role::Barrier,
        Role::Open,
        Role::Closed,
        Role::Path,
    ];

    /// Start or End.
    #[inline]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Role::Start | Role::End)
    }

    /// Roles that survive [`Grid::clear_non_terminal`](crate::Grid::clear_non_terminal).
    #[inline]
    pub const fn is_user_placed(self) -> bool {
        matches!(self, Role::Start | Role::End | Role::Barrier)
    }

    /// Single-character form used by the grid text format.
    pub const fn to_char(self) -> char {
        match self {
            Role::Empty => '.',
            Role::Start => 'S',
            Role::End => 'E',
            Role::Barrier => '#',
            Role::Open => 'o',
            Role::Closed => 'x',
            Role::Path => '*',
        }
    }

    /// Inverse of [`to_char`](Self::to_char).
    pub const fn from_char(ch: char) -> Option<Role> {
        match ch {
            '.' => Some(Role::Empty),
            'S' => Some(Role::Start),
            'E' => Some(Role::End),
            '#' => Some(Role::Barrier),
            'o' => Some(Role::Open),
            'x' => Some(Role::Closed),
            '*' => Some(Role::Path),
            _ => None,
        }
    }
}

/// A grid cell. The position is fixed at construction; the role is freely
/// overwritten.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pos: Pos,
    pub role: Role,
}

impl Cell {
    /// An empty cell at `pos`.
    #[inline]
    pub const fn new(pos: Pos) -> Self {
        Self {
            pos,
            role: Role::Empty,
        }
    }

    #[inline]
    pub const fn pos(&self) -> Pos {
        self.pos
    }

    #[inline]
    pub const fn row(&self) -> i32 {
        self.pos.row
    }

    #[inline]
    pub const fn col(&self) -> i32 {
        self.pos.col
    }

    #[inline]
    pub const fn role(&self) -> Role {
        self.role
    }

    // --- queries ---

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.role == Role::Empty
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.role == Role::Start
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.role == Role::End
    }

    #[inline]
    pub fn is_barrier(&self) -> bool {
        self.role == Role::Barrier
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.role == Role::Open
    }

    #[inline]
    pub fn is_closed(&self) -> bool {
        self.role == Role::Closed
    }

    #[inline]
    pub fn is_path(&self) -> bool {
        self.role == Role::Path
    }

    // --- commands (unconditional overwrite) ---

    /// Overwrite the role.
    #[inline]
    pub fn set_role(&mut self, role: Role) {
        self.role = role;
    }

    #[inline]
    pub fn reset(&mut self) {
        self.role = Role::Empty;
    }

    #[inline]
    pub fn make_start(&mut self) {
        self.role = Role::Start;
    }

    #[inline]
    pub fn make_end(&mut self) {
        self.role = Role::End;
    }

    #[inline]
    pub fn make_barrier(&mut self) {
        self.role = Role::Barrier;
    }

    #[inline]
    pub fn make_open(&mut self) {
        self.role = Role::Open;
    }

    #[inline]
    pub fn make_closed(&mut self) {
        self.role = Role::Closed;
    }

    #[inline]
    pub fn make_path(&mut self) {
        self.role = Role::Path;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_empty() {
        let c = Cell::new(Pos::new(2, 5));
        assert!(c.is_empty());
        assert_eq!(c.row(), 2);
        assert_eq!(c.col(), 5);
    }

    #[test]
    fn commands_overwrite_unconditionally() {
        let mut c = Cell::new(Pos::ZERO);
        c.make_start();
        assert!(c.is_start());
        c.make_barrier();
        assert!(c.is_barrier() && !c.is_start());
        c.make_path();
        assert!(c.is_path());
        c.reset();
        assert!(c.is_empty());
    }

    #[test]
    fn role_chars_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::from_char(role.to_char()), Some(role));
        }
        assert_eq!(Role::from_char('?'), None);
    }

    #[test]
    fn terminal_and_user_placed() {
        assert!(Role::Start.is_terminal());
        assert!(!Role::Barrier.is_terminal());
        assert!(Role::Barrier.is_user_placed());
        assert!(!Role::Open.is_user_placed());
    }
}

use std::str::FromStr;

use crate::error::DirectionError;

/// Discrete movement intent on a 4-connected grid, plus the no-op wait.
///
/// Discriminants are stable codes; external callers may rely on them for
/// ordering and compact storage.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[strum(serialize_all = "UPPERCASE")]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Left = 1,
    Right = 2,
    Down = 3,
    #[default]
    Wait = 4,
}

impl Direction {
    /// All directions in code order.
    pub const ALL: [Direction; 5] = [
        Direction::Up,
        Direction::Left,
        Direction::Right,
        Direction::Down,
        Direction::Wait,
    ];

    /// The four moves that change position.
    pub const MOVES: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Right,
        Direction::Down,
    ];

    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Upper-case name used in describe lines (`"UP"`, `"WAIT"`, ...).
    pub fn label(self) -> &'static str {
        self.into()
    }

    #[inline]
    pub const fn is_wait(self) -> bool {
        matches!(self, Direction::Wait)
    }

    /// Returns the offset (dx, dy) for this direction.
    ///
    /// Coordinate system: rows grow downward, so `Up` decreases `y`.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Wait => (0, 0),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Wait => Direction::Wait,
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = DirectionError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Direction::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(DirectionError::InvalidCode(code))
    }
}

impl From<Direction> for u8 {
    fn from(direction: Direction) -> Self {
        direction.code()
    }
}

impl FromStr for Direction {
    type Err = DirectionError;

    /// Parses a label, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Direction::ALL
            .into_iter()
            .find(|direction| direction.label().eq_ignore_ascii_case(label))
            .ok_or_else(|| DirectionError::UnknownLabel(label.to_owned()))
    }
}

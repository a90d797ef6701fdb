use glam::Vec2;
use strum_macros::{AsRefStr, EnumString};

use crate::constants::host::SWIPE_DEAD_ZONE;

/// The four cardinal directions. World `y` grows downward, so `Up` is `-Y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumString)]
#[repr(usize)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The four cardinal directions.
    /// This is just a convenience constant for iterating over the directions.
    pub const DIRECTIONS: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Returns the opposite direction. Constant time.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns the direction as a unit vector.
    pub fn as_vec2(self) -> Vec2 {
        self.into()
    }

    /// Whether this direction moves along the X axis.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Derives the direction of an axis-aligned, nonzero velocity.
    pub fn from_velocity(velocity: Vec2) -> Option<Direction> {
        if velocity.x > 0.0 {
            Some(Direction::Right)
        } else if velocity.x < 0.0 {
            Some(Direction::Left)
        } else if velocity.y > 0.0 {
            Some(Direction::Down)
        } else if velocity.y < 0.0 {
            Some(Direction::Up)
        } else {
            None
        }
    }

    /// Translates a swipe displacement into a direction.
    ///
    /// The dominant axis decides; the swipe must exceed [`SWIPE_DEAD_ZONE`] along it.
    /// Ties go to the vertical axis.
    pub fn from_swipe(delta: Vec2) -> Option<Direction> {
        if delta.x.abs() > delta.y.abs() {
            if delta.x.abs() <= SWIPE_DEAD_ZONE {
                return None;
            }
            Some(if delta.x > 0.0 { Direction::Right } else { Direction::Left })
        } else {
            if delta.y.abs() <= SWIPE_DEAD_ZONE {
                return None;
            }
            Some(if delta.y > 0.0 { Direction::Down } else { Direction::Up })
        }
    }

    /// Parses a keyboard key name such as `ArrowUp`.
    pub fn from_key(key: &str) -> Option<Direction> {
        key.strip_prefix("Arrow")?.to_lowercase().parse().ok()
    }
}

impl From<Direction> for Vec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::Up => -Vec2::Y,
            Direction::Down => Vec2::Y,
            Direction::Left => -Vec2::X,
            Direction::Right => Vec2::X,
        }
    }
}

use serde::{Deserialize, Serialize};
use strum::Display;

/// Direction of a carousel step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Direction {
    Previous,
    Next,
}

/// Compute the index reached from `index` by one step in `direction`.
///
/// Wraps around both ends. Returns `None` for an empty sequence, which is the
/// carousel's inert state.
pub fn step(index: usize, len: usize, direction: Direction) -> Option<usize> {
    if len == 0 {
        return None;
    }

    let index = index % len;
    let next = match direction {
        Direction::Next => (index + 1) % len,
        Direction::Previous => (index + len - 1) % len,
    };
    Some(next)
}

//! Swipe gesture interpretation
//!
//! Pointer coordinates are expressed in pointer units (pixel-like); the
//! translator scales terminal cells into these units before they get here.

use serde::{Deserialize, Serialize};

use super::carousel::Direction;

/// Minimum horizontal travel for a swipe to commit
pub const SWIPE_THRESHOLD: f64 = 50.0;
/// Lowest card opacity while dragging or transitioning
pub const OPACITY_FLOOR: f64 = 0.7;
/// Horizontal travel over which drag opacity falls from 1.0 to the floor
const OPACITY_FALLOFF: f64 = 200.0;
/// Fraction of the drag distance the card follows
const TRANSLATE_FACTOR: f64 = 0.3;

/// A pointer position in pointer units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Cosmetic card feedback applied while dragging
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragFeedback {
    pub opacity: f64,
    pub offset_x: f64,
}

impl DragFeedback {
    pub const BASELINE: DragFeedback = DragFeedback {
        opacity: 1.0,
        offset_x: 0.0,
    };

    /// Feedback for a horizontal drag distance
    pub fn for_delta(delta_x: f64) -> Self {
        Self {
            opacity: (1.0 - delta_x.abs() / OPACITY_FALLOFF).max(OPACITY_FLOOR),
            offset_x: delta_x * TRANSLATE_FACTOR,
        }
    }
}

impl Default for DragFeedback {
    fn default() -> Self {
        Self::BASELINE
    }
}

/// An in-progress drag: where it started and where the pointer is now
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gesture {
    start: Point,
    current: Point,
}

impl Gesture {
    pub fn new(start: Point) -> Self {
        Self {
            start,
            current: start,
        }
    }

    pub fn move_to(&mut self, point: Point) {
        self.current = point;
    }

    pub fn delta(&self) -> (f64, f64) {
        (
            self.current.x - self.start.x,
            self.current.y - self.start.y,
        )
    }

    pub fn feedback(&self) -> DragFeedback {
        DragFeedback::for_delta(self.delta().0)
    }

    /// The step this gesture commits on release, if any.
    ///
    /// Only a horizontal-dominant travel beyond `threshold` counts: a
    /// rightward swipe goes to the previous item, a leftward one to the next.
    pub fn swipe(&self, threshold: f64) -> Option<Direction> {
        let (dx, dy) = self.delta();
        if dx.abs() > dy.abs() && dx.abs() > threshold {
            if dx > 0.0 {
                Some(Direction::Previous)
            } else {
                Some(Direction::Next)
            }
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn gesture(dx: f64, dy: f64) -> Gesture {
        let mut g = Gesture::new(Point::new(100.0, 100.0));
        g.move_to(Point::new(100.0 + dx, 100.0 + dy));
        g
    }

    #[rstest]
    #[case(-60.0, 5.0, Some(Direction::Next))]
    #[case(60.0, 5.0, Some(Direction::Previous))]
    #[case(-40.0, 0.0, None)]
    #[case(30.0, 40.0, None)]
    #[case(-50.0, 0.0, None)]
    #[case(-80.0, 80.0, None)]
    #[case(-81.0, 80.0, Some(Direction::Next))]
    fn test_swipe(#[case] dx: f64, #[case] dy: f64, #[case] expected: Option<Direction>) {
        assert_eq!(gesture(dx, dy).swipe(SWIPE_THRESHOLD), expected);
    }

    #[test]
    fn test_new_gesture_has_zero_delta() {
        let g = Gesture::new(Point::new(3.0, 4.0));
        assert_eq!(g.delta(), (0.0, 0.0));
        assert_eq!(g.feedback(), DragFeedback::BASELINE);
    }

    #[test]
    fn test_feedback_scales_with_distance() {
        let feedback = DragFeedback::for_delta(-20.0);
        assert!((feedback.opacity - 0.9).abs() < 1e-9);
        assert!((feedback.offset_x + 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_feedback_opacity_floor() {
        let feedback = DragFeedback::for_delta(500.0);
        assert_eq!(feedback.opacity, OPACITY_FLOOR);
        assert!((feedback.offset_x - 150.0).abs() < 1e-9);
    }
}

use serde::{Deserialize, Serialize};

use crate::domain::{carousel::Direction, gesture::Point};

/// Messages that update the testimonial carousel
///
/// Following Elm conventions, messages are named in past tense
/// to indicate "what happened" rather than "what to do"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CarouselMsg {
    /// The page finished loading
    Started,
    /// An arrow key stepped the carousel
    Stepped(Direction),
    /// An indicator was clicked
    IndicatorSelected(usize),
    /// The delayed slot swap of a render came due
    RenderElapsed,
    /// The pointer moved onto the carousel
    PointerEntered,
    /// The pointer moved off the carousel
    PointerLeft,
    GestureStarted(Point),
    GestureMoved(Point),
    GestureEnded,
    /// The grace or hover-leave delay came due
    ResumeElapsed,
    /// The repeating auto-advance timer fired
    AutoAdvanceElapsed,
}

impl CarouselMsg {
    /// Pointer motion arrives at mouse-report rate; keep it out of debug logs
    pub fn is_frequent(&self) -> bool {
        matches!(self, CarouselMsg::GestureMoved(_))
    }
}

use serde::{Deserialize, Serialize};

use crate::domain::carousel::Direction;

/// Messages that update the FAQ accordion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FaqMsg {
    /// A question was clicked or activated from the keyboard
    QuestionActivated(usize),
    CursorMoved(Direction),
}

use serde::{Deserialize, Serialize};

use crate::domain::{carousel::Direction, navigation::Section};

/// Messages that update the navigation menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuMsg {
    /// The menu toggle was pressed
    Toggled,
    /// Escape, the close button or a click outside the panel
    CloseRequested,
    /// The closing animation finished
    CloseElapsed,
    CursorMoved(Direction),
    /// A menu entry was chosen
    SectionSelected(Section),
}

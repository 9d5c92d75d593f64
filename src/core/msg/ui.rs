use serde::{Deserialize, Serialize};

use crate::core::state::ui::Focus;

/// Messages that update page-level UI state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UiMsg {
    FocusNext,
    FocusPrevious,
    Focused(Focus),
}

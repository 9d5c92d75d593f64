use crossterm::event::{KeyEvent, MouseEvent};
use serde::{Deserialize, Serialize};

use crate::core::cmd::TimerId;

/// Raw messages from external sources (input, timers, system)
/// These represent unprocessed external events that need to be translated to domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawMsg {
    // System events
    Init,
    Tick,
    Render,
    Resize(u16, u16),
    Quit,
    Suspend,
    Resume,

    // User input
    Key(KeyEvent),
    Mouse(MouseEvent),

    // A scheduled timer expired
    TimerFired(TimerId),

    // System status
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            RawMsg::Tick | RawMsg::Render => true,
            RawMsg::Mouse(mouse) => matches!(
                mouse.kind,
                crossterm::event::MouseEventKind::Moved | crossterm::event::MouseEventKind::Drag(_)
            ),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
    use pretty_assertions::assert_eq;

    use super::*;

    fn mouse(kind: MouseEventKind) -> RawMsg {
        RawMsg::Mouse(MouseEvent {
            kind,
            column: 1,
            row: 1,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_raw_msg_frequent_detection() {
        assert!(RawMsg::Tick.is_frequent());
        assert!(RawMsg::Render.is_frequent());
        assert!(mouse(MouseEventKind::Moved).is_frequent());
        assert!(mouse(MouseEventKind::Drag(MouseButton::Left)).is_frequent());
        assert!(!mouse(MouseEventKind::Down(MouseButton::Left)).is_frequent());
        assert!(!RawMsg::Quit.is_frequent());
        assert!(!RawMsg::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)).is_frequent());
        assert!(!RawMsg::TimerFired(TimerId::CarouselRender).is_frequent());
    }

    #[test]
    fn test_raw_msg_serialization() {
        let msg = RawMsg::TimerFired(TimerId::MenuClose);
        let serialized = serde_json::to_string(&msg).unwrap();
        let deserialized: RawMsg = serde_json::from_str(&serialized).unwrap();
        assert_eq!(msg, deserialized);
    }
}

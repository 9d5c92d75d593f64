//! Status bar component
//!
//! Shows the latest status message, or key hints when there is none.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

const KEY_HINTS: &str = "←/→ browse  Tab focus  m menu  q quit";

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let [left, right] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(18)]).areas(area);

        let message = self.message(state);
        frame.render_widget(
            Paragraph::new(message).style(Style::default().fg(Color::Gray)),
            left,
        );

        let auto = if state.carousel.is_auto_advancing() {
            "auto: on"
        } else {
            "auto: off"
        };
        frame.render_widget(
            Paragraph::new(auto)
                .alignment(Alignment::Right)
                .style(Style::default().fg(Color::DarkGray)),
            right,
        );
    }

    /// Pure function that picks the left-hand text
    pub fn message(&self, state: &AppState) -> String {
        state
            .system
            .status_message
            .clone()
            .unwrap_or_else(|| KEY_HINTS.to_string())
    }
}

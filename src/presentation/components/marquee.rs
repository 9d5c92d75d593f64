use ratatui::{prelude::*, widgets::*};

use crate::core::state::AppState;

/// Scrolling strip of customer logos
#[derive(Debug, Clone, Default)]
pub struct MarqueeComponent;

impl MarqueeComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .title(" Trusted by ")
            .title_style(Style::default().fg(Color::Gray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut style = Style::default();
        if state.marquee.is_paused() {
            style = style.add_modifier(Modifier::BOLD);
        }
        let visible = state.marquee.visible(inner.width as usize);
        frame.render_widget(Paragraph::new(visible).style(style), inner);
    }
}

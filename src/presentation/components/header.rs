use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::AppState,
    presentation::layout::{PageLayout, MENU_TOGGLE_LABEL},
};

const BRAND: &str = "PAM";
const TAGLINE: &str = "Voice AI for dealerships";

/// Brand line and menu toggle
#[derive(Debug, Clone, Default)]
pub struct HeaderComponent;

impl HeaderComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, layout: &PageLayout) {
        let styles = &state.config.config.styles;
        let block = Block::default().borders(Borders::BOTTOM);
        let inner = block.inner(layout.header);
        frame.render_widget(block, layout.header);

        let brand = Line::from(vec![
            Span::raw(" "),
            Span::styled(BRAND, styles.get_or_default("brand")),
            Span::raw("  "),
            Span::styled(TAGLINE, Style::default().fg(Color::Gray)),
        ]);
        frame.render_widget(Paragraph::new(brand), inner);

        if let Some(toggle) = layout.menu_toggle {
            let style = if state.menu.is_visible() {
                styles.get_or_default("menu_selected")
            } else {
                Style::default()
            };
            frame.render_widget(Paragraph::new(MENU_TOGGLE_LABEL).style(style), toggle);
        }
    }
}

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{AppState, MenuPhase},
    domain::navigation::Section,
    presentation::layout::PageLayout,
};

/// Navigation menu panel, drawn over the page while visible
#[derive(Debug, Clone, Default)]
pub struct MenuComponent;

impl MenuComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, layout: &PageLayout) {
        let Some(panel) = layout.menu_panel else {
            return;
        };
        let styles = &state.config.config.styles;
        let closing = state.menu.phase() == MenuPhase::Closing;

        let mut block = Block::default()
            .borders(Borders::ALL)
            .title(" Menu ")
            .border_style(styles.get_or_default("focused_border"));
        if closing {
            block = block.border_style(Style::default().add_modifier(Modifier::DIM));
        }
        frame.render_widget(Clear, panel);
        frame.render_widget(block, panel);

        let entries = Section::all().into_iter().enumerate();
        for ((i, section), row) in entries.zip(&layout.menu_entries) {
            let mut style = Style::default();
            if !closing && state.menu.cursor() == i {
                style = styles.get_or_default("menu_selected");
            }
            if closing {
                style = style.add_modifier(Modifier::DIM);
            }
            frame.render_widget(
                Paragraph::new(format!(" {}", section.label())).style(style),
                *row,
            );
        }
    }
}

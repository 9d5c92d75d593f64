use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{AppState, Focus},
    presentation::layout::{PageLayout, FAQ_ANSWER_ROWS},
};

/// FAQ accordion
#[derive(Debug, Clone, Default)]
pub struct FaqComponent;

impl FaqComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, layout: &PageLayout) {
        let styles = &state.config.config.styles;
        let focused = state.ui.focus == Focus::Faq && !state.menu.is_visible();

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" FAQ ");
        if focused {
            block = block.border_style(styles.get_or_default("focused_border"));
        }
        frame.render_widget(block, layout.faq);

        for (i, (entry, row)) in state
            .faq
            .entries()
            .iter()
            .zip(&layout.faq_questions)
            .enumerate()
        {
            let expanded = state.faq.is_expanded(i);
            let marker = if expanded { "▾" } else { "▸" };
            let mut style = if expanded {
                styles.get_or_default("faq_expanded")
            } else {
                Style::default()
            };
            if focused && state.faq.cursor() == i {
                style = style.add_modifier(Modifier::REVERSED);
            }
            frame.render_widget(
                Paragraph::new(format!("{marker} {}", entry.question)).style(style),
                *row,
            );

            if expanded {
                let answer = Rect {
                    x: row.x + 2,
                    y: row.y + 1,
                    width: row.width.saturating_sub(2),
                    height: FAQ_ANSWER_ROWS.min(layout.faq.bottom().saturating_sub(row.y + 2)),
                };
                frame.render_widget(
                    Paragraph::new(entry.answer.as_str())
                        .style(Style::default().fg(Color::Gray))
                        .wrap(Wrap { trim: true }),
                    answer,
                );
            }
        }
    }
}

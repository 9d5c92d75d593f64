//! Testimonial card and indicator row
//!
//! The card shows the six display slots. While a render is in flight or a
//! drag is under way the card is dimmed and shifted by the drag offset.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{AppState, Focus},
    domain::testimonial::DisplaySlots,
    presentation::layout::PageLayout,
};

const ACTIVE_DOT: &str = "●";
const INACTIVE_DOT: &str = "○";

#[derive(Debug, Clone, Default)]
pub struct CarouselComponent;

impl CarouselComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, layout: &PageLayout) {
        let styles = &state.config.config.styles;
        let carousel = &state.carousel;

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(" Testimonials ");
        if !carousel.is_empty() {
            block = block.title_bottom(
                Line::from(format!(
                    " {} / {} ",
                    carousel.current_index() + 1,
                    carousel.len()
                ))
                .right_aligned(),
            );
        }
        if state.ui.focus == Focus::Carousel && !state.menu.is_visible() {
            block = block.border_style(styles.get_or_default("focused_border"));
        }
        frame.render_widget(block, layout.carousel);

        // Nothing to draw into; the rest of the page is unaffected
        let (Some(card), Some(slots)) = (layout.card, carousel.displayed()) else {
            return;
        };

        let feedback = carousel.feedback();
        let shift = state
            .config
            .config
            .pointer_scale
            .units_to_columns(feedback.offset_x);
        let area = shifted(card, shift);

        let mut paragraph = Paragraph::new(card_lines(state, slots)).wrap(Wrap { trim: true });
        if feedback.opacity < 1.0 {
            paragraph = paragraph.style(Style::default().add_modifier(Modifier::DIM));
        }
        frame.render_widget(paragraph, area);

        self.view_indicators(state, frame, layout);
    }

    fn view_indicators(&self, state: &AppState, frame: &mut Frame, layout: &PageLayout) {
        let styles = &state.config.config.styles;
        for (rect, active) in layout
            .indicators
            .iter()
            .zip(state.carousel.indicators())
        {
            let (dot, style) = if active {
                (ACTIVE_DOT, styles.get_or_default("indicator_active"))
            } else {
                (INACTIVE_DOT, styles.get_or_default("indicator_inactive"))
            };
            frame.render_widget(
                Paragraph::new(dot).style(style).alignment(Alignment::Center),
                *rect,
            );
        }
    }
}

fn card_lines<'a>(state: &AppState, slots: &'a DisplaySlots) -> Vec<Line<'a>> {
    let styles = &state.config.config.styles;
    let badge = styles.get_or_default("badge");
    vec![
        Line::from(vec![
            Span::styled(format!(" {} ", slots.company_size), badge),
            Span::raw(" "),
            Span::styled(format!(" {} ", slots.industry), badge),
        ]),
        Line::default(),
        Line::styled(
            format!("\u{201c}{}\u{201d}", slots.quote),
            styles.get_or_default("quote"),
        ),
        Line::default(),
        Line::from(vec![
            Span::styled(slots.author_name.as_str(), styles.get_or_default("author_name")),
            Span::raw("  "),
            Span::styled(
                slots.author_title.as_str(),
                styles.get_or_default("author_title"),
            ),
        ]),
        Line::styled(
            format!("[{}] {}", slots.author_image.alt, slots.author_image.src),
            Style::default().fg(Color::DarkGray),
        ),
    ]
}

/// Inset `rect` by a side margin and move it sideways by `columns`,
/// never past the margin
fn shifted(rect: Rect, columns: i32) -> Rect {
    let margin = rect.width / 8;
    let columns = columns.clamp(-i32::from(margin), i32::from(margin));
    let x = i32::from(rect.x + margin) + columns;
    Rect {
        x: x as u16,
        width: rect.width - 2 * margin,
        ..rect
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_shifted_stays_within_margin() {
        let rect = Rect::new(10, 0, 40, 5);
        assert_eq!(shifted(rect, 0), Rect::new(15, 0, 30, 5));
        assert_eq!(shifted(rect, 3), Rect::new(18, 0, 30, 5));
        assert_eq!(shifted(rect, -3), Rect::new(12, 0, 30, 5));
        assert_eq!(shifted(rect, 100), Rect::new(20, 0, 30, 5));
        assert_eq!(shifted(rect, -100), Rect::new(10, 0, 30, 5));
    }
}

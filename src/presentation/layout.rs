//! Screen regions of the page, shared by rendering and pointer hit-testing

use ratatui::layout::{Constraint, Layout, Position, Rect};

use crate::{core::state::AppState, domain::navigation::Section};

pub const HEADER_HEIGHT: u16 = 3;
pub const MARQUEE_HEIGHT: u16 = 3;
pub const STATUS_HEIGHT: u16 = 1;
/// Columns taken by one indicator dot, padding included
pub const INDICATOR_WIDTH: u16 = 3;
/// Rows reserved under an expanded FAQ question
pub const FAQ_ANSWER_ROWS: u16 = 3;
pub const MENU_PANEL_WIDTH: u16 = 24;
pub const MENU_TOGGLE_LABEL: &str = "[ Menu ]";

/// Smallest inner area that can host the testimonial card
const MIN_CARD_WIDTH: u16 = 20;
const MIN_CARD_HEIGHT: u16 = 5;
const MIN_CAROUSEL_HEIGHT: u16 = 8;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageLayout {
    pub header: Rect,
    pub menu_toggle: Option<Rect>,
    pub marquee: Rect,
    /// Whole carousel block; hover is tracked against it
    pub carousel: Rect,
    /// `None` when the terminal is too small to host the card
    pub card: Option<Rect>,
    pub indicators: Vec<Rect>,
    pub faq: Rect,
    pub faq_questions: Vec<Rect>,
    pub status: Rect,
    /// Present while the menu is visible
    pub menu_panel: Option<Rect>,
    pub menu_entries: Vec<Rect>,
}

impl PageLayout {
    pub fn compute(area: Rect, state: &AppState) -> Self {
        let faq_height = faq_height(state);
        let [header, marquee, carousel, faq, status] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(MARQUEE_HEIGHT),
            Constraint::Min(MIN_CAROUSEL_HEIGHT),
            Constraint::Length(faq_height),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .areas(area);

        let (card, indicators) = carousel_regions(carousel, state.carousel.len());
        let faq_questions = faq_question_rows(faq, state);
        let (menu_panel, menu_entries) = if state.menu.is_visible() {
            menu_regions(area, header)
        } else {
            (None, vec![])
        };

        Self {
            header,
            menu_toggle: menu_toggle(header),
            marquee,
            carousel,
            card,
            indicators,
            faq,
            faq_questions,
            status,
            menu_panel,
            menu_entries,
        }
    }

    pub fn indicator_at(&self, position: Position) -> Option<usize> {
        self.indicators.iter().position(|r| r.contains(position))
    }

    pub fn faq_question_at(&self, position: Position) -> Option<usize> {
        self.faq_questions.iter().position(|r| r.contains(position))
    }

    pub fn menu_entry_at(&self, position: Position) -> Option<Section> {
        self.menu_entries
            .iter()
            .position(|r| r.contains(position))
            .and_then(Section::from_menu_index)
    }

    pub fn is_on_card(&self, position: Position) -> bool {
        self.card.is_some_and(|card| card.contains(position))
    }

    pub fn is_on_menu_toggle(&self, position: Position) -> bool {
        self.menu_toggle.is_some_and(|r| r.contains(position))
    }

    pub fn is_on_menu_panel(&self, position: Position) -> bool {
        self.menu_panel.is_some_and(|r| r.contains(position))
    }
}

fn inner(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(1),
        y: rect.y.saturating_add(1),
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(2),
    }
}

fn menu_toggle(header: Rect) -> Option<Rect> {
    let width = MENU_TOGGLE_LABEL.len() as u16;
    if header.width < width + 4 || header.height < HEADER_HEIGHT {
        return None;
    }
    Some(Rect::new(
        header.right() - width - 2,
        header.y + 1,
        width,
        1,
    ))
}

/// Card area plus one rect per indicator, centred on the last inner row
fn carousel_regions(carousel: Rect, count: usize) -> (Option<Rect>, Vec<Rect>) {
    let inner = inner(carousel);
    if count == 0 || inner.width < MIN_CARD_WIDTH || inner.height < MIN_CARD_HEIGHT + 1 {
        return (None, vec![]);
    }

    let card = Rect {
        height: inner.height - 1,
        ..inner
    };
    let row = inner.bottom() - 1;
    let total = (count as u16).saturating_mul(INDICATOR_WIDTH);
    if total > inner.width {
        return (Some(card), vec![]);
    }
    let start = inner.x + (inner.width - total) / 2;
    let indicators = (0..count as u16)
        .map(|i| Rect::new(start + i * INDICATOR_WIDTH, row, INDICATOR_WIDTH, 1))
        .collect();

    (Some(card), indicators)
}

fn faq_height(state: &AppState) -> u16 {
    let questions = state.faq.entries().len() as u16;
    let answer = if state.faq.expanded().is_some() {
        FAQ_ANSWER_ROWS
    } else {
        0
    };
    questions + answer + 2
}

fn faq_question_rows(faq: Rect, state: &AppState) -> Vec<Rect> {
    let inner = inner(faq);
    let mut rows = Vec::with_capacity(state.faq.entries().len());
    let mut y = inner.y;
    for i in 0..state.faq.entries().len() {
        if y >= inner.bottom() {
            break;
        }
        rows.push(Rect::new(inner.x, y, inner.width, 1));
        y += 1;
        if state.faq.is_expanded(i) {
            y += FAQ_ANSWER_ROWS;
        }
    }
    rows
}

fn menu_regions(area: Rect, header: Rect) -> (Option<Rect>, Vec<Rect>) {
    let entries = Section::all().len() as u16;
    let width = MENU_PANEL_WIDTH.min(area.width);
    let height = (entries + 2).min(area.bottom().saturating_sub(header.bottom()));
    if width < 4 || height < 3 {
        return (None, vec![]);
    }

    let panel = Rect::new(area.right() - width, header.bottom(), width, height);
    let inner = inner(panel);
    let rows = (0..entries.min(inner.height))
        .map(|i| Rect::new(inner.x, inner.y + i, inner.width, 1))
        .collect();
    (Some(panel), rows)
}

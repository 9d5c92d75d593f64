use ratatui::layout::Rect;
use serde::{Deserialize, Serialize};

use crate::{
    core::{cmd::Cmd, msg::ui::UiMsg, state::menu::MenuControl},
    domain::navigation::Section,
};

/// Page region that receives keyboard navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Focus {
    #[default]
    Carousel,
    Faq,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Carousel => Focus::Faq,
            Focus::Faq => Focus::Carousel,
        }
    }

    /// Two regions, so previous and next coincide
    pub fn previous(self) -> Self {
        self.next()
    }
}

impl From<Section> for Focus {
    fn from(section: Section) -> Self {
        match section {
            Section::Testimonials => Focus::Carousel,
            Section::Faq => Focus::Faq,
        }
    }
}

/// UI-related state
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub focus: Focus,
    /// Last known terminal area
    pub viewport: Rect,
}

impl UiState {
    pub fn update(&mut self, msg: UiMsg) -> Vec<Cmd> {
        self.focus = match msg {
            UiMsg::FocusNext => self.focus.next(),
            UiMsg::FocusPrevious => self.focus.previous(),
            UiMsg::Focused(focus) => focus,
        };
        vec![]
    }

    /// Jump to a page section, dismissing the menu first
    pub fn navigate_to(&mut self, section: Section, menu: &mut dyn MenuControl) -> Vec<Cmd> {
        let cmds = if menu.is_active() { menu.close() } else { vec![] };
        log::debug!("Navigating to {section}");
        self.focus = section.into();
        cmds
    }
}

use crate::{
    core::{
        cmd::{Cmd, TimerId},
        msg::menu::MenuMsg,
    },
    domain::{
        carousel::{step, Direction},
        navigation::Section,
    },
    infrastructure::config::MenuConfig,
};

/// Hook the section navigation handler uses to dismiss the menu before it
/// moves focus.
pub trait MenuControl {
    /// Whether the menu is open (or still closing)
    fn is_active(&self) -> bool;
    /// Begin closing the menu; returns the commands needed to finish
    fn close(&mut self) -> Vec<Cmd>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuPhase {
    #[default]
    Closed,
    Open,
    /// Close animation running; becomes `Closed` when `MenuClose` fires
    Closing,
}

/// Mobile navigation menu
#[derive(Debug, Clone, Default)]
pub struct MenuState {
    phase: MenuPhase,
    cursor: usize,
    settings: MenuConfig,
}

impl MenuState {
    pub fn new(settings: MenuConfig) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> MenuPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase == MenuPhase::Open
    }

    /// Visible while open or closing
    pub fn is_visible(&self) -> bool {
        self.phase != MenuPhase::Closed
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selected_section(&self) -> Option<Section> {
        Section::from_menu_index(self.cursor)
    }

    pub fn update(&mut self, msg: MenuMsg) -> Vec<Cmd> {
        match msg {
            MenuMsg::Toggled => match self.phase {
                MenuPhase::Closed => self.open(),
                MenuPhase::Open | MenuPhase::Closing => self.close(),
            },
            MenuMsg::CloseRequested => self.close(),
            MenuMsg::CloseElapsed => {
                if self.phase == MenuPhase::Closing {
                    self.phase = MenuPhase::Closed;
                }
                vec![]
            }
            MenuMsg::CursorMoved(direction) => {
                if self.is_open() {
                    if let Some(cursor) = step(self.cursor, Section::all().len(), direction) {
                        self.cursor = cursor;
                    }
                }
                vec![]
            }
            // Navigation needs the page focus too; see `UiState::navigate_to`
            MenuMsg::SectionSelected(_) => self.close(),
        }
    }

    /// Close an open menu once the viewport reaches the desktop breakpoint
    pub fn on_viewport_resized(&mut self, width_units: f64) -> Vec<Cmd> {
        if self.is_open() && width_units >= self.settings.desktop_breakpoint {
            log::debug!("Viewport widened to {width_units}; closing menu");
            return self.close();
        }
        vec![]
    }

    fn open(&mut self) -> Vec<Cmd> {
        self.phase = MenuPhase::Open;
        self.cursor = 0;
        vec![]
    }
}

impl MenuControl for MenuState {
    fn is_active(&self) -> bool {
        self.is_visible()
    }

    fn close(&mut self) -> Vec<Cmd> {
        match self.phase {
            MenuPhase::Open => {
                self.phase = MenuPhase::Closing;
                vec![Cmd::schedule(
                    TimerId::MenuClose,
                    self.settings.close_animation(),
                )]
            }
            MenuPhase::Closing | MenuPhase::Closed => vec![],
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use super::*;

    fn close_cmd() -> Cmd {
        Cmd::schedule(TimerId::MenuClose, Duration::from_millis(300))
    }

    #[test]
    fn test_toggle_cycle() {
        let mut menu = MenuState::default();
        assert!(menu.update(MenuMsg::Toggled).is_empty());
        assert_eq!(menu.phase(), MenuPhase::Open);

        assert_eq!(menu.update(MenuMsg::Toggled), vec![close_cmd()]);
        assert_eq!(menu.phase(), MenuPhase::Closing);
        assert!(menu.is_visible());

        menu.update(MenuMsg::CloseElapsed);
        assert_eq!(menu.phase(), MenuPhase::Closed);
        assert!(!menu.is_visible());
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let mut menu = MenuState::default();
        assert!(menu.update(MenuMsg::CloseRequested).is_empty());
        menu.update(MenuMsg::CloseElapsed);
        assert_eq!(menu.phase(), MenuPhase::Closed);
    }

    #[test]
    fn test_cursor_wraps_only_while_open() {
        let mut menu = MenuState::default();
        menu.update(MenuMsg::CursorMoved(Direction::Next));
        assert_eq!(menu.cursor(), 0);

        menu.update(MenuMsg::Toggled);
        menu.update(MenuMsg::CursorMoved(Direction::Previous));
        assert_eq!(menu.selected_section(), Section::all().last().copied());
        menu.update(MenuMsg::CursorMoved(Direction::Next));
        assert_eq!(menu.selected_section(), Some(Section::Testimonials));
    }

    #[test]
    fn test_resize_to_desktop_closes() {
        let mut menu = MenuState::default();
        menu.update(MenuMsg::Toggled);
        assert!(menu.on_viewport_resized(320.0).is_empty());
        assert!(menu.is_open());

        assert_eq!(menu.on_viewport_resized(640.0), vec![close_cmd()]);
        assert_eq!(menu.phase(), MenuPhase::Closing);
    }

    #[test]
    fn test_menu_control_trait_object() {
        let mut menu = MenuState::default();
        menu.update(MenuMsg::Toggled);
        let control: &mut dyn MenuControl = &mut menu;
        assert!(control.is_active());
        assert_eq!(control.close(), vec![close_cmd()]);
        assert!(control.close().is_empty());
    }
}

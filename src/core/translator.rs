use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::{
    core::{
        cmd::TimerId,
        msg::{
            carousel::CarouselMsg, faq::FaqMsg, marquee::MarqueeMsg, menu::MenuMsg,
            system::SystemMsg, ui::UiMsg, Msg,
        },
        raw_msg::RawMsg,
        state::{AppState, Focus},
    },
    domain::{carousel::Direction, gesture::Point},
    infrastructure::config::PointerScale,
    presentation::{config::keybindings::Action, layout::PageLayout},
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Init => vec![Msg::Carousel(CarouselMsg::Started)],
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Mouse(mouse) => translate_mouse_event(mouse, state),

        RawMsg::TimerFired(id) => vec![translate_timer(id)],

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // The marquee scrolls on the tick clock
        RawMsg::Tick => vec![Msg::Marquee(MarqueeMsg::Ticked)],
        RawMsg::Render => vec![],
    }
}

fn translate_timer(id: TimerId) -> Msg {
    match id {
        TimerId::CarouselRender => Msg::Carousel(CarouselMsg::RenderElapsed),
        TimerId::CarouselResume => Msg::Carousel(CarouselMsg::ResumeElapsed),
        TimerId::CarouselAutoAdvance => Msg::Carousel(CarouselMsg::AutoAdvanceElapsed),
        TimerId::MenuClose => Msg::Menu(MenuMsg::CloseElapsed),
        TimerId::MarqueeResume => Msg::Marquee(MarqueeMsg::ResumeElapsed),
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    let Some(action) = state.config.config.keybindings.action_for(key) else {
        return vec![]; // No matching keybinding found
    };

    // Global bindings first
    match action {
        Action::Quit => return vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => return vec![Msg::System(SystemMsg::Suspend)],
        _ => {}
    }

    // An open menu captures keyboard navigation
    if state.menu.is_open() {
        translate_menu_keys(action, state)
    } else {
        translate_page_keys(action, state)
    }
}

fn translate_menu_keys(action: Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::MoveUp | Action::MoveLeft => {
            vec![Msg::Menu(MenuMsg::CursorMoved(Direction::Previous))]
        }
        Action::MoveDown | Action::MoveRight => {
            vec![Msg::Menu(MenuMsg::CursorMoved(Direction::Next))]
        }
        Action::Activate => state
            .menu
            .selected_section()
            .map(|section| vec![Msg::Menu(MenuMsg::SectionSelected(section))])
            .unwrap_or_default(),
        Action::ToggleMenu => vec![Msg::Menu(MenuMsg::Toggled)],
        Action::Escape => vec![Msg::Menu(MenuMsg::CloseRequested)],
        _ => vec![],
    }
}

fn translate_page_keys(action: Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::ToggleMenu => return vec![Msg::Menu(MenuMsg::Toggled)],
        Action::FocusNext => return vec![Msg::Ui(UiMsg::FocusNext)],
        Action::FocusPrevious => return vec![Msg::Ui(UiMsg::FocusPrevious)],
        _ => {}
    }

    match state.ui.focus {
        Focus::Carousel => translate_carousel_keys(action, state),
        Focus::Faq => translate_faq_keys(action, state),
    }
}

fn translate_carousel_keys(action: Action, state: &AppState) -> Vec<Msg> {
    if state.carousel.is_empty() {
        return vec![];
    }

    match action {
        Action::MoveLeft => vec![Msg::Carousel(CarouselMsg::Stepped(Direction::Previous))],
        Action::MoveRight => vec![Msg::Carousel(CarouselMsg::Stepped(Direction::Next))],
        _ => vec![],
    }
}

fn translate_faq_keys(action: Action, state: &AppState) -> Vec<Msg> {
    match action {
        Action::MoveUp => vec![Msg::Faq(FaqMsg::CursorMoved(Direction::Previous))],
        Action::MoveDown => vec![Msg::Faq(FaqMsg::CursorMoved(Direction::Next))],
        Action::Activate => vec![Msg::Faq(FaqMsg::QuestionActivated(state.faq.cursor()))],
        _ => vec![],
    }
}

/// Convert a cell position into pointer units
pub fn pointer_point(scale: &PointerScale, column: u16, row: u16) -> Point {
    Point::new(scale.columns_to_units(column), f64::from(row) * scale.y)
}

fn translate_mouse_event(mouse: MouseEvent, state: &AppState) -> Vec<Msg> {
    let layout = PageLayout::compute(state.ui.viewport, state);
    let position = Position::new(mouse.column, mouse.row);
    let point = pointer_point(&state.config.config.pointer_scale, mouse.column, mouse.row);

    let mut msgs = translate_hover(position, &layout, state);
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            msgs.extend(translate_press(position, point, &layout, state));
        }
        MouseEventKind::Drag(MouseButton::Left) if state.carousel.is_dragging() => {
            msgs.push(Msg::Carousel(CarouselMsg::GestureMoved(point)));
        }
        // Releasing anywhere ends the drag
        MouseEventKind::Up(MouseButton::Left) if state.carousel.is_dragging() => {
            msgs.push(Msg::Carousel(CarouselMsg::GestureEnded));
        }
        _ => {}
    }
    msgs
}

/// Enter/leave transitions for the hover-aware regions
fn translate_hover(position: Position, layout: &PageLayout, state: &AppState) -> Vec<Msg> {
    let mut msgs = vec![];

    let over_carousel = layout.card.is_some() && layout.carousel.contains(position);
    match (state.carousel.is_hovered(), over_carousel) {
        (false, true) => msgs.push(Msg::Carousel(CarouselMsg::PointerEntered)),
        (true, false) => msgs.push(Msg::Carousel(CarouselMsg::PointerLeft)),
        _ => {}
    }

    let over_marquee = layout.marquee.contains(position);
    match (state.marquee.is_hovered(), over_marquee) {
        (false, true) => msgs.push(Msg::Marquee(MarqueeMsg::PointerEntered)),
        (true, false) => msgs.push(Msg::Marquee(MarqueeMsg::PointerLeft)),
        _ => {}
    }

    msgs
}

fn translate_press(
    position: Position,
    point: Point,
    layout: &PageLayout,
    state: &AppState,
) -> Vec<Msg> {
    if layout.is_on_menu_toggle(position) {
        return vec![Msg::Menu(MenuMsg::Toggled)];
    }

    if state.menu.is_visible() {
        if layout.is_on_menu_panel(position) {
            return layout
                .menu_entry_at(position)
                .map(|section| vec![Msg::Menu(MenuMsg::SectionSelected(section))])
                .unwrap_or_default();
        }
        // Click outside the panel only dismisses the menu
        return if state.menu.is_open() {
            vec![Msg::Menu(MenuMsg::CloseRequested)]
        } else {
            vec![]
        };
    }

    if let Some(index) = layout.indicator_at(position) {
        return vec![
            Msg::Ui(UiMsg::Focused(Focus::Carousel)),
            Msg::Carousel(CarouselMsg::IndicatorSelected(index)),
        ];
    }

    if layout.is_on_card(position) {
        return vec![
            Msg::Ui(UiMsg::Focused(Focus::Carousel)),
            Msg::Carousel(CarouselMsg::GestureStarted(point)),
        ];
    }

    if let Some(index) = layout.faq_question_at(position) {
        return vec![
            Msg::Ui(UiMsg::Focused(Focus::Faq)),
            Msg::Faq(FaqMsg::QuestionActivated(index)),
        ];
    }

    vec![]
}

use std::time::Instant;

use ratatui::layout::Rect;

use crate::core::{
    cmd::Cmd,
    msg::{menu::MenuMsg, system::SystemMsg, Msg},
    state::AppState,
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, state: AppState) -> (AppState, Vec<Cmd>) {
    update_at(msg, state, Instant::now())
}

/// [`update`] with an explicit clock for the carousel's interaction bookkeeping
pub fn update_at(msg: Msg, mut state: AppState, now: Instant) -> (AppState, Vec<Cmd>) {
    let commands = match msg {
        Msg::System(SystemMsg::Resize(width, height)) => {
            state.ui.viewport = Rect::new(0, 0, width, height);
            let width_units = state.config.config.pointer_scale.columns_to_units(width);
            state.marquee.on_viewport_resized(width_units);
            let mut cmds = state.menu.on_viewport_resized(width_units);
            cmds.extend(state.system.update(SystemMsg::Resize(width, height)));
            cmds
        }
        Msg::System(system_msg) => state.system.update(system_msg),
        Msg::Ui(ui_msg) => state.ui.update(ui_msg),
        Msg::Carousel(carousel_msg) => state.carousel.update_at(carousel_msg, now),

        // Navigation touches focus as well as the menu
        Msg::Menu(MenuMsg::SectionSelected(section)) => {
            state.ui.navigate_to(section, &mut state.menu)
        }
        Msg::Menu(menu_msg) => state.menu.update(menu_msg),

        Msg::Faq(faq_msg) => state.faq.update(faq_msg),
        Msg::Marquee(marquee_msg) => state.marquee.update(marquee_msg),
    };

    (state, commands)
}

//! Component collection
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::{core::state::AppState, presentation::layout::PageLayout};

pub mod carousel;
pub mod faq;
pub mod header;
pub mod marquee;
pub mod menu;
pub mod status_bar;

pub use carousel::CarouselComponent;
pub use faq::FaqComponent;
pub use header::HeaderComponent;
pub use marquee::MarqueeComponent;
pub use menu::MenuComponent;
pub use status_bar::StatusBarComponent;

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub header: HeaderComponent,
    pub marquee: MarqueeComponent,
    pub carousel: CarouselComponent,
    pub faq: FaqComponent,
    pub menu: MenuComponent,
    pub status_bar: StatusBarComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the whole page
    ///
    /// The menu goes last so it draws over the sections below the header.
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let layout = PageLayout::compute(frame.area(), state);

        self.header.view(state, frame, &layout);
        self.marquee.view(state, frame, layout.marquee);
        self.carousel.view(state, frame, &layout);
        self.faq.view(state, frame, &layout);
        self.status_bar.view(state, frame, layout.status);
        self.menu.view(state, frame, &layout);
    }
}

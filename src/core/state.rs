pub mod carousel;
pub mod faq;
pub mod marquee;
pub mod menu;
pub mod system;
pub mod ui;

use crate::infrastructure::config::Config;

pub use carousel::CarouselState;
pub use faq::FaqState;
pub use marquee::MarqueeState;
pub use menu::{MenuControl, MenuPhase, MenuState};
pub use system::SystemState;
pub use ui::{Focus, UiState};

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub carousel: CarouselState,
    pub menu: MenuState,
    pub faq: FaqState,
    pub marquee: MarqueeState,
    pub ui: UiState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Build every page section from `config`
    pub fn new_with_config(config: Config) -> Self {
        Self {
            carousel: CarouselState::new(config.testimonials.clone(), config.carousel.clone()),
            menu: MenuState::new(config.menu.clone()),
            faq: FaqState::new(config.faq.clone()),
            marquee: MarqueeState::new(&config.logos, config.marquee.clone()),
            ui: UiState::default(),
            system: SystemState::default(),
            config: ConfigState { config },
        }
    }
}

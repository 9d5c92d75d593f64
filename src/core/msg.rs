use serde::{Deserialize, Serialize};

pub mod carousel;
pub mod faq;
pub mod marquee;
pub mod menu;
pub mod system;
pub mod ui;

use carousel::CarouselMsg;
use faq::FaqMsg;
use marquee::MarqueeMsg;
use menu::MenuMsg;
use system::SystemMsg;
use ui::UiMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    System(SystemMsg),
    Ui(UiMsg),
    Carousel(CarouselMsg),
    Menu(MenuMsg),
    Faq(FaqMsg),
    Marquee(MarqueeMsg),
}

impl Msg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::Carousel(msg) => msg.is_frequent(),
            Msg::Marquee(MarqueeMsg::Ticked) => true,
            _ => false,
        }
    }
}

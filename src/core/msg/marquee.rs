use serde::{Deserialize, Serialize};

/// Messages that update the logo marquee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarqueeMsg {
    Ticked,
    PointerEntered,
    PointerLeft,
    ResumeElapsed,
}

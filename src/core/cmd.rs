use std::time::Duration;

use serde::{Deserialize, Serialize};
use strum::Display;

/// Keys for the page's scheduled callbacks.
///
/// At most one timer per key is pending at any time: scheduling a key again
/// replaces the earlier timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum TimerId {
    /// Delayed slot swap of a carousel render
    CarouselRender,
    /// Auto-advance restart after an interaction or hover leave
    CarouselResume,
    /// Repeating auto-advance
    CarouselAutoAdvance,
    /// End of the menu closing animation
    MenuClose,
    /// Marquee resume after hover leave
    MarqueeResume,
}

/// Elm-like command definitions
/// Represents side effects the host runtime performs on behalf of `update`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    /// Fire `id` once after `delay`
    ScheduleTimer { id: TimerId, delay: Duration },
    /// Fire `id` every `period` until cancelled
    StartInterval { id: TimerId, period: Duration },
    /// Drop a pending timer; no-op if none is pending
    CancelTimer(TimerId),
}

impl Cmd {
    pub fn schedule(id: TimerId, delay: Duration) -> Self {
        Cmd::ScheduleTimer { id, delay }
    }
}

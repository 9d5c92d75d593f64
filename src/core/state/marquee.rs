use unicode_width::UnicodeWidthStr;

use crate::{
    core::{
        cmd::{Cmd, TimerId},
        msg::marquee::MarqueeMsg,
    },
    domain::text::{marquee_track, marquee_window},
    infrastructure::config::MarqueeConfig,
};

/// Scrolling logo strip
#[derive(Debug, Clone, Default)]
pub struct MarqueeState {
    track: String,
    offset: usize,
    paused: bool,
    hovered: bool,
    /// Hover pauses only on wide viewports
    pause_enabled: bool,
    settings: MarqueeConfig,
}

impl MarqueeState {
    pub fn new(logos: &[String], settings: MarqueeConfig) -> Self {
        Self {
            track: marquee_track(logos),
            settings,
            ..Self::default()
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn pause_enabled(&self) -> bool {
        self.pause_enabled
    }

    /// The part of the track visible in `width` columns
    pub fn visible(&self, width: usize) -> String {
        marquee_window(&self.track, self.offset, width)
    }

    pub fn update(&mut self, msg: MarqueeMsg) -> Vec<Cmd> {
        match msg {
            MarqueeMsg::Ticked => {
                if !self.paused && !self.track.is_empty() {
                    self.offset = (self.offset + 1) % self.track.width();
                }
                vec![]
            }
            MarqueeMsg::PointerEntered => {
                self.hovered = true;
                if self.pause_enabled {
                    self.paused = true;
                }
                vec![Cmd::CancelTimer(TimerId::MarqueeResume)]
            }
            MarqueeMsg::PointerLeft => {
                self.hovered = false;
                if self.paused {
                    vec![Cmd::schedule(
                        TimerId::MarqueeResume,
                        self.settings.resume_delay(),
                    )]
                } else {
                    vec![]
                }
            }
            MarqueeMsg::ResumeElapsed => {
                if !self.hovered {
                    self.paused = false;
                }
                vec![]
            }
        }
    }

    pub fn on_viewport_resized(&mut self, width_units: f64) {
        self.pause_enabled = width_units > self.settings.pause_breakpoint;
        if !self.pause_enabled {
            self.paused = false;
        }
    }
}

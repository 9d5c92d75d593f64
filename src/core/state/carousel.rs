//! Testimonial carousel state
//!
//! The carousel owns the ordered testimonials, the cursor into them, the
//! six display slots and the timers that pace rendering and auto-advance.
//! Every transition goes through [`CarouselState::update_at`], which returns
//! the timer commands the host has to run.

use std::time::Instant;

use crate::{
    core::{
        cmd::{Cmd, TimerId},
        msg::carousel::CarouselMsg,
    },
    domain::{
        carousel::{step, Direction},
        gesture::{DragFeedback, Gesture, Point, OPACITY_FLOOR},
        testimonial::{DisplaySlots, Testimonial},
    },
    infrastructure::config::CarouselConfig,
};

#[derive(Debug, Clone)]
pub struct CarouselState {
    testimonials: Vec<Testimonial>,
    current_index: usize,
    /// What the slots show right now; trails `current_index` by the render delay
    displayed: Option<DisplaySlots>,
    /// Index whose slot swap is scheduled
    pending_index: Option<usize>,
    feedback: DragFeedback,
    is_hovered: bool,
    gesture: Option<Gesture>,
    auto_advance_active: bool,
    last_interaction: Option<Instant>,
    settings: CarouselConfig,
}

impl CarouselState {
    pub fn new(testimonials: Vec<Testimonial>, settings: CarouselConfig) -> Self {
        let displayed = testimonials.first().map(DisplaySlots::from);
        Self {
            testimonials,
            current_index: 0,
            displayed,
            pending_index: None,
            feedback: DragFeedback::BASELINE,
            is_hovered: false,
            gesture: None,
            auto_advance_active: false,
            last_interaction: None,
            settings,
        }
    }

    pub fn len(&self) -> usize {
        self.testimonials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.testimonials.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn displayed(&self) -> Option<&DisplaySlots> {
        self.displayed.as_ref()
    }

    pub fn is_transitioning(&self) -> bool {
        self.pending_index.is_some()
    }

    pub fn feedback(&self) -> DragFeedback {
        self.feedback
    }

    pub fn is_hovered(&self) -> bool {
        self.is_hovered
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.auto_advance_active
    }

    pub fn last_interaction(&self) -> Option<Instant> {
        self.last_interaction
    }

    pub fn settings(&self) -> &CarouselConfig {
        &self.settings
    }

    /// Active flag of each indicator, in testimonial order
    pub fn indicators(&self) -> Vec<bool> {
        (0..self.len()).map(|i| i == self.current_index).collect()
    }

    pub fn update(&mut self, msg: CarouselMsg) -> Vec<Cmd> {
        self.update_at(msg, Instant::now())
    }

    /// Apply `msg` as if it happened at `now`
    pub fn update_at(&mut self, msg: CarouselMsg, now: Instant) -> Vec<Cmd> {
        match msg {
            CarouselMsg::Started => self.start_auto_advance(),
            CarouselMsg::Stepped(direction) => {
                let mut cmds = self.advance(direction);
                cmds.extend(self.reset_interaction_timer(now));
                cmds
            }
            CarouselMsg::IndicatorSelected(index) => {
                let mut cmds = self.jump_to(index);
                cmds.extend(self.reset_interaction_timer(now));
                cmds
            }
            CarouselMsg::RenderElapsed => {
                self.finish_render();
                vec![]
            }
            CarouselMsg::PointerEntered => {
                self.is_hovered = true;
                self.stop_auto_advance()
            }
            CarouselMsg::PointerLeft => {
                self.is_hovered = false;
                vec![Cmd::schedule(
                    TimerId::CarouselResume,
                    self.settings.hover_resume_delay(),
                )]
            }
            CarouselMsg::GestureStarted(point) => self.on_gesture_start(point),
            CarouselMsg::GestureMoved(point) => {
                self.on_gesture_move(point);
                vec![]
            }
            CarouselMsg::GestureEnded => self.on_gesture_end(now),
            CarouselMsg::ResumeElapsed => {
                if self.is_hovered {
                    vec![]
                } else {
                    self.start_auto_advance()
                }
            }
            CarouselMsg::AutoAdvanceElapsed => self.on_auto_advance_tick(now),
        }
    }

    /// Begin showing `index`: dim the card and schedule the slot swap.
    ///
    /// A newer render replaces the pending swap, so the last request wins.
    fn render(&mut self, index: usize) -> Vec<Cmd> {
        if index >= self.len() {
            return vec![];
        }

        self.feedback.opacity = OPACITY_FLOOR;
        self.pending_index = Some(index);
        vec![Cmd::schedule(
            TimerId::CarouselRender,
            self.settings.render_delay(),
        )]
    }

    fn finish_render(&mut self) {
        let Some(index) = self.pending_index.take() else {
            return;
        };
        if let Some(testimonial) = self.testimonials.get(index) {
            self.displayed = Some(DisplaySlots::from(testimonial));
        }
        self.feedback.opacity = 1.0;
    }

    pub fn advance(&mut self, direction: Direction) -> Vec<Cmd> {
        match step(self.current_index, self.len(), direction) {
            Some(index) => {
                self.current_index = index;
                self.render(index)
            }
            None => vec![],
        }
    }

    pub fn jump_to(&mut self, index: usize) -> Vec<Cmd> {
        if index >= self.len() {
            log::warn!(
                "Ignoring jump to testimonial {index}; only {} loaded",
                self.len()
            );
            return vec![];
        }

        self.current_index = index;
        self.render(index)
    }

    /// Start the repeating auto-advance timer.
    ///
    /// No-op while the feature flag is off, when nothing is loaded, or when
    /// the timer already runs.
    pub fn start_auto_advance(&mut self) -> Vec<Cmd> {
        if !self.settings.auto_advance_enabled || self.is_empty() || self.auto_advance_active {
            return vec![];
        }
        if self.settings.auto_advance_interval().is_zero() {
            log::warn!("Auto-advance interval is zero, not starting");
            return vec![];
        }

        log::debug!("Starting testimonial auto-advance");
        self.auto_advance_active = true;
        vec![Cmd::StartInterval {
            id: TimerId::CarouselAutoAdvance,
            period: self.settings.auto_advance_interval(),
        }]
    }

    pub fn stop_auto_advance(&mut self) -> Vec<Cmd> {
        if !self.auto_advance_active {
            return vec![];
        }

        log::debug!("Stopping testimonial auto-advance");
        self.auto_advance_active = false;
        vec![Cmd::CancelTimer(TimerId::CarouselAutoAdvance)]
    }

    /// Record a user interaction and restart auto-advance after the grace delay.
    ///
    /// The grace timer shares its key with the hover-leave delay, so the
    /// later of the two replaces the earlier.
    pub fn reset_interaction_timer(&mut self, now: Instant) -> Vec<Cmd> {
        self.last_interaction = Some(now);
        let mut cmds = self.stop_auto_advance();
        cmds.push(Cmd::schedule(
            TimerId::CarouselResume,
            self.settings.interaction_grace(),
        ));
        cmds
    }

    fn on_gesture_start(&mut self, point: Point) -> Vec<Cmd> {
        self.gesture = Some(Gesture::new(point));
        self.stop_auto_advance()
    }

    fn on_gesture_move(&mut self, point: Point) {
        if let Some(gesture) = self.gesture.as_mut() {
            gesture.move_to(point);
            self.feedback = gesture.feedback();
        }
    }

    fn on_gesture_end(&mut self, now: Instant) -> Vec<Cmd> {
        let Some(gesture) = self.gesture.take() else {
            return vec![];
        };

        self.feedback = DragFeedback::BASELINE;
        let mut cmds = match gesture.swipe(self.settings.swipe_threshold) {
            Some(direction) => {
                log::debug!("Swipe committed: {direction}");
                self.advance(direction)
            }
            None => vec![],
        };
        cmds.extend(self.reset_interaction_timer(now));
        cmds
    }

    fn on_auto_advance_tick(&mut self, now: Instant) -> Vec<Cmd> {
        if !self.auto_advance_active {
            return vec![];
        }

        let interval = self.settings.auto_advance_interval();
        let recently_touched = self
            .last_interaction
            .is_some_and(|at| now.saturating_duration_since(at) < interval);
        if recently_touched {
            return vec![];
        }

        self.advance(Direction::Next)
    }
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new(vec![], CarouselConfig::default())
    }
}

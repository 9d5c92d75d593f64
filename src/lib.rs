//! # pamui - marketing page in the terminal
//!
//! A terminal rendition of a product landing page: a testimonial carousel
//! driven by keys, clicks and swipes, a navigation menu, an FAQ accordion and
//! a scrolling logo strip. Built on an Elm-like architecture for predictable
//! state management.
//!
//! ## Architecture Overview
//!
//! - **Raw messages** (`core::raw_msg`): terminal events and timer expiries
//! - **Translator** (`core::translator`): pure mapping to domain messages
//! - **Update** (`core::update`): pure state transitions returning commands
//! - **Commands** (`core::cmd`): timers the host schedules or cancels
//! - **View** (`presentation::components`): stateless rendering of `AppState`
//!
//! ## Example Usage
//!
//! ```rust
//! use pamui::core::{
//!     msg::{carousel::CarouselMsg, Msg},
//!     state::AppState,
//!     update::update,
//! };
//! use pamui::domain::carousel::Direction;
//! use pamui::infrastructure::config::Config;
//!
//! let state = AppState::new_with_config(Config::embedded().unwrap());
//! let (state, commands) = update(Msg::Carousel(CarouselMsg::Stepped(Direction::Previous)), state);
//!
//! assert_eq!(state.carousel.current_index(), 2);
//! assert!(!commands.is_empty());
//! ```

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

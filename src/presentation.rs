//! Presentation layer
//!
//! This module contains the page components, the shared screen layout and
//! configuration (styles, keybindings).

pub mod components;
pub mod config;
pub mod layout;

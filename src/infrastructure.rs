//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation (crossterm terminal and test backend)
//! - CLI argument processing
//! - Configuration loading

pub mod cli;
pub mod config;
pub mod tui;

//! Integration layer
//!
//! Wires the Elm core to the terminal:
//! - Runtime (translate → update → execute)
//! - Renderer
//! - AppRunner event loop

pub mod app_runner;
pub mod renderer;
pub mod runtime;

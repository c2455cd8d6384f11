//! UI primitives for the Affine CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badges and styles
//! - **Render**: Headers, parameter tables, hints, errors
//! - **Prompt**: Interactive text prompts

mod context;
mod mode;
pub mod prompt;
pub mod render;
pub mod theme;

pub use context::{UiContext, UiOptions};
pub use theme::Badge;

pub use render::{
    badge, blank_line, divider, header, hint, kv, params_table, print, print_error, warning,
};

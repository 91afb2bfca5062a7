//! Terminal display module
//!
//! Handles styled help output with automatic TTY detection.

mod formatter;
mod terminal;

pub use formatter::format_markdown;
pub use terminal::should_use_colors;

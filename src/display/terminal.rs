//! TTY detection

use std::io::IsTerminal;

/// Styled output needs both permission and a terminal on stdout
pub fn should_use_colors(allowed: bool) -> bool {
    allowed && std::io::stdout().is_terminal()
}

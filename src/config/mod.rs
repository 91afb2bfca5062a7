//! Configuration module
//!
//! Session options come from command-line flags only; there is no
//! configuration file. Defines Config, Variant, and Display types.

mod types;

pub use types::{Config, Display, Variant};

/// Build the session configuration from command-line flags
pub fn from_flags(indexed: bool, no_color: bool) -> Config {
    let variant = if indexed {
        Variant::Indexed
    } else {
        Variant::Plain
    };

    Config {
        variant,
        display: Display { color: !no_color },
    }
}

//! Data models module
//!
//! Defines the Correlator record and its value types: Range, Field, Record.

pub mod record;

pub use record::{Field, Range, Record};

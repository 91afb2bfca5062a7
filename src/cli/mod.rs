//! Command-line interface module
//!
//! Implements both ways of filling in a Correlator:
//! - batch: all values as positional arguments, rendered once
//! - interactive: `:command [argument]` lines read from stdin
pub mod batch;
pub mod command;
pub mod interactive;

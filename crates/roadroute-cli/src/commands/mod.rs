//! Handlers for the CLI subcommands.
//!
//! `main.rs` parses arguments, loads the road network once and dispatches
//! here.

pub mod landmark;
pub mod route;

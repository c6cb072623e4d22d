//! Road route CLI library.
//!
//! Output formatting shared by the `roadroute` binary's subcommands.

pub mod output;

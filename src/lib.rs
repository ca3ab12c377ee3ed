//! Operator client for the profiles admin API.
//!
//! The binary in `main.rs` wires these modules into one-shot subcommands and
//! an interactive dashboard shell.

pub mod config;
pub mod net;
pub mod pages;
pub mod render;
pub mod routes;
pub mod shell;
pub mod state;

//! Presentation Layer
//!
//! CLI argument parsing (via clap). Terminal rendering lives in the binary's
//! `ui` module.

pub mod cli;

pub use cli::{parse_args, ArgsOutcome, Cli, ColorWhen, USAGE};

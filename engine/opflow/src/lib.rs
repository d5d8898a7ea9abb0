//! opflow: evaluate unordered lists of `calc` and `print` operations.
//!
//! This crate is the driver around `opflow_eval`: it loads requests from
//! JSON or the line-oriented text form, runs the evaluator, and renders
//! results, diagnostics and dependency graphs. The `opflow` binary in
//! `main.rs` is a thin argument parser over [`commands`].

pub mod commands;
mod error;
pub mod input;
pub mod output;
mod tracing_setup;

pub use error::CliError;
pub use tracing_setup::init_tracing;

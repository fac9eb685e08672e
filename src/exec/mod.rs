// src/exec/mod.rs

//! Process execution layer.
//!
//! This module is responsible for running the two external processes the
//! tool deals with, both via `tokio::process::Command`:
//!
//! - [`build`] invokes the external build command and reports pass/fail
//!   plus duration.
//! - [`supervisor`] owns the single current instance of the built binary
//!   and handles start / kill-and-restart / shutdown.

pub mod build;
pub mod supervisor;

pub use build::{BuildResult, BuildRunner};
pub use supervisor::Supervisor;

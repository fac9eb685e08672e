// src/errors.rs

//! Crate-wide error types.
//!
//! Most of the crate propagates `anyhow::Result`; `StartupError` exists
//! because startup failures have distinct, user-facing causes and all of
//! them are fatal — the tool cannot run without a watch set.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal startup failures. Any of these aborts the process with a
/// non-zero exit before watching begins.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("cannot resolve the project root: {0}")]
    ProjectRoot(#[source] std::io::Error),

    #[error("cannot derive an app name from {0:?}; pass one explicitly")]
    AppName(PathBuf),

    #[error("cannot enumerate directories under {path:?}: {source}")]
    Enumerate {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot create the filesystem watcher: {0}")]
    WatcherInit(#[from] notify::Error),

    #[error("cannot subscribe {path:?} to change notifications: {source}")]
    Subscribe {
        path: PathBuf,
        source: notify::Error,
    },
}

pub use anyhow::{Error, Result};

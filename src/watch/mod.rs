// src/watch/mod.rs

//! File watching and change detection.
//!
//! This module is responsible for:
//! - Enumerating the watch set (every directory under the project root,
//!   minus version-control metadata).
//! - Recognizing source files by extension.
//! - Debouncing raw change notifications into rebuild decisions.
//! - Wiring up a cross-platform filesystem watcher (`notify`) and driving
//!   the rebuild → restart loop off its events.
//!
//! It does **not** know how building or process supervision work; it only
//! turns filesystem changes into calls on the [`crate::exec`] layer.

pub mod debounce;
pub mod filter;
pub mod loop_driver;
pub mod walk;
pub mod watcher;

pub use debounce::{ChangeFilter, Verdict};
pub use filter::SourceFilter;
pub use loop_driver::{LoopEvent, WatchLoop};
pub use walk::walk_dirs;
pub use watcher::{WatcherHandle, spawn_watcher};

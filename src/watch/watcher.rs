// src/watch/watcher.rs

use std::path::PathBuf;

use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::info;

use crate::errors::StartupError;
use crate::watch::loop_driver::LoopEvent;

/// Handle for the filesystem watcher.
///
/// This exists mainly so the underlying `RecommendedWatcher` is kept alive
/// for as long as needed. Dropping this handle stops file watching.
pub struct WatcherHandle {
    _inner: RecommendedWatcher,
}

impl std::fmt::Debug for WatcherHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatcherHandle").finish()
    }
}

/// Subscribe every directory in the watch set and bridge notify's callback
/// into the watch loop's channel.
///
/// Subscriptions are non-recursive: the watch set already names every
/// directory of interest, and it is fixed at startup — directories created
/// later are not picked up.
///
/// Any subscription failure is fatal; a watch set with holes in it would
/// silently miss edits.
pub fn spawn_watcher(
    watch_set: &[PathBuf],
    tx: mpsc::UnboundedSender<LoopEvent>,
) -> Result<WatcherHandle, StartupError> {
    // Closure called synchronously by notify whenever an event arrives.
    // Transport errors ride the same channel so the loop can log them
    // without the watcher dying.
    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<notify::Event>| {
            let event = match res {
                Ok(event) => LoopEvent::Fs(event),
                Err(err) => LoopEvent::WatchError(err),
            };
            if tx.send(event).is_err() {
                // The loop is gone; we can't log via tracing from this
                // thread reliably, so fall back to stderr.
                eprintln!("hotrun: watch loop closed, dropping notify event");
            }
        },
        Config::default(),
    )?;

    for dir in watch_set {
        watcher
            .watch(dir, RecursiveMode::NonRecursive)
            .map_err(|source| StartupError::Subscribe {
                path: dir.clone(),
                source,
            })?;
    }

    info!(dirs = watch_set.len(), "file watcher started");

    Ok(WatcherHandle { _inner: watcher })
}

// src/watch/loop_driver.rs

use std::time::Instant;

use anyhow::Result;
use notify::Event;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::exec::{BuildRunner, Supervisor};
use crate::watch::debounce::ChangeFilter;

/// Everything the watch loop reacts to, multiplexed onto one channel:
///
/// - the watcher sends `Fs` and `WatchError`
/// - Ctrl-C handling sends `Shutdown`
#[derive(Debug)]
pub enum LoopEvent {
    Fs(Event),
    WatchError(notify::Error),
    Shutdown,
}

/// The main loop driver.
///
/// Consumes events strictly one at a time and runs the rebuild → restart
/// sequence synchronously for each trigger, so two build/restart sequences
/// can never overlap. It is also the sole owner of the debounce table and
/// the supervisor's process handle; nothing outside this task touches
/// either.
pub struct WatchLoop {
    filter: ChangeFilter,
    builder: BuildRunner,
    supervisor: Supervisor,
    events_rx: mpsc::UnboundedReceiver<LoopEvent>,
}

impl WatchLoop {
    pub fn new(
        filter: ChangeFilter,
        builder: BuildRunner,
        supervisor: Supervisor,
        events_rx: mpsc::UnboundedReceiver<LoopEvent>,
    ) -> Self {
        Self {
            filter,
            builder,
            supervisor,
            events_rx,
        }
    }

    /// Main event loop.
    ///
    /// Runs until shutdown is requested or every event producer has gone
    /// away. Events that arrive while a build is in flight queue in the
    /// channel and are evaluated once the current sequence finishes.
    pub async fn run(mut self) -> Result<()> {
        info!("watch loop started");

        while let Some(event) = self.events_rx.recv().await {
            match event {
                LoopEvent::Fs(event) => self.handle_fs_event(event).await,
                LoopEvent::WatchError(err) => {
                    // Transport-level errors are not fatal to watching.
                    warn!(error = %err, "file watch error");
                }
                LoopEvent::Shutdown => {
                    info!("shutdown requested, stopping watch loop");
                    self.supervisor.shutdown().await;
                    break;
                }
            }
        }

        info!("watch loop exiting");
        Ok(())
    }

    /// The event kind is deliberately not inspected; only the path's
    /// extension matters, and the debouncer absorbs duplicate kinds.
    async fn handle_fs_event(&mut self, event: Event) {
        for path in &event.paths {
            let verdict = self.filter.evaluate(path, Instant::now());
            debug!(?verdict, path = %path.display(), "notify event dispatched");

            if verdict.should_rebuild() {
                self.rebuild_and_restart().await;
            }
        }
    }

    /// One full rebuild cycle. A failed build leaves the running instance
    /// untouched; a failed restart leaves the loop alive either way.
    async fn rebuild_and_restart(&mut self) {
        let result = match self.builder.build().await {
            Ok(result) => result,
            Err(err) => {
                error!(error = %err, "could not invoke build command");
                return;
            }
        };

        if !result.success {
            warn!(
                elapsed_ms = result.elapsed_ms(),
                "build failed; keeping current instance"
            );
            return;
        }

        if let Err(err) = self.supervisor.restart().await {
            error!(error = %err, "restart failed");
        }
    }
}

// src/watch/debounce.rs

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::debug;

use crate::watch::filter::SourceFilter;

/// What the filter/debouncer decided about a single change notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Qualifying event, spaced far enough from the previous one: rebuild.
    Rebuild,
    /// Qualifying event inside the debounce window: absorbed.
    Coalesced,
    /// Not a recognized source file: no state touched.
    Ignored,
}

impl Verdict {
    pub fn should_rebuild(self) -> bool {
        matches!(self, Verdict::Rebuild)
    }
}

/// Decides, per incoming change notification, whether to rebuild.
///
/// Keeps one monotonic timestamp per path: the last *processed* qualifying
/// event, updated whether or not that event triggered a rebuild. Entries
/// are never removed, so the table grows by one entry per distinct file
/// ever changed. Paths are debounced independently of each other — there
/// is no cross-file coalescing.
///
/// Some platforms deliver several notifications for one logical edit; the
/// window exists precisely to absorb those duplicates.
#[derive(Debug)]
pub struct ChangeFilter {
    sources: SourceFilter,
    threshold: Duration,
    last_seen: HashMap<PathBuf, Instant>,
}

impl ChangeFilter {
    pub fn new(sources: SourceFilter, threshold: Duration) -> Self {
        Self {
            sources,
            threshold,
            last_seen: HashMap::new(),
        }
    }

    /// Evaluate one notification for `path` observed at `at`.
    ///
    /// The first qualifying event ever seen for a path always rebuilds;
    /// afterwards a rebuild needs a gap strictly greater than the
    /// threshold since the last processed event on that same path.
    ///
    /// Timestamps are monotonic but events may still arrive out of order;
    /// a regression is treated as a zero gap rather than a panic.
    pub fn evaluate(&mut self, path: &Path, at: Instant) -> Verdict {
        if !self.sources.matches(path) {
            return Verdict::Ignored;
        }

        let verdict = match self.last_seen.insert(path.to_path_buf(), at) {
            None => Verdict::Rebuild,
            Some(prev) => {
                if at.saturating_duration_since(prev) > self.threshold {
                    Verdict::Rebuild
                } else {
                    Verdict::Coalesced
                }
            }
        };

        debug!(?verdict, path = %path.display(), "change event evaluated");
        verdict
    }

    /// Number of distinct paths with a recorded last-seen timestamp.
    pub fn tracked_paths(&self) -> usize {
        self.last_seen.len()
    }
}

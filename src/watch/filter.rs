// src/watch/filter.rs

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};

/// Compiled matcher for recognized source files.
///
/// Built once from the configured extensions; every notified path goes
/// through [`SourceFilter::matches`] before any debounce state is touched.
#[derive(Clone)]
pub struct SourceFilter {
    set: GlobSet,
}

impl fmt::Debug for SourceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceFilter").finish_non_exhaustive()
    }
}

impl SourceFilter {
    /// Compile one `**/*.<ext>` glob per extension.
    ///
    /// A leading dot on an extension is accepted and stripped, so
    /// `-e go` and `-e .go` behave the same.
    pub fn from_extensions<S: AsRef<str>>(extensions: &[S]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();

        for ext in extensions {
            let ext = ext.as_ref().trim().trim_start_matches('.');
            let pattern = format!("**/*.{ext}");
            let glob = Glob::new(&pattern)
                .with_context(|| format!("invalid source pattern: {pattern}"))?;
            builder.add(glob);
        }

        Ok(Self {
            set: builder.build()?,
        })
    }

    /// Returns true if `path` names a recognized source file.
    pub fn matches(&self, path: &Path) -> bool {
        self.set.is_match(path)
    }
}

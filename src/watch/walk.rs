// src/watch/walk.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::StartupError;

/// Directory names that mark version-control metadata; nothing under them
/// is ever a rebuild trigger, so they are left out of the watch set.
const VCS_DIRS: &[&str] = &[".git", ".hg", ".svn"];

/// Recursively enumerate `root` and every sub-directory reachable from it.
///
/// The result is the watch set: the notification mechanism is subscribed
/// per-directory and reports events for the files inside, so only
/// directories are listed, parents before their children. The set is
/// built once at startup and never changes afterwards.
pub fn walk_dirs(root: &Path) -> Result<Vec<PathBuf>, StartupError> {
    let mut dirs = Vec::new();
    visit(root, &mut dirs)?;
    Ok(dirs)
}

fn visit(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), StartupError> {
    out.push(dir.to_path_buf());

    let entries = fs::read_dir(dir).map_err(|source| StartupError::Enumerate {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let entry = entry.map_err(|source| StartupError::Enumerate {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = entry.path();
        if path.is_dir() && !is_vcs_dir(&path) {
            visit(&path, out)?;
        }
    }

    Ok(())
}

fn is_vcs_dir(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| VCS_DIRS.contains(&n))
        .unwrap_or(false)
}

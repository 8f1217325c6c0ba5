//! Content file discovery.
//!
//! Stage 2 of the merge pipeline. Walks the input root depth-first and keeps
//! every regular file whose name ends in the `.html` suffix (case-sensitive),
//! in directory-entry order as the filesystem reports it — not sorted.
//!
//! A traversal error (unreadable subdirectory, dangling entry) aborts the
//! walk early: files found before the error are still returned, alongside the
//! error itself so the caller can report a partial result.

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Result of walking the input root. `files` is everything found up to the
/// first traversal error, if any.
#[derive(Debug)]
pub struct Collected {
    pub files: Vec<PathBuf>,
    pub walk_error: Option<walkdir::Error>,
}

/// Recursively enumerate `.html` files under `root`.
///
/// An empty `files` list is a valid outcome (nothing to process), distinct
/// from a walk error.
pub fn collect_html_files(root: &Path) -> Collected {
    let mut files = Vec::new();
    let mut walk_error = None;

    for entry in WalkDir::new(root) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                walk_error = Some(err);
                break;
            }
        };
        if entry.file_type().is_file() && entry.file_name().to_string_lossy().ends_with(".html") {
            files.push(entry.into_path());
        }
    }

    Collected { files, walk_error }
}

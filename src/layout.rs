//! Layout template loading.
//!
//! Stage 1 of the merge pipeline. Reads the shared layout file into memory
//! once; the text is then treated as immutable for the rest of the run.
//!
//! Loading never falls back silently: [`load`] returns an explicit error and
//! the caller decides whether to recover with [`Layout::fallback`] or to
//! fail the run (the `--strict-layout` flag). The fallback is a minimal bare
//! document with an empty placeholder region, so the pipeline always has
//! something to merge into.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Minimal built-in template used when the layout file is unreadable.
pub const FALLBACK_TEMPLATE: &str = "<html><body><main></main></body></html>";

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("failed to read layout file {path}: {source}")]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Where a layout's text came from. Carried so the run report can say when
/// the built-in fallback was used instead of the requested file.
#[derive(Debug, Clone, PartialEq)]
pub enum LayoutSource {
    File(PathBuf),
    Fallback,
}

/// The loaded layout template. Read once, shared read-only across all merges.
#[derive(Debug, Clone)]
pub struct Layout {
    pub text: String,
    pub source: LayoutSource,
}

impl Layout {
    /// The built-in fallback: a bare document with an empty `<main>` region.
    pub fn fallback() -> Self {
        Layout {
            text: FALLBACK_TEMPLATE.to_string(),
            source: LayoutSource::Fallback,
        }
    }
}

/// Read the layout file at `path`.
///
/// Missing file and permission errors both surface as
/// [`LayoutError::Unreadable`]; recovery is the caller's choice.
pub fn load(path: &Path) -> Result<Layout, LayoutError> {
    let text = fs::read_to_string(path).map_err(|source| LayoutError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Layout {
        text,
        source: LayoutSource::File(path.to_path_buf()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_reads_file_text() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("_layout.html");
        fs::write(&path, "<html><main></main></html>").unwrap();

        let layout = load(&path).unwrap();
        assert_eq!(layout.text, "<html><main></main></html>");
        assert_eq!(layout.source, LayoutSource::File(path));
    }

    #[test]
    fn load_missing_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.html");

        let err = load(&path).unwrap_err();
        assert!(err.to_string().contains("nope.html"));
    }

    #[test]
    fn fallback_has_empty_placeholder() {
        let layout = Layout::fallback();
        assert_eq!(layout.text, "<html><body><main></main></body></html>");
        assert_eq!(layout.source, LayoutSource::Fallback);
    }
}

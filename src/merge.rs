//! Content extraction and layout splicing.
//!
//! Stage 3 of the merge pipeline, and the only non-trivial logic in the tool.
//! For each collected file:
//!
//! 1. Read its full text (unreadable file → empty content, recorded).
//! 2. Extract the first `<main…>…</main>` region. A file that has one
//!    contributes that region verbatim, wrapping tags and attributes
//!    included; a file without one has its entire text wrapped in a fresh
//!    bare `<main>` pair.
//! 3. Replace the first placeholder region in the layout with the region
//!    from step 2. A layout without any placeholder passes through unchanged
//!    and the dropped content is recorded in the outcome.
//! 4. Write the combined document to `output_root/relative_path`, creating
//!    intermediate directories, as one complete buffer write.
//!
//! ## Placeholder Pattern
//!
//! `(?s)<main[^>]*>.*?</main>` — case-sensitive start tag with optional
//! attributes, lazily matched inner text, literal end tag. `(?s)` lets the
//! region span lines. Only the first match in a given text is used.
//! Splicing uses [`NoExpand`] so `$` in user content is never treated as a
//! capture-group reference.
//!
//! ## Failure Policy
//!
//! Directory-creation and write errors skip that one file and are collected
//! as [`MergeFailure`] entries; the batch continues. Files are merged
//! strictly in collector order, each fully written before the next begins.

use crate::layout::Layout;
use regex::{NoExpand, Regex};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

const PLACEHOLDER_PATTERN: &str = r"(?s)<main[^>]*>.*?</main>";

#[derive(Error, Debug)]
pub enum MergeError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write output file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// One successfully written output file, with the conditions the run report
/// surfaces as context lines.
#[derive(Debug)]
pub struct MergeOutcome {
    pub source: PathBuf,
    /// Source path with the input-root prefix stripped; the output key.
    pub relative: PathBuf,
    pub destination: PathBuf,
    /// Source was unreadable and merged as empty content.
    pub source_read_failed: bool,
    /// Source carried its own `<main>` region (vs. whole-file wrap).
    pub source_had_region: bool,
    /// Layout had a placeholder; false means the content was dropped.
    pub spliced: bool,
}

/// One skipped file: the merge loop logs these and moves on.
#[derive(Debug)]
pub struct MergeFailure {
    pub source: PathBuf,
    pub error: MergeError,
}

#[derive(Debug, Default)]
pub struct MergeReport {
    pub merged: Vec<MergeOutcome>,
    pub failures: Vec<MergeFailure>,
}

/// Result of splicing one file's text into the layout, before any I/O.
#[derive(Debug)]
pub struct MergedDocument {
    pub text: String,
    pub source_had_region: bool,
    pub spliced: bool,
}

/// Holds the shared layout text and the compiled placeholder pattern for the
/// duration of one run.
pub struct Merger {
    layout: String,
    placeholder: Regex,
}

impl Merger {
    pub fn new(layout: Layout) -> Self {
        let placeholder = Regex::new(PLACEHOLDER_PATTERN).expect("placeholder pattern compiles");
        Merger {
            layout: layout.text,
            placeholder,
        }
    }

    /// Whether the layout has a region to splice into. A layout without one
    /// passes through unchanged and every file's content is dropped.
    pub fn layout_has_placeholder(&self) -> bool {
        self.placeholder.is_match(&self.layout)
    }

    /// First `<main…>…</main>` region in `text`, wrapping tags included.
    fn extract_region<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.placeholder.find(text).map(|m| m.as_str())
    }

    /// Splice one file's text into the layout.
    pub fn merge_content(&self, file_text: &str) -> MergedDocument {
        let (region, source_had_region) = match self.extract_region(file_text) {
            Some(region) => (region.to_string(), true),
            None => (format!("<main>{file_text}</main>"), false),
        };

        match self.placeholder.replace(&self.layout, NoExpand(&region)) {
            Cow::Owned(text) => MergedDocument {
                text,
                source_had_region,
                spliced: true,
            },
            // No placeholder in the layout: pass it through unchanged.
            Cow::Borrowed(text) => MergedDocument {
                text: text.to_string(),
                source_had_region,
                spliced: false,
            },
        }
    }

    /// Merge a single source file and write the result under `output_root`.
    ///
    /// An unreadable source is merged as empty content and recorded in the
    /// outcome; only directory-creation and write errors fail the file.
    pub fn merge_file(
        &self,
        source: &Path,
        input_root: &Path,
        output_root: &Path,
    ) -> Result<MergeOutcome, MergeError> {
        let (content, source_read_failed) = match fs::read_to_string(source) {
            Ok(text) => (text, false),
            Err(_) => (String::new(), true),
        };

        let merged = self.merge_content(&content);

        let relative = source
            .strip_prefix(input_root)
            .unwrap_or(source)
            .to_path_buf();
        let destination = output_root.join(&relative);

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).map_err(|source| MergeError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        fs::write(&destination, &merged.text).map_err(|source| MergeError::WriteFile {
            path: destination.clone(),
            source,
        })?;

        Ok(MergeOutcome {
            source: source.to_path_buf(),
            relative,
            destination,
            source_read_failed,
            source_had_region: merged.source_had_region,
            spliced: merged.spliced,
        })
    }

    /// Merge every collected file in order. A failed file is recorded and
    /// the loop continues; one bad file never aborts the batch.
    pub fn merge_all(
        &self,
        files: &[PathBuf],
        input_root: &Path,
        output_root: &Path,
    ) -> MergeReport {
        let mut report = MergeReport::default();

        for source in files {
            match self.merge_file(source, input_root, output_root) {
                Ok(outcome) => report.merged.push(outcome),
                Err(error) => report.failures.push(MergeFailure {
                    source: source.clone(),
                    error,
                }),
            }
        }

        report
    }
}

//! CLI output formatting for a completed run.
//!
//! One header line per file — positional index, relative path, `→`,
//! destination — with indented context lines for anything the merge had to
//! recover from. Skipped files and a summary line follow:
//!
//! ```text
//! 001 index.html → dist/index.html
//! 002 blog/post.html → dist/blog/post.html
//!     Source unreadable (merged with empty content)
//! Skipped
//! 001 blog/broken.html: failed to write output file dist/blog/broken.html: ...
//! Merged 2 files (1 skipped)
//! ```
//!
//! Format functions are pure (return `Vec<String>`, no I/O); `print_*`
//! wrappers write to stdout.

use crate::merge::MergeReport;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Format the per-file lines and summary for a finished merge run.
pub fn format_run_output(report: &MergeReport) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, outcome) in report.merged.iter().enumerate() {
        lines.push(format!(
            "{} {} \u{2192} {}",
            format_index(i + 1),
            outcome.relative.display(),
            outcome.destination.display()
        ));
        if outcome.source_read_failed {
            lines.push("    Source unreadable (merged with empty content)".to_string());
        }
        if !outcome.source_had_region && !outcome.source_read_failed {
            lines.push("    No <main> region (whole file wrapped)".to_string());
        }
        if !outcome.spliced {
            lines.push("    Content dropped (layout has no <main> region)".to_string());
        }
    }

    if !report.failures.is_empty() {
        lines.push("Skipped".to_string());
        for (i, failure) in report.failures.iter().enumerate() {
            lines.push(format!(
                "{} {}: {}",
                format_index(i + 1),
                failure.source.display(),
                failure.error
            ));
        }
    }

    let mut summary = format!(
        "Merged {} file{}",
        report.merged.len(),
        if report.merged.len() == 1 { "" } else { "s" }
    );
    if !report.failures.is_empty() {
        summary.push_str(&format!(" ({} skipped)", report.failures.len()));
    }
    lines.push(summary);

    lines
}

/// Print run output to stdout.
pub fn print_run_output(report: &MergeReport) {
    for line in format_run_output(report) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::{MergeError, MergeFailure, MergeOutcome};
    use std::path::PathBuf;

    fn outcome(relative: &str) -> MergeOutcome {
        MergeOutcome {
            source: PathBuf::from("site").join(relative),
            relative: PathBuf::from(relative),
            destination: PathBuf::from("dist").join(relative),
            source_read_failed: false,
            source_had_region: true,
            spliced: true,
        }
    }

    #[test]
    fn format_index_pads_to_three_digits() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn clean_run_lists_files_and_summary() {
        let report = MergeReport {
            merged: vec![outcome("index.html"), outcome("blog/post.html")],
            failures: vec![],
        };
        let lines = format_run_output(&report);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("001 index.html \u{2192} "));
        assert!(lines[1].starts_with("002 blog/post.html \u{2192} "));
        assert_eq!(lines[2], "Merged 2 files");
    }

    #[test]
    fn single_file_summary_is_singular() {
        let report = MergeReport {
            merged: vec![outcome("index.html")],
            failures: vec![],
        };
        let lines = format_run_output(&report);
        assert_eq!(lines.last().unwrap(), "Merged 1 file");
    }

    #[test]
    fn unreadable_source_gets_context_line() {
        let mut o = outcome("ghost.html");
        o.source_read_failed = true;
        o.source_had_region = false;
        let report = MergeReport {
            merged: vec![o],
            failures: vec![],
        };
        let lines = format_run_output(&report);
        assert_eq!(
            lines[1],
            "    Source unreadable (merged with empty content)"
        );
    }

    #[test]
    fn wrapped_file_gets_context_line() {
        let mut o = outcome("plain.html");
        o.source_had_region = false;
        let report = MergeReport {
            merged: vec![o],
            failures: vec![],
        };
        let lines = format_run_output(&report);
        assert_eq!(lines[1], "    No <main> region (whole file wrapped)");
    }

    #[test]
    fn dropped_content_gets_context_line() {
        let mut o = outcome("page.html");
        o.spliced = false;
        let report = MergeReport {
            merged: vec![o],
            failures: vec![],
        };
        let lines = format_run_output(&report);
        assert_eq!(
            lines[1],
            "    Content dropped (layout has no <main> region)"
        );
    }

    #[test]
    fn failures_listed_under_skipped_section() {
        let report = MergeReport {
            merged: vec![outcome("good.html")],
            failures: vec![MergeFailure {
                source: PathBuf::from("site/bad.html"),
                error: MergeError::WriteFile {
                    path: PathBuf::from("dist/bad.html"),
                    source: std::io::Error::other("disk full"),
                },
            }],
        };
        let lines = format_run_output(&report);
        assert!(lines.contains(&"Skipped".to_string()));
        assert!(lines.iter().any(|l| l.contains("bad.html") && l.contains("disk full")));
        assert_eq!(lines.last().unwrap(), "Merged 1 file (1 skipped)");
    }
}

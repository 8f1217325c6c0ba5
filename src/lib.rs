//! # remain
//!
//! A single-pass batch tool that wraps `.html` files in a common layout.
//! The layout carries one `<main>…</main>` placeholder region; each content
//! file's own `<main>` region (or its entire text, when it has none) is
//! spliced into a copy of the layout, and the merged document is written
//! under an output root mirroring the input's relative path structure.
//!
//! # Architecture: Three-Stage Pipeline
//!
//! ```text
//! 1. Load      _layout.html  →  Layout          (template text in memory)
//! 2. Collect   input/        →  Vec<PathBuf>    (recursive .html discovery)
//! 3. Merge     files+layout  →  output/         (extract, splice, write)
//! ```
//!
//! The stages are independent functions so each can be unit-tested without
//! spawning the binary; `main.rs` is only flag parsing and wiring.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`layout`] | Stage 1 — reads the layout template, provides the built-in fallback |
//! | [`collect`] | Stage 2 — recursive discovery of `.html` files under the input root |
//! | [`merge`] | Stage 3 — placeholder extraction and splice, output writing |
//! | [`output`] | CLI report formatting for a completed run |
//!
//! # Design Decisions
//!
//! ## Best-Effort Completion
//!
//! No error is fatal to the batch. An unreadable layout falls back to a
//! built-in template (unless the caller opts into strict mode), a traversal
//! error truncates collection to whatever was found, and a per-file read or
//! write failure skips that one file. Every recovery is surfaced as a report
//! line; the process still exits successfully.
//!
//! ## Verbatim Region Splicing
//!
//! When a content file carries its own `<main>` region, that region is
//! spliced into the layout verbatim, wrapping tags and attributes included.
//! A file without a region is wrapped in a fresh bare `<main>` pair first.
//! This keeps merging idempotent: re-running the tool over already-merged
//! output re-extracts the same region and produces byte-identical files.
//!
//! ## Relative-Path Mirroring
//!
//! Output paths are `output_root/relative_path`, where the relative path is
//! the collected path with the input-root prefix stripped. An absolute input
//! root is never replanted underneath the output root.

pub mod collect;
pub mod layout;
pub mod merge;
pub mod output;

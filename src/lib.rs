//! # Codepack
//!
//! `codepack` packs a directory tree into a single Markdown document: an indented
//! structure diagram followed by every visible file's content in a fenced block labeled
//! with its relative path and extension.
//!
//! Ignore rules come from the first of `.gitignore`, `.codepackignore` or a built-in
//! default list, and are matched as shell globs against each entry's relative path and
//! name. Files whose first 1024 bytes are not UTF-8 are treated as binary and left out
//! (or kept with a placeholder, see [`BinaryPolicy`]).
//!
//! The directory is walked once; the structure and content sections are both rendered
//! from the resulting [`Snapshot`], so they always list the same files.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate (on by default).
//!
//! # Example
//!
//! ```no_run
//! use codepack::{CodepackBuilder, codepack, output};
//!
//! let options = CodepackBuilder::new(".")
//!     .ignore_patterns(vec!["*.lock".into()])
//!     .build();
//!
//! let snapshot = codepack(options).expect("Failed to scan directory");
//! let path = output::default_output_path(&snapshot.root.name, output::OutputFormat::Markdown);
//! output::write_document(&snapshot, output::OutputFormat::Markdown, &path)
//!     .expect("Failed to write document");
//! ```

mod engine;
mod error;
mod options;
pub mod output;
pub mod patterns;
mod tree;
mod types;

pub use engine::{codepack, source_name};
pub use error::CodepackError;
pub use options::{BINARY_SNIFF_LEN, BinaryDetection, BinaryPolicy, CodepackBuilder, CodepackOptions};
pub use patterns::{IgnoreMatcher, IgnoreRuleSet, RuleSource};
pub use types::{DirectoryEntry, DirectoryNode, EntryKind, FileEntry, Snapshot, display_relative};

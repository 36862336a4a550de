//! Output formatting for codepack snapshots.
//!
//! Markdown is the packed document: the structure section, a blank separator, then one
//! fenced block per file. JSON dumps the [`Snapshot`] itself.

use crate::tree::render_structure;
use crate::types::display_relative;
use crate::{CodepackError, Snapshot};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

impl OutputFormat {
    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Json => "json",
        }
    }
}

/// Formats the snapshot into a string.
pub fn format_snapshot(snapshot: &Snapshot, format: OutputFormat) -> Result<String, CodepackError> {
    match format {
        OutputFormat::Markdown => Ok(format_markdown(snapshot)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(snapshot)?),
    }
}

/// Writes the formatted snapshot to `path`, replacing any existing file.
pub fn write_document(
    snapshot: &Snapshot,
    format: OutputFormat,
    path: impl AsRef<Path>,
) -> Result<(), CodepackError> {
    let content = format_snapshot(snapshot, format)?;
    fs::write(&path, content).map_err(|e| CodepackError::io(path.as_ref(), e))?;
    Ok(())
}

/// `<root-name>.<ext>`, relative to the current directory.
pub fn default_output_path(root_name: &str, format: OutputFormat) -> PathBuf {
    PathBuf::from(format!("{}.{}", root_name, format.extension()))
}

/// The fence tag for a file: its extension lowercased, or `txt` when it has none.
pub fn language_tag(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .filter(|ext| !ext.is_empty())
        .unwrap_or_else(|| "txt".to_string())
}

// ----------------------- Internal formatting -----------------------

fn format_markdown(snapshot: &Snapshot) -> String {
    let mut lines = render_structure(&snapshot.root);
    lines.push(String::new());

    for file in snapshot.files() {
        lines.push(format!("\n# {}", display_relative(&file.relative)));
        lines.push(format!("```{}", language_tag(&file.relative)));
        lines.push(file.content.clone());
        lines.push("```".to_string());
    }
    lines.join("\n")
}

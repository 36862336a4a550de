//! Internal module for rendering the structure section from a snapshot tree.

use crate::types::DirectoryNode;

const INDENT: &str = "    ";

/// Renders the structure section, one line per visible directory and file.
///
/// Files of a directory at depth `d` are indented `d + 1` levels with `├── `; each
/// subdirectory is indented `d` levels with `└── ` and followed by its own contents.
pub(crate) fn render_structure(root: &DirectoryNode) -> Vec<String> {
    let mut lines = vec!["# Project Structure".to_string(), format!("/{}", root.name)];
    render_contents(root, 0, &mut lines);
    lines
}

fn render_contents(dir: &DirectoryNode, depth: usize, lines: &mut Vec<String>) {
    let file_indent = INDENT.repeat(depth + 1);
    for file in &dir.files {
        lines.push(format!("{}├── {}", file_indent, file.name()));
    }
    let dir_indent = INDENT.repeat(depth);
    for sub in &dir.directories {
        lines.push(format!("{}└── {}", dir_indent, sub.name));
        render_contents(sub, depth + 1, lines);
    }
}

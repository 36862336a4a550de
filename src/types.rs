use crate::patterns::IgnoreRuleSet;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// What a walked entry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    Directory,
    File { is_binary: bool },
}

/// One filesystem node that survived the ignore rules during traversal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryEntry {
    /// The full path to the entry.
    pub path: PathBuf,
    /// The path below the traversal root.
    pub relative: PathBuf,
    /// Distance from the root; children of the root have depth 1.
    pub depth: usize,
    pub kind: EntryKind,
}

/// A single file entry with its path and content.
#[derive(Debug, Serialize, Deserialize)]
pub struct FileEntry {
    /// The full path to the file.
    pub path: PathBuf,
    /// The path below the traversal root.
    pub relative: PathBuf,
    /// The content of the file as a string.
    ///
    /// Binary files kept by [`BinaryPolicy::Placeholder`](crate::BinaryPolicy::Placeholder)
    /// hold `[Binary file: <name>]` instead.
    pub content: String,
    /// Whether the file was detected as binary.
    pub is_binary: bool,
}

impl FileEntry {
    pub fn name(&self) -> String {
        file_name(&self.relative)
    }
}

/// A visible directory with its visible files and subdirectories, each sorted by name.
#[derive(Debug, Serialize, Deserialize)]
pub struct DirectoryNode {
    pub name: String,
    pub relative: PathBuf,
    pub files: Vec<FileEntry>,
    pub directories: Vec<DirectoryNode>,
}

impl DirectoryNode {
    pub(crate) fn new(name: String, relative: PathBuf) -> Self {
        Self {
            name,
            relative,
            files: Vec::new(),
            directories: Vec::new(),
        }
    }

    /// Files in document order: a directory's own files, then each subdirectory in turn.
    pub fn files(&self) -> Vec<&FileEntry> {
        let mut out = Vec::new();
        self.collect_files(&mut out);
        out
    }

    fn collect_files<'a>(&'a self, out: &mut Vec<&'a FileEntry>) {
        out.extend(self.files.iter());
        for dir in &self.directories {
            dir.collect_files(out);
        }
    }
}

/// The result of one filtered traversal.
///
/// Both the structure section and the content section are rendered from this value.
#[derive(Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub root: DirectoryNode,
    /// The rules that filtered this snapshot.
    pub rules: IgnoreRuleSet,
}

impl Snapshot {
    pub fn files(&self) -> Vec<&FileEntry> {
        self.root.files()
    }
}

/// Renders a relative path with `/` separators regardless of platform.
pub fn display_relative(relative: &Path) -> String {
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

use crate::error::CodepackError;
use crate::options::{BINARY_SNIFF_LEN, BinaryDetection, BinaryPolicy, CodepackOptions};
use crate::patterns::{IgnoreMatcher, IgnoreRuleSet};
use crate::types::{DirectoryEntry, DirectoryNode, EntryKind, FileEntry, Snapshot, file_name};
use ignore::WalkBuilder;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
struct Walker {
    inner: ignore::Walk,
    root: PathBuf,
    detection: BinaryDetection,
}
impl Walker {
    /// `exclude` is a canonical path left out of the walk (the output document).
    fn new(options: &CodepackOptions, matcher: IgnoreMatcher, exclude: Option<PathBuf>) -> Self {
        let mut builder = WalkBuilder::new(&options.root);
        builder
            .standard_filters(false)
            .max_depth(options.max_depth)
            .follow_links(options.follow_links)
            .sort_by_file_name(|a, b| a.cmp(b));
        let root = options.root.clone();
        builder.filter_entry(move |entry| {
            if entry.depth() == 0 {
                return true;
            }
            if let Some(excluded) = &exclude {
                if excluded.file_name() == Some(entry.file_name())
                    && fs::canonicalize(entry.path()).is_ok_and(|p| &p == excluded)
                {
                    return false;
                }
            }
            let relative = entry.path().strip_prefix(&root).unwrap_or(entry.path());
            !matcher.is_ignored(relative)
        });
        Self {
            inner: builder.build(),
            root: options.root.clone(),
            detection: options.binary_detection,
        }
    }
    /// Ignored directories never reach this point, so their subtrees are not read.
    fn collect_entries(self) -> Result<Vec<DirectoryEntry>, CodepackError> {
        let mut entries = Vec::new();
        for result in self.inner {
            let entry = result.map_err(|e| CodepackError::Walk(e.to_string()))?;
            if entry.depth() == 0 {
                continue;
            }
            let path = entry.path().to_path_buf();
            let kind = match entry.file_type() {
                Some(ft) if ft.is_dir() => EntryKind::Directory,
                // Without follow_links a symlink reports its own type and is skipped here.
                Some(ft) if ft.is_file() => EntryKind::File {
                    is_binary: sniff_binary(&path, self.detection)?,
                },
                _ => {
                    #[cfg(feature = "logging")]
                    tracing::debug!("Skipping special entry: {}", path.display());
                    continue;
                }
            };
            let relative = path
                .strip_prefix(&self.root)
                .map(Path::to_path_buf)
                .unwrap_or_else(|_| path.clone());
            entries.push(DirectoryEntry {
                path,
                relative,
                depth: entry.depth(),
                kind,
            });
        }
        Ok(entries)
    }
}
fn sniff_binary(path: &Path, detection: BinaryDetection) -> Result<bool, CodepackError> {
    if detection == BinaryDetection::None {
        return Ok(false);
    }
    let file = File::open(path).map_err(|e| CodepackError::io(path, e))?;
    let mut prefix = Vec::with_capacity(BINARY_SNIFF_LEN);
    file.take(BINARY_SNIFF_LEN as u64)
        .read_to_end(&mut prefix)
        .map_err(|e| CodepackError::io(path, e))?;
    let is_binary = detection.is_binary(&prefix);
    if is_binary {
        #[cfg(feature = "logging")]
        tracing::debug!("Binary file detected: {}", path.display());
    }
    Ok(is_binary)
}
fn read_text(path: &Path) -> Result<String, CodepackError> {
    let bytes = fs::read(path).map_err(|e| CodepackError::io(path, e))?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    })
}
/// Pops finished directories into their parents until `depth` entries remain.
fn unwind(stack: &mut Vec<DirectoryNode>, depth: usize) {
    while stack.len() > depth.max(1) {
        if let Some(done) = stack.pop() {
            if let Some(parent) = stack.last_mut() {
                parent.directories.push(done);
            }
        }
    }
}
/// Builds the nested tree from a sorted pre-order walk.
fn assemble(
    root_name: String,
    entries: Vec<DirectoryEntry>,
    policy: BinaryPolicy,
) -> Result<DirectoryNode, CodepackError> {
    let mut stack = vec![DirectoryNode::new(root_name, PathBuf::new())];
    for entry in entries {
        unwind(&mut stack, entry.depth);
        match entry.kind {
            EntryKind::Directory => {
                stack.push(DirectoryNode::new(
                    file_name(&entry.relative),
                    entry.relative,
                ));
            }
            EntryKind::File { is_binary } => {
                let content = if !is_binary {
                    read_text(&entry.path)?
                } else {
                    match policy {
                        BinaryPolicy::Exclude => continue,
                        BinaryPolicy::Placeholder => {
                            format!("[Binary file: {}]", file_name(&entry.path))
                        }
                    }
                };
                if let Some(parent) = stack.last_mut() {
                    parent.files.push(FileEntry {
                        path: entry.path,
                        relative: entry.relative,
                        content,
                        is_binary,
                    });
                }
            }
        }
    }
    unwind(&mut stack, 1);
    stack
        .pop()
        .ok_or_else(|| CodepackError::Walk("traversal produced no root".to_string()))
}
/// Name shown for the root directory: the last component of its canonical path, or
/// `root` for a filesystem root.
///
/// # Errors
///
/// [`CodepackError::InvalidSourceDirectory`] when `root` is not a directory.
pub fn source_name(root: &Path) -> Result<String, CodepackError> {
    if !root.is_dir() {
        return Err(CodepackError::InvalidSourceDirectory(root.to_path_buf()));
    }
    let canonical = fs::canonicalize(root).map_err(|e| CodepackError::io(root, e))?;
    Ok(canonical
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "root".to_string()))
}
/// Walks `options.root` once and returns the filtered tree with file contents.
///
/// # Errors
///
/// [`CodepackError::InvalidSourceDirectory`] when the root is not a directory; any
/// walk or read failure after that aborts the run.
pub fn codepack(options: CodepackOptions) -> Result<Snapshot, CodepackError> {
    if !options.root.is_dir() {
        return Err(CodepackError::InvalidSourceDirectory(options.root));
    }
    #[cfg(feature = "logging")]
    tracing::debug!("Starting codepack with root: {}", options.root.display());
    let rules = if options.use_ignore_files {
        IgnoreRuleSet::load(&options.root)
    } else {
        IgnoreRuleSet::defaults()
    }
    .with_patterns(options.extra_ignore_patterns.iter().cloned());
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Using {} ignore patterns from {:?}",
        rules.patterns.len(),
        rules.source
    );
    let matcher = rules.matcher()?;
    let exclude = options
        .exclude_path
        .as_ref()
        .and_then(|p| fs::canonicalize(p).ok());
    let entries = Walker::new(&options, matcher, exclude).collect_entries()?;
    let root = assemble(source_name(&options.root)?, entries, options.binary_policy)?;
    Ok(Snapshot { root, rules })
}

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Number of leading bytes inspected when classifying a file.
pub const BINARY_SNIFF_LEN: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BinaryDetection {
    /// Binary when the prefix is not valid UTF-8.
    #[default]
    Utf8,
    /// `content_inspector` heuristic on the prefix.
    Accurate,
    None,
}
impl BinaryDetection {
    /// Classifies a file from its first [`BINARY_SNIFF_LEN`] bytes.
    ///
    /// A UTF-8 sequence cut short at the end of `prefix` does not count as a failure.
    pub fn is_binary(&self, prefix: &[u8]) -> bool {
        match self {
            BinaryDetection::Utf8 => match std::str::from_utf8(prefix) {
                Ok(_) => false,
                Err(e) => e.error_len().is_some(),
            },
            BinaryDetection::Accurate => content_inspector::inspect(prefix).is_binary(),
            BinaryDetection::None => false,
        }
    }
}

/// What happens to files classified as binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BinaryPolicy {
    /// Left out of both the structure and the content section.
    #[default]
    Exclude,
    /// Kept, with `[Binary file: <name>]` in place of the content.
    Placeholder,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodepackOptions {
    pub root: PathBuf,
    /// Read `.gitignore` / `.codepackignore`; when false only the defaults apply.
    pub use_ignore_files: bool,
    pub extra_ignore_patterns: Vec<String>,
    pub binary_detection: BinaryDetection,
    pub binary_policy: BinaryPolicy,
    pub max_depth: Option<usize>,
    pub follow_links: bool,
    /// A file never packed, typically the document being written.
    pub exclude_path: Option<PathBuf>,
}
impl Default for CodepackOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            use_ignore_files: true,
            extra_ignore_patterns: Vec::new(),
            binary_detection: BinaryDetection::Utf8,
            binary_policy: BinaryPolicy::Exclude,
            max_depth: None,
            follow_links: false,
            exclude_path: None,
        }
    }
}
#[derive(Debug, Default)]
pub struct CodepackBuilder {
    options: CodepackOptions,
}
impl CodepackBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: CodepackOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn use_ignore_files(mut self, yes: bool) -> Self {
        self.options.use_ignore_files = yes;
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.extra_ignore_patterns = patterns;
        self
    }
    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.options.binary_detection = method;
        self
    }
    pub fn binary_policy(mut self, policy: BinaryPolicy) -> Self {
        self.options.binary_policy = policy;
        self
    }
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.options.max_depth = Some(depth);
        self
    }
    pub fn no_limit_depth(mut self) -> Self {
        self.options.max_depth = None;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn exclude_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.exclude_path = Some(path.into());
        self
    }
    pub fn build(self) -> CodepackOptions {
        self.options
    }
}

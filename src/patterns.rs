//! Ignore rules: where they come from and how they are matched.
//!
//! Exactly one source supplies the rules for a run: `.gitignore` at the root, otherwise
//! `.codepackignore`, otherwise [`DEFAULT_IGNORE_PATTERNS`]. Matching is plain shell-glob
//! matching against the root-relative path and against the entry name. There is no
//! negation and no precedence: any match ignores the entry.

use crate::error::CodepackError;
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Ignore files consulted at the traversal root, in priority order.
pub const IGNORE_FILE_NAMES: [&str; 2] = [".gitignore", ".codepackignore"];

/// Rules used when the root carries no ignore file.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    // version control
    ".git",
    ".svn",
    ".hg",
    ".bzr",
    "CVS",
    // editors
    "*.swp",
    "*.swo",
    "*~",
    ".idea",
    ".vscode",
    // caches
    "__pycache__",
    "*.pyc",
    ".mypy_cache",
    ".pytest_cache",
    ".ruff_cache",
    ".cache",
    // virtual environments
    "venv",
    ".venv",
    "env",
    "virtualenv",
    // OS artifacts
    ".DS_Store",
    "Thumbs.db",
    "desktop.ini",
    // build output
    "build",
    "dist",
    "target",
    "*.egg-info",
    // dependencies
    "node_modules",
    "bower_components",
    // logs, backups, temp files
    "*.log",
    "*.bak",
    "*.tmp",
    "*.temp",
];

/// Where an [`IgnoreRuleSet`] was loaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleSource {
    GitIgnore(PathBuf),
    CodepackIgnore(PathBuf),
    Defaults,
    Custom,
}

/// Ordered glob patterns for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoreRuleSet {
    pub source: RuleSource,
    pub patterns: Vec<String>,
}

impl IgnoreRuleSet {
    /// Loads the rules that apply to `root`.
    ///
    /// A missing or unreadable ignore file is not an error; the next source is tried.
    pub fn load(root: &Path) -> Self {
        for name in IGNORE_FILE_NAMES {
            let path = root.join(name);
            match fs::read_to_string(&path) {
                Ok(text) => {
                    let patterns = parse_ignore_lines(&text)
                        .into_iter()
                        .filter(|pattern| compile(pattern).is_ok())
                        .collect();
                    let source = if name == IGNORE_FILE_NAMES[0] {
                        RuleSource::GitIgnore(path)
                    } else {
                        RuleSource::CodepackIgnore(path)
                    };
                    return Self { source, patterns };
                }
                Err(_e) => {
                    #[cfg(feature = "logging")]
                    tracing::debug!("No usable ignore file at {}: {}", path.display(), _e);
                }
            }
        }
        Self::defaults()
    }

    pub fn defaults() -> Self {
        Self {
            source: RuleSource::Defaults,
            patterns: DEFAULT_IGNORE_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }

    pub fn custom(patterns: Vec<String>) -> Self {
        Self {
            source: RuleSource::Custom,
            patterns,
        }
    }

    /// Appends patterns after the loaded ones.
    pub fn with_patterns(mut self, extra: impl IntoIterator<Item = String>) -> Self {
        self.patterns.extend(extra);
        self
    }

    /// Compiles the rules.
    ///
    /// # Errors
    ///
    /// Returns [`CodepackError::InvalidPattern`] for the first pattern that is not a
    /// valid glob.
    pub fn matcher(&self) -> Result<IgnoreMatcher, CodepackError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.patterns {
            if let Some(glob) = compile(pattern)? {
                builder.add(glob);
            }
        }
        let set = builder
            .build()
            .map_err(|e| CodepackError::GlobSet(e.to_string()))?;
        Ok(IgnoreMatcher { set })
    }
}

/// Splits ignore-file text into patterns: one per non-blank line, `#` lines skipped.
pub fn parse_ignore_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// `build/` and `/build` both mean the entry named `build`.
fn compile(pattern: &str) -> Result<Option<Glob>, CodepackError> {
    let trimmed = pattern.strip_suffix('/').unwrap_or(pattern);
    let trimmed = trimmed.strip_prefix('/').unwrap_or(trimmed);
    if trimmed.is_empty() {
        return Ok(None);
    }
    match Glob::new(trimmed) {
        Ok(glob) => Ok(Some(glob)),
        Err(e) => {
            #[cfg(feature = "logging")]
            tracing::warn!("Invalid ignore pattern '{}': {}", pattern, e);
            Err(CodepackError::InvalidPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })
        }
    }
}

/// Compiled [`IgnoreRuleSet`].
#[derive(Debug, Clone)]
pub struct IgnoreMatcher {
    set: GlobSet,
}

impl IgnoreMatcher {
    /// `relative` is the path below the traversal root.
    pub fn is_ignored(&self, relative: &Path) -> bool {
        if self.set.is_match(relative) {
            return true;
        }
        relative
            .file_name()
            .is_some_and(|name| self.set.is_match(Path::new(name)))
    }
}

use codepack::output::language_tag;
use codepack::patterns::{DEFAULT_IGNORE_PATTERNS, parse_ignore_lines};
use codepack::{
    BINARY_SNIFF_LEN, BinaryDetection, CodepackError, IgnoreRuleSet, RuleSource, display_relative,
};
use std::fs;
use std::path::Path;
use tempfile::tempdir;
#[test]
fn test_parse_ignore_lines_skips_blanks_and_comments() {
    let text = "# build output\n*.log\n\n   \nbuild/\n  # indented comment\n  temp?.txt  \n";
    assert_eq!(
        parse_ignore_lines(text),
        vec!["*.log".to_string(), "build/".to_string(), "temp?.txt".to_string()]
    );
}
#[test]
fn test_load_prefers_gitignore() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".gitignore"), "*.log\n").unwrap();
    fs::write(dir.path().join(".codepackignore"), "*.tmp\n").unwrap();
    let rules = IgnoreRuleSet::load(dir.path());
    assert_eq!(rules.source, RuleSource::GitIgnore(dir.path().join(".gitignore")));
    assert_eq!(rules.patterns, vec!["*.log".to_string()]);
}
#[test]
fn test_load_falls_back_to_codepackignore() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".codepackignore"), "*.tmp\nvendor\n").unwrap();
    let rules = IgnoreRuleSet::load(dir.path());
    assert_eq!(
        rules.source,
        RuleSource::CodepackIgnore(dir.path().join(".codepackignore"))
    );
    assert_eq!(rules.patterns, vec!["*.tmp".to_string(), "vendor".to_string()]);
}
#[test]
fn test_load_falls_back_to_defaults() {
    let dir = tempdir().unwrap();
    let rules = IgnoreRuleSet::load(dir.path());
    assert_eq!(rules.source, RuleSource::Defaults);
    assert_eq!(rules.patterns.len(), DEFAULT_IGNORE_PATTERNS.len());
    assert!(rules.patterns.iter().any(|p| p == ".git"));
    assert!(rules.patterns.iter().any(|p| p == "node_modules"));
}
#[test]
fn test_load_unreadable_gitignore_falls_through() {
    let dir = tempdir().unwrap();
    // A directory named .gitignore cannot be read as a file.
    fs::create_dir(dir.path().join(".gitignore")).unwrap();
    fs::write(dir.path().join(".codepackignore"), "*.tmp\n").unwrap();
    let rules = IgnoreRuleSet::load(dir.path());
    assert!(matches!(rules.source, RuleSource::CodepackIgnore(_)));
}
#[test]
fn test_load_drops_invalid_patterns() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join(".gitignore"), "[\n*.tmp\n").unwrap();
    let rules = IgnoreRuleSet::load(dir.path());
    assert_eq!(rules.patterns, vec!["*.tmp".to_string()]);
}
#[test]
fn test_matcher_checks_relative_path_and_name() {
    let rules = IgnoreRuleSet::custom(vec![
        "*.log".into(),
        "build/".into(),
        "docs/*.md".into(),
        "data?.csv".into(),
        "[ab].txt".into(),
    ]);
    let matcher = rules.matcher().unwrap();
    assert!(matcher.is_ignored(Path::new("app.log")));
    assert!(matcher.is_ignored(Path::new("nested/deep/app.log")));
    assert!(matcher.is_ignored(Path::new("build")));
    assert!(matcher.is_ignored(Path::new("src/build")));
    assert!(matcher.is_ignored(Path::new("docs/intro.md")));
    assert!(matcher.is_ignored(Path::new("data1.csv")));
    assert!(matcher.is_ignored(Path::new("x/a.txt")));
    assert!(!matcher.is_ignored(Path::new("README.md")));
    assert!(!matcher.is_ignored(Path::new("data12.csv")));
    assert!(!matcher.is_ignored(Path::new("c.txt")));
    assert!(!matcher.is_ignored(Path::new("builder")));
}
#[test]
fn test_matcher_has_no_negation() {
    let rules = IgnoreRuleSet::custom(vec!["*.txt".into(), "!keep.txt".into()]);
    let matcher = rules.matcher().unwrap();
    assert!(matcher.is_ignored(Path::new("keep.txt")));
}
#[test]
fn test_matcher_rejects_invalid_custom_pattern() {
    let rules = IgnoreRuleSet::custom(vec!["[".into()]);
    assert!(rules.matcher().is_err());
}
#[test]
fn test_invalid_pattern_error_names_only_that_pattern() {
    let rules = IgnoreRuleSet::custom(vec!["*.log".into(), "[".into(), "build".into()]);
    match rules.matcher() {
        Err(CodepackError::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "["),
        other => panic!("unexpected result: {:?}", other.map(|_| ())),
    }
    let message = CodepackError::GlobSet("regex too big".into()).to_string();
    assert_eq!(message, "Failed to build glob set: regex too big");
}
#[test]
fn test_binary_detection_utf8() {
    assert!(!BinaryDetection::Utf8.is_binary(b"print(1)\n"));
    assert!(!BinaryDetection::Utf8.is_binary("héllo wörld".as_bytes()));
    assert!(BinaryDetection::Utf8.is_binary(&[0x89, b'P', b'N', b'G', 0xff, 0xfe]));
}
#[test]
fn test_binary_detection_truncated_sequence_is_text() {
    let mut bytes = vec![b'a'; BINARY_SNIFF_LEN - 1];
    bytes.extend_from_slice("é".as_bytes());
    assert!(!BinaryDetection::Utf8.is_binary(&bytes[..BINARY_SNIFF_LEN]));
}
#[test]
fn test_binary_detection_accurate_and_none() {
    assert!(BinaryDetection::Accurate.is_binary(&[0, 1, 2, 3]));
    assert!(!BinaryDetection::Accurate.is_binary(b"fn main() {}"));
    assert!(!BinaryDetection::None.is_binary(&[0xff, 0xfe, 0x00]));
}
#[test]
fn test_language_tag() {
    assert_eq!(language_tag(Path::new("a.py")), "py");
    assert_eq!(language_tag(Path::new("src/Main.RS")), "rs");
    assert_eq!(language_tag(Path::new("archive.tar.gz")), "gz");
    assert_eq!(language_tag(Path::new("Makefile")), "txt");
    assert_eq!(language_tag(Path::new(".gitignore")), "txt");
}
#[test]
fn test_display_relative_uses_forward_slashes() {
    let path = Path::new("src").join("engine").join("mod.rs");
    assert_eq!(display_relative(&path), "src/engine/mod.rs");
}

use super::*;
use crate::intent::PatternOrigin;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_config_with_override() {
    let content = r#"---
patterns:
  affirmative: '\bsí\b'
---

# Notes

Only accept the accented form.
"#;
    let config = Config::parse(content).unwrap();
    assert_eq!(config.patterns.affirmative.as_deref(), Some(r"\bsí\b"));
    assert!(config.patterns.with_invoice.is_none());
    assert!(config.patterns.without_invoice.is_none());
}

#[test]
fn test_parse_empty_frontmatter() {
    let content = "---\n---\n\n# Nothing configured\n";
    let config = Config::parse(content).unwrap();
    assert!(config.patterns.is_empty());
}

#[test]
fn test_parse_missing_frontmatter() {
    let result = Config::parse("# Just a heading\n");
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Failed to extract frontmatter"));
}

#[test]
fn test_parse_rejects_unknown_keys() {
    let content = r#"---
patterns:
  maybe: 'tal vez'
---
"#;
    assert!(Config::parse(content).is_err());
}

#[test]
fn test_parse_rejects_empty_source() {
    let content = r#"---
patterns:
  with_invoice: ''
---
"#;
    let err = Config::parse(content).unwrap_err();
    assert!(err.to_string().contains("patterns.with_invoice"));
}

#[test]
fn test_pattern_set_rejects_invalid_regex() {
    let content = r#"---
patterns:
  without_invoice: '(sin'
---
"#;
    let config = Config::parse(content).unwrap();
    let err = config.pattern_set().unwrap_err();
    assert!(err.to_string().contains("Invalid without-invoice pattern"));
}

#[test]
fn test_pattern_set_applies_overrides() {
    let content = r#"---
patterns:
  with_invoice: '\bfacturado\b'
---
"#;
    let config = Config::parse(content).unwrap();
    let patterns = config.pattern_set().unwrap();

    let with_invoice = patterns.get(Intent::WithInvoice);
    assert_eq!(with_invoice.origin(), PatternOrigin::Config);
    assert!(with_invoice.is_match("Facturado"));
    assert!(!with_invoice.is_match("con factura"));

    assert_eq!(
        patterns.get(Intent::Affirmative).origin(),
        PatternOrigin::Builtin
    );
}

#[test]
fn test_default_config_uses_builtin_patterns() {
    let patterns = Config::default().pattern_set().unwrap();
    assert!(patterns
        .iter()
        .all(|pattern| pattern.origin() == PatternOrigin::Builtin));
}

#[test]
fn test_load_optional_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config::load_optional(&temp_dir.path().join("config.md")).unwrap();
    assert!(config.patterns.is_empty());
}

#[test]
fn test_load_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.md");
    fs::write(&path, "---\npatterns:\n  without_invoice: '\\bnada\\b'\n---\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.patterns.without_invoice.as_deref(), Some(r"\bnada\b"));
}

#[test]
fn test_load_from_missing_file_errors() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("absent.md");

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to read config"));
}

#[test]
fn test_split_frontmatter() {
    let (frontmatter, body) = split_frontmatter("---\na: 1\n---\n# Body\n");
    assert_eq!(frontmatter.as_deref(), Some("\na: 1"));
    assert_eq!(body, "# Body");

    let (frontmatter, body) = split_frontmatter("no delimiters");
    assert!(frontmatter.is_none());
    assert_eq!(body, "no delimiters");
}

#[test]
fn test_config_key_matches_frontmatter_fields() {
    assert_eq!(validation::config_key(Intent::Affirmative), "affirmative");
    assert_eq!(validation::config_key(Intent::WithInvoice), "with_invoice");
    assert_eq!(
        validation::config_key(Intent::WithoutInvoice),
        "without_invoice"
    );
}

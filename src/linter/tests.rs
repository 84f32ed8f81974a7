#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Unit tests for the model linter

use crate::config::WriterConfig;
use crate::linter::{has_errors, lint_model, lint_model_file, LintIssue, LintSeverity};
use crate::loader::{parse_model, ModelFormat};
use std::io::Write;
use tempfile::NamedTempFile;

fn lint_yaml(content: &str) -> Vec<LintIssue> {
    let model = parse_model(content, ModelFormat::Yaml).expect("parse model");
    lint_model(&model, &WriterConfig::default())
}

fn of_kind<'a>(issues: &'a [LintIssue], kind: &str) -> Vec<&'a LintIssue> {
    issues.iter().filter(|i| i.kind == kind).collect()
}

#[test]
fn test_clean_model() {
    let issues = lint_yaml(
        r#"
representors:
  book:
    types: [Book]
    string: [title]
  reviews:
    types: [Review]
collection_routes:
  book: {}
item_routes:
  book:
    form:
      - { name: title, required: true }
nested_collection_routes:
  book-reviews: {}
"#,
    );
    assert!(issues.is_empty(), "unexpected issues: {issues:?}");
}

#[test]
fn test_lint_missing_representor() {
    let issues = lint_yaml(
        r#"
collection_routes:
  books: {}
item_routes:
  book: {}
"#,
    );
    let missing = of_kind(&issues, "missing_representor");
    assert_eq!(missing.len(), 2);
    assert_eq!(missing[0].location, "collection_routes:books");
    assert_eq!(missing[1].location, "item_routes:book");
    assert_eq!(missing[0].severity, LintSeverity::Warning);
    assert!(missing[0].suggestion.is_some());
}

#[test]
fn test_lint_missing_types() {
    let issues = lint_yaml(
        r#"
representors:
  book:
    string: [title]
"#,
    );
    let missing = of_kind(&issues, "missing_types");
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].location, "representor:book");
}

#[test]
fn test_lint_orphan_nested_route() {
    let issues = lint_yaml(
        r#"
representors:
  book:
    types: [Book]
  reviews:
    types: [Review]
item_routes:
  book: {}
nested_collection_routes:
  otherbook-reviews: {}
  book-comments: {}
"#,
    );
    let orphans = of_kind(&issues, "orphan_nested_route");
    let locations: Vec<_> = orphans.iter().map(|i| i.location.as_str()).collect();
    assert_eq!(
        locations,
        vec![
            "nested_collection_routes:otherbook-reviews",
            "nested_collection_routes:book-comments",
        ]
    );
}

#[test]
fn test_lint_ambiguous_nested_route() {
    // "a-b-c" is "<a-b>-c" and also "<a>-b-c"
    let issues = lint_yaml(
        r#"
representors:
  a:
    types: [A]
  a-b:
    types: [AB]
  c:
    types: [C]
  b-c:
    types: [BC]
item_routes:
  a: {}
  a-b: {}
nested_collection_routes:
  a-b-c: {}
"#,
    );
    let ambiguous = of_kind(&issues, "ambiguous_nested_route");
    assert_eq!(ambiguous.len(), 1);
    assert!(ambiguous[0].message.contains("'b-c' under 'a', 'c' under 'a-b'"));
    assert!(ambiguous[0].suggestion.is_some());
}

#[test]
fn test_parent_in_both_route_maps_is_not_ambiguous() {
    let issues = lint_yaml(
        r#"
representors:
  book:
    types: [Book]
  reviews:
    types: [Review]
collection_routes:
  book: {}
item_routes:
  book: {}
nested_collection_routes:
  book-reviews: {}
"#,
    );
    assert!(of_kind(&issues, "ambiguous_nested_route").is_empty());
}

#[test]
fn test_lint_duplicate_field_key() {
    let issues = lint_yaml(
        r#"
representors:
  book:
    types: [Book]
    string: [title, isbn]
    string_list: [title]
    nested:
      author:
        types: [Person]
        string: [name, name]
"#,
    );
    let duplicates = of_kind(&issues, "duplicate_field_key");
    assert_eq!(duplicates.len(), 2);
    assert_eq!(duplicates[0].location, "representor:book");
    assert!(duplicates[0].message.contains("string and again as string_list"));
    assert_eq!(duplicates[1].location, "representor:book.author");
    assert!(duplicates[1].message.contains("'name' is declared twice as string"));
    assert!(has_errors(&issues));
}

#[test]
fn test_lint_nested_depth_exceeded() {
    let model = parse_model(
        r#"
representors:
  a:
    types: [A]
    nested:
      b:
        nested:
          c:
            types: [C]
"#,
        ModelFormat::Yaml,
    )
    .unwrap();

    let strict = WriterConfig {
        max_nested_depth: 1,
        ..WriterConfig::default()
    };
    let issues = lint_model(&model, &strict);
    let exceeded = of_kind(&issues, "nested_depth_exceeded");
    assert_eq!(exceeded.len(), 1);
    assert_eq!(exceeded[0].severity, LintSeverity::Error);

    assert!(of_kind(&lint_model(&model, &WriterConfig::default()), "nested_depth_exceeded").is_empty());
}

#[test]
fn test_lint_unknown_form_field() {
    let issues = lint_yaml(
        r#"
representors:
  book:
    types: [Book]
    string: [title]
    related_collections: [reviews]
item_routes:
  book:
    form:
      - { name: title }
      - { name: reviews }
      - { name: titel, required: true }
"#,
    );
    let unknown = of_kind(&issues, "unknown_form_field");
    assert_eq!(unknown.len(), 1);
    assert_eq!(unknown[0].severity, LintSeverity::Info);
    assert!(unknown[0].message.contains("'titel'"));
    assert!(!has_errors(&issues));
}

#[test]
fn test_lint_model_file() {
    let mut temp = NamedTempFile::with_suffix(".yaml").expect("create temp file");
    temp.write_all(b"item_routes:\n  book: {}\n").expect("write model");
    temp.flush().expect("flush");

    let issues = lint_model_file(temp.path(), &WriterConfig::default()).unwrap();
    assert_eq!(of_kind(&issues, "missing_representor").len(), 1);
}

#[test]
fn test_lint_model_file_missing() {
    assert!(lint_model_file("/nonexistent/model.yaml", &WriterConfig::default()).is_err());
}

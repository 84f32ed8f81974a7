#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Unit tests for CLI commands

use super::commands::{build_request, write_document};
use crate::cli::{run_cli, Cli, Commands};
use crate::config::WriterConfig;
use crate::mapper::MapperFormat;
use clap::Parser;
use std::ffi::OsString;
use std::io::Write;
use tempfile::NamedTempFile;

const MODEL: &str = r#"
title:
  default: Bookstore
  es: Librería
representors:
  book:
    types: [Book]
    string: [title]
item_routes:
  book:
    form:
      - { name: title, required: true }
"#;

fn model_file(content: &str) -> NamedTempFile {
    let mut temp = NamedTempFile::with_suffix(".yaml").expect("create temp file");
    temp.write_all(content.as_bytes()).expect("write model");
    temp.flush().expect("flush");
    temp
}

#[test]
fn test_write_command_defaults() {
    let cli = Cli::try_parse_from(["hyperdoc", "write", "--model", "api.yaml"]).unwrap();

    match cli.command {
        Commands::Write {
            model,
            format,
            application_url,
            accept_language,
            pretty,
            output,
        } => {
            assert_eq!(model.to_string_lossy(), "api.yaml");
            assert!(format.is_none());
            assert!(application_url.is_none());
            assert!(accept_language.is_none());
            assert!(!pretty);
            assert!(output.is_none());
        }
        _ => panic!("Expected Write command"),
    }
}

#[test]
fn test_write_command_with_options() {
    let cli = Cli::try_parse_from([
        "hyperdoc",
        "write",
        "--model",
        "api.yaml",
        "--format",
        "hal",
        "--application-url",
        "https://api.example.com",
        "--accept-language",
        "es",
        "--pretty",
        "--output",
        "doc.json",
    ])
    .unwrap();

    match cli.command {
        Commands::Write {
            format,
            application_url,
            accept_language,
            pretty,
            output,
            ..
        } => {
            assert_eq!(format, Some(MapperFormat::Hal));
            assert_eq!(application_url.unwrap().as_str(), "https://api.example.com/");
            assert_eq!(accept_language.as_deref(), Some("es"));
            assert!(pretty);
            assert_eq!(output.unwrap().to_string_lossy(), "doc.json");
        }
        _ => panic!("Expected Write command"),
    }
}

#[test]
fn test_write_command_rejects_bad_values() {
    assert!(Cli::try_parse_from(["hyperdoc", "write", "--model", "a.yaml", "--format", "xml"]).is_err());
    assert!(Cli::try_parse_from([
        "hyperdoc",
        "write",
        "--model",
        "a.yaml",
        "--application-url",
        "not a url"
    ])
    .is_err());
    assert!(Cli::try_parse_from(["hyperdoc", "write"]).is_err());
}

#[test]
fn test_lint_command_with_flags() {
    let cli = Cli::try_parse_from([
        "hyperdoc",
        "lint",
        "--model",
        "api.yaml",
        "--fail-on-error",
        "--errors-only",
    ])
    .unwrap();

    match cli.command {
        Commands::Lint {
            model,
            fail_on_error,
            errors_only,
        } => {
            assert_eq!(model.to_string_lossy(), "api.yaml");
            assert!(fail_on_error);
            assert!(errors_only);
        }
        _ => panic!("Expected Lint command"),
    }
}

#[test]
fn test_build_request() {
    let request = build_request(
        Some("https://api.example.com".parse().unwrap()),
        Some("es, en;q=0.5"),
    )
    .unwrap();
    assert_eq!(request.languages(), vec!["es", "en"]);
    assert!(request.application_url().is_some());

    assert!(build_request(None, Some("bad\nvalue")).is_err());
}

#[test]
fn test_write_document_localized() {
    let model = model_file(MODEL);
    let request = build_request(None, Some("es")).unwrap();

    let json = write_document(
        model.path(),
        MapperFormat::Hydra,
        &request,
        false,
        &WriterConfig::default(),
    )
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["title"], "Librería");
}

#[test]
fn test_write_document_pretty() {
    let model = model_file(MODEL);
    let request = build_request(None, None).unwrap();

    let json = write_document(
        model.path(),
        MapperFormat::Hal,
        &request,
        true,
        &WriterConfig::default(),
    )
    .unwrap();
    assert!(json.contains('\n'));
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["title"], "Bookstore");
}

#[test]
fn test_write_to_output_file() {
    let model = model_file(MODEL);
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("doc.json");

    let args: Vec<OsString> = vec![
        "hyperdoc".into(),
        "write".into(),
        "--model".into(),
        model.path().into(),
        "--format".into(),
        "hal".into(),
        "--output".into(),
        output.clone().into(),
    ];
    let cli = Cli::try_parse_from(args).unwrap();
    run_cli(cli).unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written["resources"]["Book"]["name"], "Book");
}

#[test]
fn test_lint_fail_on_error() {
    let model = model_file(
        "representors:\n  book:\n    types: [Book]\n    string: [title]\n    number: [title]\n",
    );

    let lint = |fail_on_error: bool| {
        let mut args: Vec<OsString> = vec![
            "hyperdoc".into(),
            "lint".into(),
            "--model".into(),
            model.path().into(),
        ];
        if fail_on_error {
            args.push("--fail-on-error".into());
        }
        run_cli(Cli::try_parse_from(args).unwrap())
    };

    assert!(lint(false).is_ok());
    assert!(lint(true).is_err());
}

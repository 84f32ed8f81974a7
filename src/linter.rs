//! # Model Linter Module
//!
//! Checks a [`ResourceModel`] for declarations the writer will silently skip
//! or resolve in a surprising way.
//!
//! ## Checks Performed
//!
//! 1. **Route without representor** - the writer skips the name entirely
//! 2. **Representor without types** - no resource block is written for it
//! 3. **Orphan nested route** - the key associates with no parent
//! 4. **Ambiguous nested route** - the key matches several parents and is written under each
//! 5. **Duplicate field key** - one key declared under several kinds
//! 6. **Nesting depth** - representors nested deeper than the configured limit
//! 7. **Unknown form field** - a form names a field the representor does not declare
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hyperdoc::config::WriterConfig;
//! use hyperdoc::linter::{lint_model_file, print_lint_issues};
//!
//! let issues = lint_model_file("api.yaml", &WriterConfig::default())?;
//! print_lint_issues(&issues);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::config::WriterConfig;
use crate::loader::load_model;
use crate::model::{FieldKind, Form, Representor, ResourceModel};
use crate::writer::fields::item_field_names;
use crate::writer::nested::candidate_parents;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

#[cfg(test)]
mod tests;

/// Severity level for lint issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintSeverity {
    /// Error - The model is inconsistent
    Error,
    /// Warning - Part of the model will not be documented
    Warning,
    /// Info - Likely a typo
    Info,
}

impl std::fmt::Display for LintSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            LintSeverity::Error => "error",
            LintSeverity::Warning => "warning",
            LintSeverity::Info => "info",
        })
    }
}

/// A lint issue found in a resource model
#[derive(Debug, Clone)]
pub struct LintIssue {
    /// Where the issue occurred (e.g., "representor:book", "item_routes:book")
    pub location: String,
    pub severity: LintSeverity,
    /// Type of lint issue (e.g., "missing_representor")
    pub kind: String,
    /// Human-readable description of the problem
    pub message: String,
    /// Optional suggestion for how to fix it
    pub suggestion: Option<String>,
}

impl LintIssue {
    pub fn new(
        location: impl Into<String>,
        severity: LintSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LintIssue {
            location: location.into(),
            severity,
            kind: kind.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Add a suggestion for fixing the issue
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Lint a model file
pub fn lint_model_file(path: impl AsRef<Path>, config: &WriterConfig) -> anyhow::Result<Vec<LintIssue>> {
    let model = load_model(path)?;
    Ok(lint_model(&model, config))
}

/// Lint an in-memory model
#[must_use]
pub fn lint_model(model: &ResourceModel, config: &WriterConfig) -> Vec<LintIssue> {
    let mut issues = Vec::new();

    for (name, representor) in model.representors.iter() {
        lint_representor(&mut issues, name, representor, config);
    }

    for (name, routes) in model.collection_routes.iter() {
        lint_route(&mut issues, model, "collection_routes", name, routes.form());
    }
    for (name, routes) in model.item_routes.iter() {
        lint_route(&mut issues, model, "item_routes", name, routes.form());
    }

    lint_nested_routes(&mut issues, model);

    debug!(
        issues = issues.len(),
        errors = issues.iter().filter(|i| i.severity == LintSeverity::Error).count(),
        "Model linted"
    );
    issues
}

fn lint_representor(
    issues: &mut Vec<LintIssue>,
    name: &str,
    representor: &Representor,
    config: &WriterConfig,
) {
    let location = format!("representor:{name}");

    if representor.types().is_empty() {
        issues.push(
            LintIssue::new(
                &location,
                LintSeverity::Warning,
                "missing_types",
                "Representor declares no type labels; no resource is written for it",
            )
            .with_suggestion("Add at least one entry under 'types'"),
        );
    }

    let depth = representor.nested_depth();
    if depth > config.max_nested_depth {
        issues.push(
            LintIssue::new(
                &location,
                LintSeverity::Error,
                "nested_depth_exceeded",
                format!(
                    "Representor nests {depth} levels deep, limit is {}",
                    config.max_nested_depth
                ),
            )
            .with_suggestion("Flatten the nested representors or raise HYPERDOC_MAX_NESTED_DEPTH"),
        );
    }

    lint_field_keys(issues, &location, representor);
}

/// Report keys declared more than once, under any kind, at every nesting level.
fn lint_field_keys(issues: &mut Vec<LintIssue>, location: &str, representor: &Representor) {
    let mut seen: Vec<(&str, FieldKind)> = Vec::new();
    let mut reported = HashSet::new();

    for kind in FieldKind::ALL {
        for key in representor.keys(kind) {
            if let Some((_, first)) = seen.iter().find(|(seen_key, _)| *seen_key == key) {
                if reported.insert(key) {
                    issues.push(
                        LintIssue::new(
                            location,
                            LintSeverity::Error,
                            "duplicate_field_key",
                            if *first == kind {
                                format!("Field '{key}' is declared twice as {kind}")
                            } else {
                                format!("Field '{key}' is declared as {first} and again as {kind}")
                            },
                        )
                        .with_suggestion("Declare each field key under exactly one kind"),
                    );
                }
            } else {
                seen.push((key, kind));
            }
        }
    }

    for (key, child) in representor.nested_fields() {
        lint_field_keys(issues, &format!("{location}.{key}"), child);
    }
}

fn lint_route(
    issues: &mut Vec<LintIssue>,
    model: &ResourceModel,
    section: &str,
    name: &str,
    form: Option<&Form>,
) {
    let location = format!("{section}:{name}");

    let Some(representor) = model.representors.get(name) else {
        issues.push(
            LintIssue::new(
                &location,
                LintSeverity::Warning,
                "missing_representor",
                format!("No representor named '{name}'; the route is not documented"),
            )
            .with_suggestion(format!("Add a representor '{name}' or rename the route")),
        );
        return;
    };

    let Some(form) = form else {
        return;
    };
    let fields = item_field_names(representor);
    for field in form.fields() {
        if !fields.contains(&field.name.as_str()) {
            issues.push(LintIssue::new(
                &location,
                LintSeverity::Info,
                "unknown_form_field",
                format!("Form field '{}' is not a field of representor '{name}'", field.name),
            ));
        }
    }
}

fn lint_nested_routes(issues: &mut Vec<LintIssue>, model: &ResourceModel) {
    let mut parents: Vec<&str> = Vec::new();
    for name in model.collection_routes.keys().chain(model.item_routes.keys()) {
        if !parents.contains(&name) {
            parents.push(name);
        }
    }

    for key in model.nested_collection_routes.keys() {
        let location = format!("nested_collection_routes:{key}");
        let candidates = candidate_parents(key, &parents, &model.representors);

        match candidates.as_slice() {
            [] => issues.push(
                LintIssue::new(
                    &location,
                    LintSeverity::Warning,
                    "orphan_nested_route",
                    "Nested route matches no parent route with a representor for the nested resource",
                )
                .with_suggestion("Name nested routes '<parent>-<nested>' after a declared route"),
            ),
            [_] => {}
            _ => {
                let written: Vec<String> = candidates
                    .iter()
                    .map(|(parent, nested)| format!("'{nested}' under '{parent}'"))
                    .collect();
                issues.push(
                    LintIssue::new(
                        &location,
                        LintSeverity::Warning,
                        "ambiguous_nested_route",
                        format!(
                            "Nested route matches several parents and is written as {}",
                            written.join(", ")
                        ),
                    )
                    .with_suggestion("Rename the route so it designates a single parent"),
                );
            }
        }
    }
}

/// Whether any issue is an error
#[must_use]
pub fn has_errors(issues: &[LintIssue]) -> bool {
    issues.iter().any(|i| i.severity == LintSeverity::Error)
}

/// Print lint issues in a formatted way
pub fn print_lint_issues(issues: &[LintIssue]) {
    if issues.is_empty() {
        println!("✅ No lint issues found!");
        return;
    }

    let count = |severity: LintSeverity| issues.iter().filter(|i| i.severity == severity).count();
    println!("\n📋 Lint Results:");
    println!(
        "   {} error(s), {} warning(s), {} info(s)\n",
        count(LintSeverity::Error),
        count(LintSeverity::Warning),
        count(LintSeverity::Info)
    );

    for (severity, heading) in [
        (LintSeverity::Error, "❌ Errors (must fix):"),
        (LintSeverity::Warning, "⚠️  Warnings (should fix):"),
        (LintSeverity::Info, "ℹ️  Info:"),
    ] {
        let group: Vec<_> = issues.iter().filter(|i| i.severity == severity).collect();
        if group.is_empty() {
            continue;
        }
        println!("{heading}");
        for issue in group {
            println!("   [{}] {}", issue.kind, issue.location);
            println!("      {}", issue.message);
            if let Some(suggestion) = &issue.suggestion {
                println!("      💡 Suggestion: {}", suggestion);
            }
        }
        println!();
    }
}

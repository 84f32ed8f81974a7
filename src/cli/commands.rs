use crate::config::WriterConfig;
use crate::linter::{has_errors, lint_model_file, print_lint_issues, LintSeverity};
use crate::loader::load_documentation;
use crate::mapper::MapperFormat;
use crate::request::RequestInfo;
use crate::writer::DocumentationWriter;
use anyhow::Context;
use clap::{Parser, Subcommand};
use http::header::{HeaderMap, HeaderValue, ACCEPT_LANGUAGE};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;
use url::Url;

/// Command-line interface for hyperdoc
///
/// Writes hypermedia API documentation from resource model files and checks
/// those files for problems.
#[derive(Parser)]
#[command(name = "hyperdoc")]
#[command(about = "Hypermedia API documentation writer", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the documentation document of a resource model
    Write {
        /// Path to the model file (YAML, JSON or TOML)
        #[arg(short, long)]
        model: PathBuf,

        /// Output format: hydra or hal (default: HYPERDOC_FORMAT, then hydra)
        #[arg(short, long)]
        format: Option<MapperFormat>,

        /// Base URL of the documented application
        #[arg(long)]
        application_url: Option<Url>,

        /// Accept-Language header used to pick localized titles
        #[arg(long)]
        accept_language: Option<String>,

        /// Pretty-print the document
        #[arg(long, default_value_t = false)]
        pretty: bool,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Lint a resource model
    ///
    /// Reports routes that will not be documented, nested routes that match
    /// no parent or several, duplicated field keys, excessive nesting and
    /// form fields the representor does not declare.
    Lint {
        /// Path to the model file (YAML, JSON or TOML)
        #[arg(short, long)]
        model: PathBuf,

        /// Exit with error code if any errors are found
        #[arg(long, default_value_t = false)]
        fail_on_error: bool,

        /// Show only errors (hide warnings and info)
        #[arg(long, default_value_t = false)]
        errors_only: bool,
    },
}

/// Run a parsed command line.
pub fn run_cli(cli: Cli) -> anyhow::Result<()> {
    let config = WriterConfig::from_env();
    match cli.command {
        Commands::Write {
            model,
            format,
            application_url,
            accept_language,
            pretty,
            output,
        } => {
            let request = build_request(application_url, accept_language.as_deref())?;
            let document = write_document(
                &model,
                format.unwrap_or(config.format),
                &request,
                pretty,
                &config,
            )?;

            match output {
                Some(path) => {
                    std::fs::write(&path, &document)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    info!(path = %path.display(), bytes = document.len(), "Documentation written");
                }
                None => {
                    let mut stdout = std::io::stdout().lock();
                    writeln!(stdout, "{document}").context("failed to write to stdout")?;
                }
            }
            Ok(())
        }
        Commands::Lint {
            model,
            fail_on_error,
            errors_only,
        } => {
            let mut issues = lint_model_file(&model, &config)?;
            if errors_only {
                issues.retain(|i| i.severity == LintSeverity::Error);
            }
            print_lint_issues(&issues);

            if fail_on_error && has_errors(&issues) {
                let errors = issues
                    .iter()
                    .filter(|i| i.severity == LintSeverity::Error)
                    .count();
                anyhow::bail!("{} has {errors} lint error(s)", model.display());
            }
            Ok(())
        }
    }
}

/// Request context for a document written outside of any HTTP exchange.
pub(crate) fn build_request(
    application_url: Option<Url>,
    accept_language: Option<&str>,
) -> anyhow::Result<RequestInfo> {
    let mut headers = HeaderMap::new();
    if let Some(language) = accept_language {
        let value = HeaderValue::from_str(language)
            .with_context(|| format!("invalid Accept-Language value '{language}'"))?;
        headers.insert(ACCEPT_LANGUAGE, value);
    }

    let mut request = RequestInfo::new(headers);
    if let Some(url) = application_url {
        request = request.with_application_url(url);
    }
    Ok(request)
}

/// Load `model` and write its documentation in `format`.
pub(crate) fn write_document(
    model: &Path,
    format: MapperFormat,
    request: &RequestInfo,
    pretty: bool,
    config: &WriterConfig,
) -> anyhow::Result<String> {
    let documentation = load_documentation(model, config)?;
    let mapper = format.mapper();
    let writer = DocumentationWriter::new(&documentation, mapper.as_ref(), request);

    let document = if pretty {
        let value = writer.write_value()?;
        serde_json::to_string_pretty(&value)?
    } else {
        writer.write()?
    };

    info!(
        model = %model.display(),
        format = %format,
        media_type = writer.media_type(),
        "Documentation generated"
    );
    Ok(document)
}

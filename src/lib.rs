//! Docgate: a linter for Markdown documentation trees.
//!
//! Docgate checks a tree laid out as `docs/<stack>/<category>/<doc-name>.md`
//! where every document carries YAML front-matter and a Markdown body.
//!
//! # Checks
//!
//! - **Front-matter**: delimiters, YAML mapping, required keys, enumerated
//!   values (`stack`, `priority`, `audience`, `complexity`, `doc_type`),
//!   `source_confidence` and `last_updated` formats, non-empty `tags`
//! - **Sections**: `## ` section size, pronoun openings, long code blocks
//!   without a `### ` subsection, bare code blocks, heading hierarchy
//! - **Structure**: stub/oversized files, kebab-case file names, trailing
//!   newline, path convention
//! - **Links**: "Related" sections must only point at files that exist
//!
//! # Examples
//!
//! ```bash
//! # Validate ./docs and write a JSON report
//! docgate validate --docs-dir docs --json report.json
//!
//! # Which sections of one document are too long?
//! docgate sections docs/php-wp/plugins/loader.md
//!
//! # Drop empty "## " headings (preview first)
//! docgate headings --dry-run docs
//! ```
//!
//! # Crate Structure
//!
//! - [`core`]: document model, configuration, validation harness, reporting
//! - [`checks`]: the lint rules run against every document

pub mod checks;
pub mod core;

use crate::core::{
    assets,
    config::load_config,
    error,
    headings_cli::{self, HeadingsCli},
    output,
    report::Report,
    sections_cli::{self, OutputFormat, SectionsCli},
    validate::Validator,
};

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[clap(
    name = "docgate",
    version = env!("CARGO_PKG_VERSION"),
    about = "Validate Markdown documentation trees"
)]
struct Cli {
    /// Disable colored output
    #[clap(long, global = true)]
    no_color: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(clap::Args, Debug)]
struct ValidateCli {
    /// Path to the docs directory
    #[clap(long, default_value = "docs")]
    docs_dir: PathBuf,
    /// Write the JSON report to this file
    #[clap(long)]
    json: Option<PathBuf>,
    /// Output format for stdout: 'text' or 'json'
    #[clap(long, value_enum, default_value = "text")]
    format: OutputFormat,
    /// Show detailed output for each file
    #[clap(short, long)]
    verbose: bool,
    /// Config file (defaults to docgate.toml next to the docs directory)
    #[clap(long)]
    config: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
struct InitCli {
    /// Directory to write docgate.toml into (defaults to current directory)
    #[clap(short, long)]
    dir: Option<PathBuf>,
    /// Overwrite an existing docgate.toml
    #[clap(long)]
    force: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate every document in a docs tree
    #[clap(name = "validate", visible_alias = "v")]
    Validate(ValidateCli),

    /// Show per-section sizes for one document
    #[clap(name = "sections", visible_alias = "s")]
    Sections(SectionsCli),

    /// Find and remove empty "## " headings
    #[clap(name = "headings")]
    Headings(HeadingsCli),

    /// Write a default docgate.toml
    #[clap(name = "init")]
    Init(InitCli),

    /// Show version information
    #[clap(name = "version")]
    Version,
}

/// Install the stderr log subscriber. Filter comes from `DOCGATE_LOG`.
fn init_logging() {
    let filter = EnvFilter::try_from_env("DOCGATE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run_validate(cli: ValidateCli) -> Result<(), error::DocgateError> {
    let docs_dir = std::path::absolute(&cli.docs_dir).map_err(error::DocgateError::IoError)?;
    if !docs_dir.is_dir() {
        return Err(error::DocgateError::NotFound(format!(
            "Docs directory not found: {}",
            docs_dir.display()
        )));
    }
    let (config, config_path) = load_config(cli.config.as_deref(), &docs_dir)?;
    if let Some(path) = &config_path {
        tracing::info!(config = %path.display(), "using config");
    }

    let text = cli.format == OutputFormat::Text;
    if text {
        println!("Validating documentation in: {}", docs_dir.display());
    }

    let validator = Validator::new(&docs_dir, config);
    let results = validator.validate_all()?;
    if text && cli.verbose {
        println!("Found {} markdown files to validate", results.len());
        for result in results.iter().filter(|r| !r.issues.is_empty()) {
            print!("{}", output::render_file(result, true));
        }
    }

    let report = Report::build(&docs_dir, &results);
    match cli.format {
        OutputFormat::Text => print!("{}", output::render_summary(&report)),
        OutputFormat::Json => println!("{}", report.to_json()?),
    }

    if let Some(json_path) = &cli.json {
        report.write_json(json_path)?;
        if text {
            println!("\nJSON report saved to: {}", json_path.display());
        }
    }

    if report.passed() {
        Ok(())
    } else {
        Err(error::DocgateError::ValidationFailed(
            report.summary.total_failures,
        ))
    }
}

fn run_init(cli: InitCli) -> Result<(), error::DocgateError> {
    let dir = match cli.dir {
        Some(d) => d,
        None => std::env::current_dir()?,
    };
    let path = assets::write_default_config(&dir, cli.force)?;
    println!("Wrote {}", path.display());
    Ok(())
}

pub fn run() -> Result<(), error::DocgateError> {
    let cli = Cli::parse();
    init_logging();
    if cli.no_color {
        colored::control::set_override(false);
    }

    match cli.command {
        Command::Validate(validate) => run_validate(validate),
        Command::Sections(sections) => sections_cli::run_sections_cli(sections),
        Command::Headings(headings) => headings_cli::run_headings_cli(headings),
        Command::Init(init) => run_init(init),
        Command::Version => {
            println!("v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

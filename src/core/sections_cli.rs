//! `docgate sections`: per-section size breakdown for one document.
//!
//! Shows which `## ` sections exceed the character limit, with a cl100k token
//! estimate per section so oversized chunks can be split before indexing.

use crate::core::config::{Config, load_config_for_file};
use crate::core::error::DocgateError;
use crate::core::markdown;
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tiktoken_rs::{CoreBPE, cl100k_base};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(clap::Args, Debug)]
pub struct SectionsCli {
    /// Markdown file to analyze
    pub file: PathBuf,
    /// Output format
    #[clap(long, value_enum, default_value = "text")]
    pub format: OutputFormat,
    /// Config file (defaults to the nearest docgate.toml above the file)
    #[clap(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionStat {
    pub title: String,
    pub start_line: usize,
    pub chars: usize,
    pub tokens: usize,
    pub over_limit: bool,
    pub subsections: usize,
    pub code_blocks: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionAnalysis {
    pub file: String,
    pub max_length: usize,
    pub violations: usize,
    pub sections: Vec<SectionStat>,
}

pub fn analyze(
    path: &Path,
    content: &str,
    config: &Config,
    bpe: &CoreBPE,
) -> SectionAnalysis {
    let max_length = config.limits.max_section_length;
    let sections: Vec<SectionStat> = markdown::sections(content)
        .iter()
        .map(|section| {
            let chars = section.char_len();
            SectionStat {
                title: section.title.clone(),
                start_line: section.start_line,
                chars,
                tokens: bpe.encode_with_special_tokens(&section.text).len(),
                over_limit: chars > max_length,
                subsections: section.subsection_count(),
                code_blocks: markdown::code_blocks(&section.text).len(),
            }
        })
        .collect();

    SectionAnalysis {
        file: path.display().to_string(),
        max_length,
        violations: sections.iter().filter(|s| s.over_limit).count(),
        sections,
    }
}

pub fn render_text(analysis: &SectionAnalysis) -> String {
    let rule = "=".repeat(80);
    let mut out = format!("\n{}\nFile: {}\n{}\n\n", rule, analysis.file, rule);
    for stat in analysis.sections.iter().filter(|s| s.over_limit) {
        out.push_str(&format!("❌ {}\n", stat.title.bright_red()));
        out.push_str(&format!(
            "   Length: {} chars ({} over limit), ~{} tokens\n",
            stat.chars,
            stat.chars - analysis.max_length,
            stat.tokens
        ));
        out.push_str(&format!(
            "   Subsections: {}, Code blocks: {}\n\n",
            stat.subsections, stat.code_blocks
        ));
    }
    out.push_str(&format!(
        "\nSummary: {}/{} sections exceed {} chars\n{}\n",
        analysis.violations,
        analysis.sections.len(),
        analysis.max_length,
        rule
    ));
    out
}

pub fn run_sections_cli(cli: SectionsCli) -> Result<(), DocgateError> {
    if !cli.file.is_file() {
        return Err(DocgateError::NotFound(format!(
            "File not found: {}",
            cli.file.display()
        )));
    }
    let content = fs::read_to_string(&cli.file).map_err(DocgateError::IoError)?;
    let (config, _) = load_config_for_file(cli.config.as_deref(), &cli.file)?;
    let bpe = cl100k_base().map_err(|e| DocgateError::TokenizerError(e.to_string()))?;

    let analysis = analyze(&cli.file, &content, &config, &bpe);
    match cli.format {
        OutputFormat::Text => print!("{}", render_text(&analysis)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&analysis)?),
    }
    Ok(())
}

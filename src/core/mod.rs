//! Core modules: document model, configuration, validation harness and the
//! CLI surfaces built on them.

pub mod assets;
pub mod config;
pub mod error;
pub mod frontmatter;
pub mod headings_cli;
pub mod issue;
pub mod markdown;
pub mod output;
pub mod report;
pub mod sections_cli;
pub mod validate;

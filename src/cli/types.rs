use clap::Parser;
use std::path::PathBuf;

/// Main CLI parser structure
#[derive(Parser)]
#[command(name = "mdtoc")]
#[command(about = "Table of contents generator for Markdown documents", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the Markdown document
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

//! CLI argument parsing for pdfmerge.
//!
//! This module defines the command-line interface structure using `clap`
//! and turns parsed arguments into [`MergeOptions`] and a [`FileList`].

use clap::Parser;
use std::path::PathBuf;

use pdfmerge::config::{MergeOptions, OptionsOverlay, Output};
use pdfmerge::error::Result;
use pdfmerge::validation::FileList;

/// Merge PDF files into one document using pdftk.
#[derive(Parser, Debug)]
#[command(name = "pdfmerge")]
#[command(version)]
#[command(about = "Merge PDF files into one document using pdftk", long_about = None)]
#[command(author)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Input PDF files to merge (in order)
    ///
    /// At least two files are required, unless a single wildcard pattern
    /// is given. Quote patterns so pdftk receives them unexpanded.
    ///
    /// Examples:
    ///   pdfmerge a.pdf b.pdf -o merged.pdf
    ///   pdfmerge 'chapters/*.pdf' -o book.pdf
    #[arg(required = true, value_name = "FILE")]
    pub inputs: Vec<String>,

    /// Output destination
    ///
    /// A file path, or BUFFER / STREAM to write the merged PDF to stdout.
    /// Defaults to BUFFER.
    #[arg(short, long, value_name = "OUTPUT", env = "PDFMERGE_OUTPUT")]
    pub output: Option<String>,

    /// Path or name of the pdftk executable
    #[arg(short, long, value_name = "PATH", env = "PDFMERGE_LIB_PATH")]
    pub lib_path: Option<String>,

    /// JSON options file, e.g. {"libPath": "/opt/pdftk", "output": "out.pdf"}
    ///
    /// Values from the file are applied first; --lib-path and --output
    /// take precedence over them.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Dry run - print the pdftk command without running it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Verbose output - show the pdftk command and its output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Resolve merge options: defaults, then the options file, then flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the options file cannot be read or parsed, or if
    /// the resulting options are invalid.
    pub async fn to_options(&self) -> Result<MergeOptions> {
        let mut options = MergeOptions::default();

        if let Some(ref path) = self.config {
            options = options.overlay(OptionsOverlay::load(path).await?);
        }

        let options = options.overlay(OptionsOverlay {
            lib_path: self.lib_path.clone(),
            output: self.output.as_deref().map(Output::parse),
        });

        options.validate()?;
        Ok(options)
    }

    /// Validated list of inputs.
    pub fn file_list(&self) -> Result<FileList> {
        FileList::new(&self.inputs)
    }
}

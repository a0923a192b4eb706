//! pdfmerge - Merge PDF files into one document using pdftk.

mod cli;

use clap::Parser;
use std::process;
use tokio::io::AsyncWriteExt;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use pdfmerge::error::PdfMergeError;
use pdfmerge::merge::{MergeResult, Merger};
use pdfmerge::output::OutputFormatter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    if let Err(err) = run(cli).await {
        OutputFormatter::quiet().error(&format!("Error: {err}"));
        process::exit(err.exit_code());
    }
}

/// Log to stderr; stdout may carry the merged document.
fn init_tracing(cli: &Cli) {
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Main application logic.
async fn run(cli: Cli) -> Result<(), PdfMergeError> {
    let files = cli.file_list()?;
    let options = cli.to_options().await?;
    let formatter = OutputFormatter::new(cli.quiet, cli.verbose);
    let merger = Merger::new();

    if cli.dry_run {
        let target = options
            .output
            .file_path()
            .map(|path| path.to_path_buf())
            .unwrap_or_else(|| std::env::temp_dir().join("pdfmerge-XXXXXX.pdf"));
        let invocation = merger.plan(&files, &options, &target);

        formatter.info("Dry run - no files will be created");
        formatter.info(&format!("  Command: {invocation}"));
        return Ok(());
    }

    formatter.info(&format!(
        "Merging {} input(s) with {}...",
        files.len(),
        options.lib_path
    ));
    formatter.debug(&format!("Output: {:?}", options.output));

    match merger.merge(&files, &options).await? {
        MergeResult::Buffer(bytes) => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(&bytes).await?;
            stdout.flush().await?;
        }
        MergeResult::Stream(mut stream) => {
            let mut stdout = tokio::io::stdout();
            tokio::io::copy(&mut stream, &mut stdout).await?;
            stdout.flush().await?;
        }
        MergeResult::File(output) => {
            if let Some(path) = options.output.file_path() {
                formatter.success(&format!("Successfully created {}", path.display()));
            }
            formatter.detail("Time", &format!("{:.2}s", output.elapsed.as_secs_f64()));
            if !output.stdout.trim().is_empty() {
                formatter.detail("pdftk stdout", output.stdout.trim());
            }
            if !output.stderr.trim().is_empty() {
                formatter.warning(output.stderr.trim());
            }
        }
    }

    Ok(())
}

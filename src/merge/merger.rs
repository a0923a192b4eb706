//! Merge orchestration.
//!
//! This module drives one merge call: choose the toolkit target, build the
//! invocation, run it, and shape the result according to [`Output`].

use std::path::Path;

use crate::command::{Invocation, Platform, builder_for};
use crate::config::{MergeOptions, Output};
use crate::error::Result;
use crate::io::{PdfStream, ProcessOutput, TempOutput, ToolRunner};
use crate::validation::FileList;

/// Result of a merge operation, shaped by [`Output`].
#[derive(Debug)]
pub enum MergeResult {
    /// Merged document bytes.
    Buffer(Vec<u8>),

    /// Merged document as a complete in-memory stream.
    Stream(PdfStream),

    /// Outcome of the toolkit call that wrote the destination file.
    File(ProcessOutput),
}

impl MergeResult {
    /// Merged bytes, for buffer and stream results.
    pub fn into_bytes(self) -> Option<Vec<u8>> {
        match self {
            Self::Buffer(bytes) => Some(bytes),
            Self::Stream(stream) => Some(stream.into_inner()),
            Self::File(_) => None,
        }
    }

    /// Toolkit outcome, for file results.
    pub fn process_output(&self) -> Option<&ProcessOutput> {
        match self {
            Self::File(output) => Some(output),
            _ => None,
        }
    }
}

/// PDF merger that delegates concatenation to the toolkit.
#[derive(Debug, Clone)]
pub struct Merger {
    /// Invocation convention used to build commands.
    platform: Platform,

    /// Runner that starts the toolkit.
    runner: ToolRunner,
}

impl Default for Merger {
    fn default() -> Self {
        Self::new()
    }
}

impl Merger {
    /// Create a merger for the current platform.
    pub fn new() -> Self {
        Self::with_platform(Platform::current())
    }

    /// Create a merger using a specific invocation convention.
    pub fn with_platform(platform: Platform) -> Self {
        Self {
            platform,
            runner: ToolRunner::new(),
        }
    }

    /// Replace the process runner.
    pub fn with_runner(mut self, runner: ToolRunner) -> Self {
        self.runner = runner;
        self
    }

    /// Invocation convention in use.
    pub fn platform(&self) -> Platform {
        self.platform
    }

    /// Build the toolkit invocation writing `files` into `target`.
    pub fn plan(&self, files: &FileList, options: &MergeOptions, target: &Path) -> Invocation {
        let files: Vec<&str> = files.iter().collect();
        builder_for(self.platform).build(&options.lib_path, &files, target)
    }

    /// Merge `files` according to `options`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The options are invalid
    /// - The temporary output cannot be created or read
    /// - The toolkit cannot be started or exits unsuccessfully
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use pdfmerge::config::MergeOptions;
    /// # use pdfmerge::merge::{Merger, MergeResult};
    /// # use pdfmerge::validation::FileList;
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let files = FileList::new(["a.pdf", "b.pdf"])?;
    /// let merger = Merger::new();
    /// if let MergeResult::Buffer(bytes) = merger.merge(&files, &MergeOptions::default()).await? {
    ///     println!("Merged {} bytes", bytes.len());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn merge(&self, files: &FileList, options: &MergeOptions) -> Result<MergeResult> {
        options.validate()?;

        match &options.output {
            Output::File(destination) => {
                let invocation = self.plan(files, options, destination);
                let output = self.runner.run(&invocation).await?;

                tracing::info!(
                    files = files.len(),
                    destination = %destination.display(),
                    elapsed_ms = output.elapsed.as_millis() as u64,
                    "merged PDF written"
                );

                Ok(MergeResult::File(output))
            }
            Output::Buffer | Output::Stream => {
                let temp = TempOutput::new()?;
                let invocation = self.plan(files, options, temp.path());
                let output = self.runner.run(&invocation).await?;
                let bytes = temp.read_and_remove().await?;

                tracing::info!(
                    files = files.len(),
                    bytes = bytes.len(),
                    elapsed_ms = output.elapsed.as_millis() as u64,
                    "merged PDF read into memory"
                );

                if options.output == Output::Stream {
                    Ok(MergeResult::Stream(PdfStream::new(bytes)))
                } else {
                    Ok(MergeResult::Buffer(bytes))
                }
            }
        }
    }
}

//! Toolkit process execution.
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerge::command::{builder_for, Platform};
//! use pdfmerge::io::ToolRunner;
//! use std::path::Path;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let invocation = builder_for(Platform::current())
//!     .build("pdftk", &["a.pdf", "b.pdf"], Path::new("out.pdf"));
//! let output = ToolRunner::new().run(&invocation).await?;
//! println!("finished in {:?}", output.elapsed);
//! # Ok(())
//! # }
//! ```

use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;

use crate::command::Invocation;
use crate::error::{PdfMergeError, Result};

/// Captured outcome of a successful toolkit run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code reported by the process.
    pub status: Option<i32>,

    /// Text written to stdout.
    pub stdout: String,

    /// Text written to stderr.
    pub stderr: String,

    /// Wall time between spawn and exit.
    pub elapsed: Duration,
}

/// Starts the toolkit for a built [`Invocation`].
#[derive(Debug, Clone)]
pub struct ToolRunner {
    shell: String,
}

impl Default for ToolRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolRunner {
    /// Create a runner using `sh` for shell invocations.
    pub fn new() -> Self {
        Self {
            shell: "sh".to_string(),
        }
    }

    /// Create a runner using a specific shell for shell invocations.
    pub fn with_shell(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    fn command(&self, invocation: &Invocation) -> Command {
        match invocation {
            Invocation::Shell { line } => {
                let mut command = Command::new(&self.shell);
                command.arg("-c").arg(line);
                command
            }
            Invocation::Direct { program, args } => {
                let mut command = Command::new(program);
                command.args(args);
                command
            }
        }
    }

    /// Run the invocation to completion.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The process cannot be spawned ([`PdfMergeError::SpawnFailed`])
    /// - The process exits unsuccessfully ([`PdfMergeError::ExecutionFailed`])
    pub async fn run(&self, invocation: &Invocation) -> Result<ProcessOutput> {
        let mut command = self.command(invocation);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        let program = match invocation {
            Invocation::Shell { .. } => self.shell.as_str(),
            Invocation::Direct { program, .. } => program.as_str(),
        };

        tracing::debug!(command = %invocation, "starting PDF toolkit");

        let start = Instant::now();
        let output = command
            .output()
            .await
            .map_err(|err| PdfMergeError::spawn_failed(program, err))?;
        let elapsed = start.elapsed();

        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            tracing::debug!(status = ?output.status.code(), "PDF toolkit failed");
            return Err(PdfMergeError::execution_failed(output.status.code(), stderr));
        }

        Ok(ProcessOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr,
            elapsed,
        })
    }
}

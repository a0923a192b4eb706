//! Scratch output file for in-memory merge results.

use std::path::Path;
use tempfile::TempPath;

use crate::error::Result;

/// Unique temporary `.pdf` path the toolkit writes into.
///
/// The file is removed when the value is consumed by
/// [`read_and_remove`](TempOutput::read_and_remove) or dropped.
#[derive(Debug)]
pub struct TempOutput {
    path: TempPath,
}

impl TempOutput {
    /// Reserve a fresh path in the platform temp directory.
    pub fn new() -> Result<Self> {
        let path = tempfile::Builder::new()
            .prefix("pdfmerge-")
            .suffix(".pdf")
            .tempfile()?
            .into_temp_path();

        Ok(Self { path })
    }

    /// Location of the scratch file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file, then remove it.
    ///
    /// Removal is best effort: a failure is logged and never replaces the
    /// read result.
    pub async fn read_and_remove(self) -> Result<Vec<u8>> {
        let contents = tokio::fs::read(&self.path).await;
        self.remove();
        Ok(contents?)
    }

    fn remove(self) {
        let shown = self.path.display().to_string();
        if let Err(err) = self.path.close() {
            tracing::warn!(path = %shown, error = %err, "failed to remove temporary output");
        }
    }
}

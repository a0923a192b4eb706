//! Configuration module for pdfmerge.
//!
//! Options for a merge call are held in [`MergeOptions`], which carries
//! defined defaults. Partial settings coming from an options file or the
//! command line are described by [`OptionsOverlay`] and merged onto a base
//! field by field.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::{PdfMergeError, Result};

/// Executable invoked when no library path is configured.
pub const DEFAULT_LIB_PATH: &str = "pdftk";

/// Shape of a merge result.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Output {
    /// Merged bytes returned in memory.
    #[default]
    Buffer,
    /// Merged bytes returned as an already-complete readable stream.
    Stream,
    /// Merged document written by the toolkit to this path.
    File(PathBuf),
}

impl Output {
    /// Classify an output setting.
    ///
    /// `"BUFFER"` selects [`Output::Buffer`], `"STREAM"` and `"READSTREAM"`
    /// select [`Output::Stream`], compared case-insensitively. Any other value
    /// is taken as a destination path.
    ///
    /// ```
    /// use pdfmerge::config::Output;
    /// use std::path::PathBuf;
    ///
    /// assert_eq!(Output::parse("buffer"), Output::Buffer);
    /// assert_eq!(Output::parse("ReadStream"), Output::Stream);
    /// assert_eq!(Output::parse("out.pdf"), Output::File(PathBuf::from("out.pdf")));
    /// ```
    pub fn parse(value: &str) -> Self {
        match value.to_uppercase().as_str() {
            "BUFFER" => Self::Buffer,
            "STREAM" | "READSTREAM" => Self::Stream,
            _ => Self::File(PathBuf::from(value)),
        }
    }

    /// Destination path for file output.
    pub fn file_path(&self) -> Option<&Path> {
        match self {
            Self::File(path) => Some(path),
            _ => None,
        }
    }

    /// Check whether the toolkit writes straight to a caller path.
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File(_))
    }
}

impl FromStr for Output {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl<'de> Deserialize<'de> for Output {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Ok(Self::parse(&value))
    }
}

/// Complete options for one merge call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    /// Path or name of the toolkit executable.
    pub lib_path: String,

    /// Requested result shape.
    pub output: Output,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            lib_path: DEFAULT_LIB_PATH.to_string(),
            output: Output::Buffer,
        }
    }
}

impl MergeOptions {
    /// Options writing the merged document to `path`.
    pub fn to_file(path: impl Into<PathBuf>) -> Self {
        Self {
            output: Output::File(path.into()),
            ..Default::default()
        }
    }

    /// Set the toolkit executable.
    pub fn with_lib_path(mut self, lib_path: impl Into<String>) -> Self {
        self.lib_path = lib_path.into();
        self
    }

    /// Set the output shape.
    pub fn with_output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    /// Apply every field set in `overlay`, keeping the rest.
    pub fn overlay(mut self, overlay: OptionsOverlay) -> Self {
        if let Some(lib_path) = overlay.lib_path {
            self.lib_path = lib_path;
        }
        if let Some(output) = overlay.output {
            self.output = output;
        }
        self
    }

    /// Check whether the default executable is in use.
    pub fn uses_default_lib_path(&self) -> bool {
        self.lib_path == DEFAULT_LIB_PATH
    }

    /// Validate the options.
    ///
    /// # Errors
    ///
    /// Returns an error if the executable or the destination path is empty.
    pub fn validate(&self) -> Result<()> {
        if self.lib_path.trim().is_empty() {
            return Err(PdfMergeError::invalid_config(
                "Library path must not be empty",
            ));
        }

        if let Some(path) = self.output.file_path()
            && path.as_os_str().is_empty()
        {
            return Err(PdfMergeError::invalid_config(
                "Output path must not be empty",
            ));
        }

        Ok(())
    }
}

/// Partial options, merged onto [`MergeOptions`] with [`MergeOptions::overlay`].
///
/// Deserializes from JSON such as `{"libPath": "/opt/pdftk", "output": "stream"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OptionsOverlay {
    /// Toolkit executable.
    #[serde(default, alias = "lib_path")]
    pub lib_path: Option<String>,

    /// Output shape.
    #[serde(default)]
    pub output: Option<Output>,
}

impl OptionsOverlay {
    /// Parse an overlay from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text)
            .map_err(|err| PdfMergeError::invalid_config(format!("Invalid options: {err}")))
    }

    /// Load an overlay from a JSON file.
    pub async fn load(path: &Path) -> Result<Self> {
        let text = tokio::fs::read_to_string(path).await.map_err(|source| {
            PdfMergeError::FailedToReadConfig {
                path: path.to_path_buf(),
                source,
            }
        })?;
        Self::from_json(&text)
    }
}

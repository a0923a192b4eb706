//! Input validation for merge calls.
//!
//! A [`FileList`] is the ordered set of toolkit inputs for one merge. Building
//! one enforces the count rules: at least two paths, or a single path that
//! carries the wildcard marker and therefore expands to several files.
//!
//! # Examples
//!
//! ```
//! use pdfmerge::validation::FileList;
//!
//! let files = FileList::new(["a.pdf", "b.pdf"]).unwrap();
//! assert_eq!(files.len(), 2);
//!
//! assert!(FileList::new(["a.pdf"]).is_err());
//! assert!(FileList::new(["chapters/*.pdf"]).is_ok());
//! ```

use serde_json::Value;

use crate::error::{PdfMergeError, Result};
use crate::utils::is_wildcard;

/// Ordered, validated list of toolkit inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileList {
    files: Vec<String>,
}

impl FileList {
    /// Build a file list from string paths.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The list is empty
    /// - It holds a single path without a wildcard
    pub fn new<I, S>(files: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let files: Vec<String> = files
            .into_iter()
            .map(|file| file.as_ref().to_string())
            .collect();
        Self::check(&files)?;
        Ok(Self { files })
    }

    /// Build a file list from a dynamically typed value.
    ///
    /// The value must be a JSON array. Entries that are not strings are
    /// dropped before the count rules are applied.
    ///
    /// # Errors
    ///
    /// Returns [`PdfMergeError::InvalidInput`] if `value` is not an array,
    /// otherwise the same errors as [`FileList::new`].
    pub fn from_json(value: &Value) -> Result<Self> {
        let entries = value.as_array().ok_or_else(|| {
            PdfMergeError::invalid_input("Expected files to be an array of paths to PDF files.")
        })?;

        Self::new(entries.iter().filter_map(Value::as_str))
    }

    fn check(files: &[String]) -> Result<()> {
        match files {
            [] => Err(PdfMergeError::NoFilesToMerge),
            [only] if !is_wildcard(only) => Err(PdfMergeError::NotEnoughFiles),
            _ => Ok(()),
        }
    }

    /// Paths in merge order.
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Number of entries (before any wildcard expansion).
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Always false for a validated list.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate over the paths in merge order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a FileList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

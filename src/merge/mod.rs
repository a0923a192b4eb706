//! PDF merging through the external toolkit.
//!
//! [`merge`] and [`merge_json`] are the one-call entry points. Use
//! [`Merger`] directly to choose the invocation convention or the runner.

pub mod merger;

pub use merger::{MergeResult, Merger};

use serde_json::Value;

use crate::config::MergeOptions;
use crate::error::Result;
use crate::validation::FileList;

/// Merge `files` in order into one document.
///
/// # Errors
///
/// Returns an error if:
/// - No files are given, or a single file without a wildcard
/// - The toolkit cannot be started or exits unsuccessfully
/// - The merged output cannot be read back
///
/// # Examples
///
/// ```no_run
/// use pdfmerge::config::{MergeOptions, Output};
/// use pdfmerge::merge::{merge, MergeResult};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let options = MergeOptions::default().with_output(Output::parse("merged.pdf"));
/// let result = merge(["a.pdf", "b.pdf"], options).await?;
/// assert!(matches!(result, MergeResult::File(_)));
/// # Ok(())
/// # }
/// ```
pub async fn merge<I, S>(files: I, options: MergeOptions) -> Result<MergeResult>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let files = FileList::new(files)?;
    Merger::new().merge(&files, &options).await
}

/// Merge a dynamically typed file list.
///
/// `files` must be a JSON array; entries that are not strings are ignored.
///
/// # Errors
///
/// Returns [`PdfMergeError::InvalidInput`](crate::PdfMergeError::InvalidInput)
/// if `files` is not an array, otherwise the same errors as [`merge`].
pub async fn merge_json(files: &Value, options: MergeOptions) -> Result<MergeResult> {
    let files = FileList::from_json(files)?;
    Merger::new().merge(&files, &options).await
}

//! pdfmerge - Merge PDF files into one document through `pdftk`.
//!
//! This library builds the command that asks an external PDF toolkit to
//! concatenate a list of files, runs it, and hands the merged document back
//! in one of three shapes:
//!
//! - an in-memory buffer
//! - an in-memory readable stream
//! - a file written by the toolkit
//!
//! No PDF parsing happens here. The toolkit does all document work.
//!
//! # Examples
//!
//! ## Buffer output
//!
//! ```no_run
//! use pdfmerge::{merge, MergeOptions, MergeResult};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let result = merge(["a.pdf", "b.pdf"], MergeOptions::default()).await?;
//! if let MergeResult::Buffer(bytes) = result {
//!     println!("Merged {} bytes", bytes.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## File output with a custom toolkit
//!
//! ```no_run
//! use pdfmerge::{merge, MergeOptions};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = MergeOptions::to_file("book.pdf").with_lib_path("/opt/pdftk/bin/pdftk");
//! merge(["chapters/*.pdf"], options).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod command;
pub mod config;
pub mod error;
pub mod io;
pub mod merge;
pub mod output;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use config::{MergeOptions, Output};
pub use error::{ErrorKind, PdfMergeError, Result};
pub use merge::{MergeResult, Merger, merge, merge_json};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

//! User-facing output for the pdfmerge binary.
//!
//! Messages go to stderr so stdout stays free for merged PDF bytes.
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerge::output::OutputFormatter;
//!
//! let formatter = OutputFormatter::new(false, false);
//! formatter.info("Merging 2 input(s)...");
//! formatter.success("Merge completed successfully");
//! ```

pub mod formatter;

pub use formatter::{MessageLevel, OutputFormatter};

//! Process and filesystem I/O for merge calls.
//!
//! This module provides:
//! - [`ToolRunner`]: starts the toolkit and captures its output
//! - [`TempOutput`]: a unique scratch file the toolkit writes into
//! - [`PdfStream`]: an in-memory reader over merged bytes

pub mod runner;
pub mod stream;
pub mod temp;

pub use runner::{ProcessOutput, ToolRunner};
pub use stream::PdfStream;
pub use temp::TempOutput;

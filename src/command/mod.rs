//! Toolkit command construction.
//!
//! The toolkit is always asked to run `<files...> cat output <target>`. How
//! those tokens reach the process depends on the platform:
//!
//! - [`ShellCommandBuilder`] quotes every token and joins them into one line
//!   for `sh -c`, letting the shell expand wildcard patterns.
//! - [`ArgvCommandBuilder`] hands the tokens to the process as a plain
//!   argument vector and leaves wildcard expansion to the toolkit.
//!
//! [`builder_for`] picks the builder for a [`Platform`].
//!
//! # Examples
//!
//! ```
//! use pdfmerge::command::{builder_for, Invocation, Platform};
//! use std::path::Path;
//!
//! let builder = builder_for(Platform::Shell);
//! let invocation = builder.build("pdftk", &["a.pdf", "my b.pdf"], Path::new("/tmp/out.pdf"));
//!
//! assert_eq!(
//!     invocation,
//!     Invocation::Shell {
//!         line: "pdftk a.pdf 'my b.pdf' cat output /tmp/out.pdf".to_string()
//!     }
//! );
//! ```

mod argv;
mod shell;

pub use argv::ArgvCommandBuilder;
pub use shell::ShellCommandBuilder;

use std::fmt;
use std::path::Path;

/// Fixed toolkit tokens following the input files.
pub const CAT_OUTPUT: [&str; 2] = ["cat", "output"];

/// Process invocation convention of the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// POSIX shell available; tokens are quoted and run through `sh -c`.
    Shell,
    /// No shell quoting convention; tokens are passed as separate arguments.
    ArgumentVector,
}

impl Platform {
    /// Platform the crate was compiled for.
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::ArgumentVector
        } else {
            Self::Shell
        }
    }
}

/// A fully built toolkit call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// One command line interpreted by the shell.
    Shell {
        /// Quoted command line.
        line: String,
    },
    /// Program started directly with an argument vector.
    Direct {
        /// Executable to start.
        program: String,
        /// Arguments in order.
        args: Vec<String>,
    },
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Shell { line } => write!(f, "{line}"),
            Self::Direct { program, args } => {
                write_direct_arg(f, program)?;
                for arg in args {
                    f.write_str(" ")?;
                    write_direct_arg(f, arg)?;
                }
                Ok(())
            }
        }
    }
}

/// Arguments that would not read back as one word are shown in debug quotes.
fn write_direct_arg(f: &mut fmt::Formatter<'_>, arg: &str) -> fmt::Result {
    if arg.is_empty() || arg.chars().any(|c| c.is_whitespace() || c == '"' || c == '\'') {
        write!(f, "{arg:?}")
    } else {
        f.write_str(arg)
    }
}

/// Strategy for turning paths into a toolkit invocation.
pub trait CommandBuilder: Send + Sync {
    /// Convert one input path into its command token.
    fn file_token(&self, file: &str) -> String;

    /// Convert the output path into its command token.
    fn target_token(&self, target: &Path) -> String;

    /// Wrap the complete argument list into an invocation of `executable`.
    fn invocation(&self, executable: &str, args: Vec<String>) -> Invocation;

    /// Build the toolkit call that concatenates `files` into `target`.
    fn build(&self, executable: &str, files: &[&str], target: &Path) -> Invocation {
        let mut args: Vec<String> = files.iter().map(|file| self.file_token(file)).collect();
        args.extend(CAT_OUTPUT.iter().map(|token| token.to_string()));
        args.push(self.target_token(target));

        self.invocation(executable, args)
    }
}

/// Select the command builder for `platform`.
pub fn builder_for(platform: Platform) -> Box<dyn CommandBuilder> {
    match platform {
        Platform::Shell => Box::new(ShellCommandBuilder),
        Platform::ArgumentVector => Box::new(ArgvCommandBuilder),
    }
}

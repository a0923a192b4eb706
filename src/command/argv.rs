use std::path::Path;

use super::{CommandBuilder, Invocation};
use crate::utils::strip_wildcard_delimiters;

/// Quote characters a caller may wrap a wildcard pattern in.
const WILDCARD_DELIMITERS: [char; 2] = ['"', '\''];

/// Passes paths to the toolkit as discrete arguments.
///
/// Paths are not rewritten, except that a wildcard pattern wrapped in a
/// quote pair loses the quotes so the toolkit sees the raw pattern.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArgvCommandBuilder;

impl CommandBuilder for ArgvCommandBuilder {
    fn file_token(&self, file: &str) -> String {
        strip_wildcard_delimiters(file, &WILDCARD_DELIMITERS).to_string()
    }

    fn target_token(&self, target: &Path) -> String {
        target.to_string_lossy().into_owned()
    }

    fn invocation(&self, executable: &str, args: Vec<String>) -> Invocation {
        Invocation::Direct {
            program: executable.to_string(),
            args,
        }
    }
}

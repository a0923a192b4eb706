use std::path::Path;

use super::{CommandBuilder, Invocation};
use crate::utils::{is_wildcard, normalize_separators, quote_shell_pattern, quote_shell_token};

/// Builds a single quoted command line for a POSIX shell.
///
/// Input paths get their backslashes turned into forward slashes before
/// quoting. In wildcard tokens only the `*` markers are left unquoted, so
/// the shell expands them into the matching files and nothing else.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellCommandBuilder;

impl CommandBuilder for ShellCommandBuilder {
    fn file_token(&self, file: &str) -> String {
        let file = normalize_separators(file);

        if is_wildcard(&file) {
            quote_shell_pattern(&file)
        } else {
            quote_shell_token(&file)
        }
    }

    fn target_token(&self, target: &Path) -> String {
        quote_shell_token(&target.to_string_lossy())
    }

    fn invocation(&self, executable: &str, args: Vec<String>) -> Invocation {
        let mut line = quote_shell_token(executable);
        for arg in &args {
            line.push(' ');
            line.push_str(arg);
        }

        Invocation::Shell { line }
    }
}

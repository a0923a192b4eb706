//! Utilities for turning file paths into toolkit command tokens.

/// Marker that asks the toolkit (or the shell in front of it) to expand a
/// pattern into several input files.
pub const WILDCARD: char = '*';

/// Characters that never need quoting in a POSIX shell word.
const SHELL_SAFE: &[char] = &['_', '/', ':', '-', '.', ',', '+', '@', '%'];

/// Check whether a path carries the wildcard marker.
pub fn is_wildcard(path: &str) -> bool {
    path.contains(WILDCARD)
}

/// Quote a string as a single POSIX shell word.
///
/// Words made only of safe characters are returned as-is. Anything else is
/// wrapped in single quotes, with embedded single quotes written as `'\''`.
///
/// ```
/// use pdfmerge::utils::quote_shell_token;
///
/// assert_eq!(quote_shell_token("a.pdf"), "a.pdf");
/// assert_eq!(quote_shell_token("my file.pdf"), "'my file.pdf'");
/// assert_eq!(quote_shell_token("it's.pdf"), r"'it'\''s.pdf'");
/// ```
pub fn quote_shell_token(word: &str) -> String {
    if !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || SHELL_SAFE.contains(&c))
    {
        return word.to_string();
    }

    format!("'{}'", word.replace('\'', r"'\''"))
}

/// Quote a wildcard pattern so the shell expands only its `*` markers.
///
/// Each run of characters between markers is quoted on its own and the
/// markers stay bare, so the result is still one shell word.
///
/// ```
/// use pdfmerge::utils::quote_shell_pattern;
///
/// assert_eq!(quote_shell_pattern("parts/*.pdf"), "parts/*.pdf");
/// assert_eq!(quote_shell_pattern("/my dir/*.pdf"), "'/my dir/'*.pdf");
/// ```
pub fn quote_shell_pattern(pattern: &str) -> String {
    pattern
        .split(WILDCARD)
        .map(|segment| {
            if segment.is_empty() {
                String::new()
            } else {
                quote_shell_token(segment)
            }
        })
        .collect::<Vec<_>>()
        .join(&WILDCARD.to_string())
}

/// Replace Windows-style separators with forward slashes.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

/// Remove one matching pair of `delimiters` around a wildcard token.
///
/// Tokens without the wildcard marker, or without a matching pair of
/// delimiters at both ends, are returned unchanged.
pub fn strip_wildcard_delimiters<'a>(token: &'a str, delimiters: &[char]) -> &'a str {
    if !is_wildcard(token) {
        return token;
    }

    let mut chars = token.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) if first == last && delimiters.contains(&first) => {
            &token[first.len_utf8()..token.len() - last.len_utf8()]
        }
        _ => token,
    }
}

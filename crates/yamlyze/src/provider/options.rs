use std::path::Path;

use tracing::warn;

/// Read a compile-flag file and split it into individual compiler arguments.
///
/// Returns `None` when the file cannot be read; an unreadable flag file is a
/// caller-level fatal error, not something to silently ignore.
pub fn read_compile_flags(path: &Path) -> Option<Vec<String>> {
    let data = match std::fs::read_to_string(path) {
        Ok(d) => d,
        Err(e) => {
            warn!("Couldn't open options file {}: {e}", path.display());
            return None;
        },
    };
    Some(split_compile_flags(&data))
}

/// Whitespace-split flag-file content into compiler arguments.
///
/// Escaped quotes (`\"`) are unescaped, empty tokens are dropped, and
/// `-Werror` is stripped so stray warnings in the analyzed source never turn
/// into hard parse failures.
pub fn split_compile_flags(data: &str) -> Vec<String> {
    data.split_whitespace()
        .map(|token| token.replace("\\\"", "\""))
        .filter(|token| !token.is_empty() && token != "-Werror")
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src/provider/options_tests.rs"]
mod tests;

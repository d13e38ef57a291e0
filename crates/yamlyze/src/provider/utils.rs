use std::path::Path;

/// Size sentinel for types whose byte size the provider cannot determine
/// (dependent types, incomplete types, unrecognized spellings).
pub const UNKNOWN_SIZE: i64 = -1;

/// Compare two file paths for equality, tolerating symlinks and relative
/// spellings of the same file.
///
/// When both sides resolve on disk, the canonical paths decide: two distinct
/// files sharing a basename are different files. The file-name fallback only
/// covers paths that cannot be canonicalized (virtual or deleted files).
pub fn paths_equivalent(
    a: &Path,
    b: &Path,
) -> bool {
    if a == b {
        return true;
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(ca), Ok(cb)) => ca == cb,
        _ => match (a.file_name(), b.file_name()) {
            (Some(fa), Some(fb)) => fa == fb,
            _ => false,
        },
    }
}

/// Split the return type out of a function's `qualType` spelling.
///
/// E.g. `"int (int, char *)"` -> `"int"`, `"char *(void)"` -> `"char *"`.
/// Spellings that do not end in a parameter list (unlikely for a function
/// declaration) are returned unchanged.
pub fn return_type_of(qual_type: &str) -> String {
    let s = qual_type.trim_end();
    if !s.ends_with(')') {
        return s.to_string();
    }

    let mut depth = 0usize;
    for (i, c) in s.char_indices().rev() {
        match c {
            ')' => depth += 1,
            '(' => {
                depth -= 1;
                if depth == 0 {
                    return s[..i].trim_end().to_string();
                }
            },
            _ => {},
        }
    }
    s.to_string()
}

/// Byte size of a type spelling, as far as the provider can resolve it.
///
/// The JSON AST dump does not carry type sizes, so only pointers, references
/// and the C fundamental types are resolved here; everything else reports
/// [`UNKNOWN_SIZE`].
pub fn type_byte_size(qual_type: &str) -> i64 {
    let mut s = qual_type.trim();

    loop {
        let before = s;
        for prefix in ["const ", "volatile ", "signed "] {
            if let Some(rest) = before.strip_prefix(prefix) {
                s = rest.trim_start();
                break;
            }
        }
        if before == s {
            break;
        }
    }

    if s.ends_with('*') || s.ends_with('&') {
        return 8;
    }

    match s {
        "bool" | "char" | "unsigned char" => 1,
        "short" | "unsigned short" => 2,
        "int" | "unsigned int" | "float" => 4,
        "long" | "unsigned long" | "long long" | "unsigned long long" | "double" => 8,
        "long double" => 16,
        _ => UNKNOWN_SIZE,
    }
}

#[cfg(test)]
#[path = "../../tests/src/provider/utils_tests.rs"]
mod tests;

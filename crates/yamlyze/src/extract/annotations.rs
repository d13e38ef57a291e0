use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::model::{FunctionDocs, FunctionEntry, TypeEntry};
use crate::provider::DocComment;

static CONTINUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)^\s*(.*?)(?:\s|\*)+$").unwrap());

const INVARIANT_PREFIX: &str = "invariant";

/// Normalize one paragraph of documentation text: strip the leading
/// whitespace and the trailing run of whitespace / `*` continuation
/// markers. Text without trailing noise passes through unchanged.
pub(crate) fn clean_text(raw: &str) -> String {
    match CONTINUATION.captures(raw) {
        Some(captures) => captures[1].to_string(),
        None => raw.to_string(),
    }
}

/// Apply a function's documentation to its entry: abstract and return
/// discussion, plus per-parameter direction and discussion.
///
/// Parameter documentation joins on the declared name only; a block naming
/// a parameter the function does not have is silently ignored.
pub(crate) fn apply_function_docs(
    entry: &mut FunctionEntry,
    doc: &DocComment,
) {
    let mut docs = FunctionDocs::default();
    if let Some(brief) = &doc.brief {
        docs.summary = Some(clean_text(brief));
    }
    if let Some(returns) = &doc.returns {
        docs.returns = Some(clean_text(returns));
    }
    if docs.summary.is_some() || docs.returns.is_some() {
        entry.docs = Some(docs);
    }

    for param in &doc.params {
        if let Some(arg) = entry.args.iter_mut().find(|a| a.name == param.name) {
            if let Some(direction) = &param.direction {
                arg.direction = Some(direction.clone());
            }
            if let Some(discussion) = &param.discussion {
                arg.docs = Some(clean_text(discussion));
            }
        }
    }
}

/// Scan a type alias's discussion blocks for invariant declarations and
/// merge each well-formed one into the entry's invariants mapping.
///
/// A malformed block yields one diagnostic and no entry; invariants already
/// parsed for the same type are left intact.
pub(crate) fn apply_invariants(
    entry: &mut TypeEntry,
    doc: &DocComment,
    type_name: &str,
) {
    for block in &doc.blocks {
        if !block.kind.starts_with(INVARIANT_PREFIX) {
            continue;
        }
        match parse_invariant(&block.text) {
            Ok((key, value)) => {
                entry.invariants.insert(key, value);
            },
            Err(reason) => {
                warn!("Could not parse invariant for type {type_name}: {reason}");
            },
        }
    }
}

/// Parse a discussion block's text as a single key/value YAML mapping.
///
/// Failures come back as a message instead of escaping the interpreter;
/// the caller reports them and drops that one annotation.
pub(crate) fn parse_invariant(text: &str) -> Result<(String, serde_yaml::Value), String> {
    let parsed: serde_yaml::Value = serde_yaml::from_str(text).map_err(|e| e.to_string())?;
    let mapping = parsed.as_mapping().ok_or("not a key/value mapping")?;
    let (key, value) = mapping.iter().next().ok_or("empty mapping")?;
    let key = key.as_str().ok_or("key is not a string")?;
    Ok((key.to_string(), value.clone()))
}

#[cfg(test)]
#[path = "../../tests/src/extract/annotations_tests.rs"]
mod tests;

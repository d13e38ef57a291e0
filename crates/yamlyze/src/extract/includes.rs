use std::path::Path;

use tracing::debug;

use crate::model::{IncludeEntry, SymbolModel};

/// Record the provider's inclusion trace into the model.
///
/// Entries are grouped under the included file's terminal filename and kept
/// in report order. Depth zero denotes the root file and is never entered.
/// This pass shares no state with the main traversal except the model.
pub fn record_includes(
    model: &mut SymbolModel,
    trace: &[(String, usize)],
) {
    for (path, level) in trace {
        if *level == 0 {
            continue;
        }
        let filename = Path::new(path)
            .file_name()
            .and_then(|f| f.to_str())
            .unwrap_or(path.as_str())
            .to_string();
        model.headers.entry(filename).or_default().push(IncludeEntry {
            path: path.clone(),
            level: *level,
        });
    }

    debug!("[includes] recorded {} header groups", model.headers.len());
}

#[cfg(test)]
#[path = "../../tests/src/extract/includes_tests.rs"]
mod tests;

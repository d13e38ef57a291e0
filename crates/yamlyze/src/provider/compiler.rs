use std::path::Path;
use std::process::Command;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::provider::clang_nodes::Node;

fn clang_command(args: &[String]) -> Command {
    let mut command = Command::new("clang");
    command.args(args);
    command
}

/// Run Clang's AST dump over a source file and deserialize the typed tree.
///
/// A non-zero exit status is tolerated as long as usable JSON came out: a
/// source file with diagnostics still produces a partial AST worth
/// extracting. No JSON at all means no translation unit, which is fatal to
/// the run.
pub fn run_ast_dump(
    file: &Path,
    compile_flags: &[String],
) -> Option<Node> {
    let mut args = vec![
        "-Xclang".to_string(),
        "-ast-dump=json".to_string(),
        "-fsyntax-only".to_string(),
        "-fno-color-diagnostics".to_string(),
    ];
    args.extend(compile_flags.iter().cloned());
    args.push(file.display().to_string());

    debug!("AST dump: clang {}", args.join(" "));

    let output = match clang_command(&args).output() {
        Ok(o) => o,
        Err(e) => {
            warn!("Failed to run AST dump: {e}");
            return None;
        },
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        for line in stderr.lines() {
            if line.contains("error:") {
                warn!("[ast-dump] compiler error: {line}");
            }
        }
        debug!("[ast-dump] exited with non-zero status (partial AST may still be usable)");
    }

    let stdout = String::from_utf8(output.stdout).ok()?;
    if stdout.is_empty() || !stdout.starts_with('{') {
        warn!("[ast-dump] produced no usable JSON for {}", file.display());
        return None;
    }

    debug!("[ast-dump] produced {} bytes of JSON for {}", stdout.len(), file.display());

    match serde_json::from_str::<Node>(&stdout) {
        Ok(root) => Some(root),
        Err(e) => {
            warn!("[ast-dump] failed to deserialize AST: {e}");
            None
        },
    }
}

/// Run Clang's header-inclusion trace (`-H`) and return the raw stderr text.
///
/// The trace lists every included file with its nesting depth encoded as a
/// run of leading dots; the root file itself never appears.
pub fn run_include_trace(
    file: &Path,
    compile_flags: &[String],
) -> Option<String> {
    let mut args = vec![
        "-H".to_string(),
        "-fsyntax-only".to_string(),
        "-fno-color-diagnostics".to_string(),
    ];
    args.extend(compile_flags.iter().cloned());
    args.push(file.display().to_string());

    debug!("Include trace: clang {}", args.join(" "));

    let output = match clang_command(&args).output() {
        Ok(o) => o,
        Err(e) => {
            warn!("Failed to run include trace: {e}");
            return None;
        },
    };

    String::from_utf8(output.stderr).ok()
}

static INCLUDE_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\.+) (.+)$").unwrap());

/// Parse `-H` stderr output into `(path, depth)` pairs in report order.
///
/// Diagnostics and other non-trace lines interleaved in the stream are
/// ignored.
pub fn parse_include_trace(stderr: &str) -> Vec<(String, usize)> {
    stderr
        .lines()
        .filter_map(|line| {
            let captures = INCLUDE_LINE.captures(line)?;
            Some((captures[2].to_string(), captures[1].len()))
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src/provider/compiler_tests.rs"]
mod tests;

//! Boundary to the AST provider: Clang invocation, typed node kinds,
//! compile-flag ingestion, and documentation-comment normalization.
//!
//! Everything here is glue around `clang -ast-dump=json`; the extraction
//! engine in [`crate::extract`] only ever sees the typed tree and the
//! normalized structures exposed from this module.

mod clang_nodes;
mod compiler;
mod docs;
mod options;
mod utils;

pub use clang_nodes::{Clang, DeclData, Node, node_file, resolve_loc};
pub use compiler::{parse_include_trace, run_ast_dump, run_include_trace};
pub use docs::{DocBlock, DocComment, DocParam, doc_comment};
pub use options::{read_compile_flags, split_compile_flags};
pub use utils::{UNKNOWN_SIZE, paths_equivalent, return_type_of, type_byte_size};

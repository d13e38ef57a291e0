pub mod extract;
pub mod model;
pub mod output;
pub mod provider;

pub use extract::{ExtractOptions, extract, record_includes};
pub use model::{
    AggregateKind, ArgumentEntry, FunctionEntry, IncludeEntry, MemberEntry, StorageClass, SymbolModel, TypeEntry,
    VariableClass, VariableEntry,
};
pub use output::{to_yaml, write_model};
pub use provider::{
    Clang, Node, doc_comment, parse_include_trace, paths_equivalent, read_compile_flags, run_ast_dump,
    run_include_trace, split_compile_flags,
};

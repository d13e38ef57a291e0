//! The AST-to-symbol-model extraction engine.
//!
//! [`dispatcher`] walks the translation unit and routes node kinds,
//! [`builder`] turns individual nodes into model entries, [`aggregate`]
//! introspects elaborated struct/enum bodies, [`annotations`] interprets
//! documentation comments, and [`includes`] records the header-inclusion
//! pass. Everything is synchronous and owns its model for the duration of
//! one run.

mod aggregate;
mod annotations;
mod builder;
mod dispatcher;
mod includes;

pub use dispatcher::{ExtractOptions, extract};
pub use includes::record_includes;

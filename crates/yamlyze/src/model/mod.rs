//! The symbol model: the nested document handed to the serializer.
//!
//! All name-keyed mappings are [`IndexMap`]s so the document preserves
//! first-insertion order and two runs over the same input serialize
//! identically. Re-declarations overwrite prior entries (last write wins);
//! nothing is ever removed within a run.

use indexmap::IndexMap;
use serde::Serialize;

/// Storage class of a function declaration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageClass {
    #[default]
    Normal,
    Static,
    Extern,
}

/// Storage class of a global-storage variable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableClass {
    #[default]
    Global,
    Static,
    Extern,
}

/// Classification of an elaborated aggregate behind a type alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateKind {
    Struct,
    Enum,
}

/// One formal parameter of a function, in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArgumentEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    /// Byte size as known to the provider; negative when unknown.
    pub size: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs: Option<String>,
}

/// Cleaned documentation extracted for a function.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FunctionDocs {
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(rename = "return", skip_serializing_if = "Option::is_none")]
    pub returns: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FunctionEntry {
    pub class: StorageClass,
    pub returns: String,
    pub args: Vec<ArgumentEntry>,
    /// Display names of call expressions lexically inside the body, in
    /// encounter order, duplicates retained.
    pub calls: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub docs: Option<FunctionDocs>,
}

/// A file- or namespace-scope variable. `class` is recorded only when the
/// lexical parent is the translation unit itself; the type always is.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VariableEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<VariableClass>,
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

/// A type alias. For elaborated aggregates `kind`, `members` and `values`
/// are filled by the aggregate introspector; `invariants` come from the
/// documentation comment.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TypeEntry {
    #[serde(rename = "type")]
    pub ty: String,
    pub invariants: IndexMap<String, serde_yaml::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<AggregateKind>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<MemberEntry>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub values: IndexMap<String, i64>,
}

/// One observed inclusion of a header. `level` is the nesting depth in the
/// inclusion stack; the root file (depth 0) is never entered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IncludeEntry {
    pub path: String,
    pub level: usize,
}

/// Root aggregate owned by a single extraction run.
#[derive(Debug, Default, Serialize)]
pub struct SymbolModel {
    pub functions: IndexMap<String, FunctionEntry>,
    pub variables: IndexMap<String, VariableEntry>,
    pub types: IndexMap<String, TypeEntry>,
    pub headers: IndexMap<String, Vec<IncludeEntry>>,
}

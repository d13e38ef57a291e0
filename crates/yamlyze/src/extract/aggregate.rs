use indexmap::IndexMap;

use crate::model::{AggregateKind, MemberEntry};
use crate::provider::{Clang, Node};

/// Flattened structure of an elaborated aggregate, returned by value and
/// merged into the in-progress type entry by the caller.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct AggregateDetails {
    pub kind: Option<AggregateKind>,
    pub members: Vec<MemberEntry>,
    pub values: IndexMap<String, i64>,
}

/// Walk a tag declaration's subtree and classify its direct and nested
/// children.
///
/// The walk recurses into every child regardless of classification, so
/// nested anonymous aggregates (a struct holding an inline enum) flatten
/// into the same `members`/`values` lists as the outer aggregate. That
/// flattening is a known limitation of the output shape, kept as-is.
pub(crate) fn introspect(tag: &Node) -> AggregateDetails {
    let mut details = AggregateDetails::default();
    let mut next_value = 0i64;
    walk(tag, &mut details, &mut next_value);
    details
}

fn walk(
    node: &Node,
    details: &mut AggregateDetails,
    next_value: &mut i64,
) {
    match &node.kind {
        Clang::RecordDecl(_) | Clang::CXXRecordDecl(_) => {
            details.kind = Some(AggregateKind::Struct);
        },
        Clang::EnumDecl(_) => {
            details.kind = Some(AggregateKind::Enum);
            *next_value = 0;
        },
        Clang::EnumConstantDecl(decl) => {
            if let Some(name) = decl.name() {
                let value = explicit_value(node).unwrap_or(*next_value);
                details.values.insert(name.to_string(), value);
                *next_value = value + 1;
            }
        },
        Clang::FieldDecl(decl) => {
            if let Some(name) = decl.name() {
                details.members.push(MemberEntry {
                    name: name.to_string(),
                    ty: decl.qual_type().unwrap_or_default().to_string(),
                });
            }
        },
        _ => {},
    }

    for child in &node.inner {
        walk(child, details, next_value);
    }
}

/// An enumerator's explicit initializer value, when the dump carries one.
/// Implicit enumerators continue from the previous value.
fn explicit_value(node: &Node) -> Option<i64> {
    node.inner.iter().find_map(|child| match &child.kind {
        Clang::ConstantExpr(expr) => expr.value.as_deref()?.parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
#[path = "../../tests/src/extract/aggregate_tests.rs"]
mod tests;

use crate::extract::aggregate;
use crate::extract::annotations;
use crate::extract::dispatcher::{ExtractOptions, Scope, TraversalContext};
use crate::model::{
    ArgumentEntry, FunctionEntry, StorageClass, SymbolModel, TypeEntry, VariableClass, VariableEntry,
};
use crate::provider::{Clang, DeclData, Node, doc_comment, return_type_of, type_byte_size};

fn storage_class(decl: &DeclData) -> StorageClass {
    match decl.storage_class.as_deref() {
        Some("static") => StorageClass::Static,
        Some("extern") => StorageClass::Extern,
        _ => StorageClass::Normal,
    }
}

fn variable_class(decl: &DeclData) -> VariableClass {
    match decl.storage_class.as_deref() {
        Some("static") => VariableClass::Static,
        Some("extern") => VariableClass::Extern,
        _ => VariableClass::Global,
    }
}

/// Build (or overwrite) the [`FunctionEntry`] for a function or method node
/// and return its display name so the dispatcher can set the call cursor.
///
/// No resolution step here is fatal: an unknown spelling becomes an empty
/// string and an unknown argument size the negative sentinel.
pub(crate) fn build_function(
    model: &mut SymbolModel,
    node: &Node,
    decl: &DeclData,
    options: &ExtractOptions,
) -> String {
    let name = decl.name().unwrap_or_default().to_string();
    let returns = return_type_of(decl.qual_type().unwrap_or_default());

    let args = node
        .inner
        .iter()
        .filter_map(|child| match &child.kind {
            Clang::ParmVarDecl(param) => {
                let ty = param.qual_type().unwrap_or_default();
                Some(ArgumentEntry {
                    name: param.name().unwrap_or_default().to_string(),
                    ty: ty.to_string(),
                    size: type_byte_size(ty),
                    direction: None,
                    docs: None,
                })
            },
            _ => None,
        })
        .collect();

    let mut entry = FunctionEntry {
        class: storage_class(decl),
        returns,
        args,
        calls: Vec::new(),
        docs: None,
    };

    if options.analyze_docs
        && let Some(doc) = doc_comment(node)
    {
        annotations::apply_function_docs(&mut entry, &doc);
    }

    model.functions.insert(name.clone(), entry);
    name
}

/// Build the [`VariableEntry`] for a variable with global storage duration.
///
/// The storage class is recorded only when the lexical parent is the
/// translation unit itself; the type is recorded regardless. Plain locals
/// (automatic storage) are not entered at all.
pub(crate) fn build_variable(
    model: &mut SymbolModel,
    decl: &DeclData,
    parent: Scope,
) {
    let Some(name) = decl.name() else {
        return;
    };

    let class = variable_class(decl);
    let has_global_storage = matches!(parent, Scope::TranslationUnit | Scope::Namespace)
        || class != VariableClass::Global;
    if !has_global_storage {
        return;
    }

    let entry = VariableEntry {
        class: (parent == Scope::TranslationUnit).then_some(class),
        ty: decl.qual_type().unwrap_or_default().to_string(),
    };
    model.variables.insert(name.to_string(), entry);
}

/// Build the [`TypeEntry`] for a type alias, interpreting invariant
/// annotations and introspecting an inline-defined aggregate when present.
pub(crate) fn build_type_alias<'a>(
    model: &mut SymbolModel,
    node: &'a Node,
    decl: &DeclData,
    ctx: &TraversalContext<'a>,
) {
    let Some(name) = decl.name() else {
        return;
    };

    let mut entry = TypeEntry {
        ty: decl.qual_type().unwrap_or_default().to_string(),
        ..Default::default()
    };

    if ctx.options.analyze_docs
        && let Some(doc) = doc_comment(node)
    {
        annotations::apply_invariants(&mut entry, &doc, name);
    }

    if let Some(tag) = owned_tag_decl(node, ctx) {
        let details = aggregate::introspect(tag);
        entry.kind = details.kind;
        entry.members = details.members;
        entry.values = details.values;
    }

    model.types.insert(name.to_string(), entry);
}

/// Resolve the aggregate body of an elaborated underlying type, when the
/// alias owns one and it was seen earlier in the walk.
fn owned_tag_decl<'a>(
    node: &Node,
    ctx: &TraversalContext<'a>,
) -> Option<&'a Node> {
    node.inner.iter().find_map(|child| match &child.kind {
        Clang::ElaboratedType(elaborated) => {
            let owned = elaborated.owned_tag_decl.as_ref()?;
            ctx.tag_decls.get(&owned.id.to_string()).copied()
        },
        _ => None,
    })
}

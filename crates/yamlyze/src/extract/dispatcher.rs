use std::collections::{HashMap, HashSet};
use std::path::Path;

use tracing::debug;

use crate::extract::builder;
use crate::model::SymbolModel;
use crate::provider::{Clang, Node, node_file, paths_equivalent};

/// Engine-level flags. Each one only enables a capture; none of them change
/// the shape of what is captured.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractOptions {
    /// Disable file-origin filtering (promote nodes from included headers).
    pub analyze_all_files: bool,
    /// Capture call expressions inside function bodies.
    pub analyze_calls: bool,
    /// Run the annotation interpreter over documentation comments.
    pub analyze_docs: bool,
    /// Run the header-inclusion pass.
    pub analyze_includes: bool,
    /// Keep functions that have no definition in this translation unit.
    pub process_as_header: bool,
}

/// Lexical scope of a node's parent, tracked through the walk so the
/// builder can tell translation-unit-level variables from nested ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scope {
    TranslationUnit,
    Namespace,
    Record,
    Function,
    Other,
}

/// Mutable state threaded through one traversal run.
///
/// `current_function` is the call-attribution cursor: the most recently
/// entered function, overwritten whenever another function declaration is
/// entered. `tag_decls` maps tag-declaration node ids to their nodes so a
/// typedef's `ownedTagDecl` reference can be resolved back to the aggregate
/// body (Clang's JSON dump places that body as a sibling of the typedef).
pub(crate) struct TraversalContext<'a> {
    pub options: &'a ExtractOptions,
    pub module_path: &'a Path,
    pub defined_functions: HashSet<String>,
    pub current_function: Option<String>,
    pub tag_decls: HashMap<String, &'a Node>,
}

/// Run one extraction over a parsed translation unit.
///
/// Visits every descendant of `root` exactly once, depth-first pre-order,
/// and returns the freshly built model.
pub fn extract(
    root: &Node,
    module_path: &Path,
    options: &ExtractOptions,
) -> SymbolModel {
    let mut ctx = TraversalContext {
        options,
        module_path,
        defined_functions: collect_defined_functions(root),
        current_function: None,
        tag_decls: HashMap::new(),
    };

    let mut model = SymbolModel::default();
    for child in &root.inner {
        visit(child, Scope::TranslationUnit, &mut ctx, &mut model);
    }

    debug!(
        "[extract] {} functions, {} variables, {} types from {}",
        model.functions.len(),
        model.variables.len(),
        model.types.len(),
        module_path.display(),
    );

    model
}

fn visit<'a>(
    node: &'a Node,
    parent: Scope,
    ctx: &mut TraversalContext<'a>,
    model: &mut SymbolModel,
) {
    // Scope filter: nodes originating from other files are rejected with
    // their whole subtree. Nodes without a resolved location pass.
    if !ctx.options.analyze_all_files
        && let Some(file) = node_file(&node.kind)
        && !paths_equivalent(Path::new(file), ctx.module_path)
    {
        return;
    }

    match &node.kind {
        Clang::FunctionDecl(decl) | Clang::CXXMethodDecl(decl) => {
            let Some(name) = decl.name() else {
                return;
            };
            if decl.is_implicit() {
                return;
            }
            // A name with no definition anywhere in this translation unit is
            // a pure forward declaration.
            if !ctx.options.process_as_header && !ctx.defined_functions.contains(name) {
                return;
            }
            let name = builder::build_function(model, node, decl, ctx.options);
            ctx.current_function = Some(name);
            visit_children(node, Scope::Function, ctx, model);
        },
        Clang::CallExpr(_) => {
            // Call expressions before any function has been opened are
            // dropped with no error.
            if ctx.options.analyze_calls
                && let Some(function) = ctx.current_function.clone()
                && let Some(callee) = callee_display_name(node)
                && let Some(entry) = model.functions.get_mut(&function)
            {
                entry.calls.push(callee);
            }
            visit_children(node, parent, ctx, model);
        },
        Clang::VarDecl(decl) => {
            builder::build_variable(model, decl, parent);
            visit_children(node, Scope::Other, ctx, model);
        },
        Clang::TypedefDecl(decl) => {
            // The alias's own sub-walk is self-contained; no recursion here.
            builder::build_type_alias(model, node, decl, ctx);
        },
        Clang::RecordDecl(_) | Clang::CXXRecordDecl(_) | Clang::EnumDecl(_) => {
            ctx.tag_decls.insert(node.id.to_string(), node);
            visit_children(node, Scope::Record, ctx, model);
        },
        Clang::NamespaceDecl(_) | Clang::LinkageSpecDecl(_) => {
            visit_children(node, Scope::Namespace, ctx, model);
        },
        _ => {
            // Default fallthrough: skip the node, still recurse, so nothing
            // is silently pruned.
            visit_children(node, parent, ctx, model);
        },
    }
}

fn visit_children<'a>(
    node: &'a Node,
    scope: Scope,
    ctx: &mut TraversalContext<'a>,
    model: &mut SymbolModel,
) {
    for child in &node.inner {
        visit(child, scope, ctx, model);
    }
}

/// Names of functions that have a body somewhere in this translation unit.
fn collect_defined_functions(root: &Node) -> HashSet<String> {
    let mut defined = HashSet::new();
    collect_defined(root, &mut defined);
    defined
}

fn collect_defined(
    node: &Node,
    defined: &mut HashSet<String>,
) {
    if let Clang::FunctionDecl(decl) | Clang::CXXMethodDecl(decl) = &node.kind
        && let Some(name) = decl.name()
        && node.inner.iter().any(|c| matches!(c.kind, Clang::CompoundStmt(_)))
    {
        defined.insert(name.to_string());
    }
    for child in &node.inner {
        collect_defined(child, defined);
    }
}

/// Display name of a call expression's callee: the first referenced
/// declaration in its subtree (the callee reference precedes the argument
/// expressions in the dump).
fn callee_display_name(node: &Node) -> Option<String> {
    for child in &node.inner {
        if let Clang::DeclRefExpr(expr) = &child.kind
            && let Some(referenced) = &expr.referenced_decl
            && let Some(name) = &referenced.name
        {
            return Some(name.clone());
        }
        if let Some(name) = callee_display_name(child) {
            return Some(name);
        }
    }
    None
}

#[cfg(test)]
#[path = "../../tests/src/extract/dispatcher_tests.rs"]
mod tests;

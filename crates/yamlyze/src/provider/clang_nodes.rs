use clang_ast::{BareSourceLocation, Id, SourceLocation, SourceRange};
use serde::Deserialize;

pub type Node = clang_ast::Node<Clang>;

/// Typed representation of Clang AST node kinds relevant to the extractor.
///
/// Each variant corresponds to a Clang AST node `"kind"` value.
/// The `Other` fallback efficiently skips all unrecognized node kinds.
#[derive(Deserialize)]
pub enum Clang {
    // --- Declarations ---
    FunctionDecl(DeclData),
    CXXMethodDecl(DeclData),
    ParmVarDecl(DeclData),
    VarDecl(DeclData),
    TypedefDecl(DeclData),
    FieldDecl(DeclData),
    RecordDecl(DeclData),
    CXXRecordDecl(DeclData),
    EnumDecl(DeclData),
    EnumConstantDecl(DeclData),
    NamespaceDecl(DeclData),
    LinkageSpecDecl(DeclData),

    // --- Statements and expressions ---
    CompoundStmt(StmtData),
    CallExpr(StmtData),
    DeclRefExpr(RefExprData),
    ConstantExpr(ConstantExprData),

    // --- Types ---
    ElaboratedType(ElaboratedTypeData),

    // --- Documentation comments ---
    FullComment(CommentData),
    ParagraphComment(CommentData),
    TextComment(TextCommentData),
    ParamCommandComment(ParamCommandData),
    BlockCommandComment(BlockCommandData),

    // --- Catch-all ---
    // The `loc` and `range` fields MUST be deserialized even for unrecognized
    // node kinds. The `clang-ast` crate tracks "current file" state across the
    // deserialization stream via `SourceLocation`; if we skip locations for
    // nodes like `ImportDecl` that set the file path, all subsequent nodes
    // inherit an empty file.
    #[allow(dead_code)]
    Other {
        #[serde(default)]
        loc: Option<SourceLocation>,
        #[serde(default)]
        range: Option<SourceRange>,
    },
}

/// Common data for all declaration nodes.
///
/// The `ty` field captures Clang's `type.qualType` string, which carries
/// the full type signature — e.g. `"int (int, char *)"` for functions or
/// `"unsigned int"` for variables. `storage_class` is present only when the
/// declaration spells one out (`static`, `extern`).
#[derive(Deserialize, Debug)]
pub struct DeclData {
    pub name: Option<String>,
    pub loc: Option<SourceLocation>,
    pub range: Option<SourceRange>,
    #[serde(rename = "isImplicit")]
    pub is_implicit: Option<bool>,
    #[serde(rename = "storageClass")]
    pub storage_class: Option<String>,
    #[serde(rename = "type")]
    pub ty: Option<QualType>,
}

/// Statement and expression nodes carry a range rather than a `loc`.
#[derive(Deserialize, Debug)]
pub struct StmtData {
    pub loc: Option<SourceLocation>,
    pub range: Option<SourceRange>,
}

/// Reference expression data (DeclRefExpr).
#[derive(Deserialize, Debug)]
pub struct RefExprData {
    pub loc: Option<SourceLocation>,
    pub range: Option<SourceRange>,
    #[serde(rename = "referencedDecl")]
    pub referenced_decl: Option<ReferencedDecl>,
}

/// Inline summary of a referenced declaration.
#[derive(Deserialize, Debug)]
pub struct ReferencedDecl {
    pub id: Id,
    pub name: Option<String>,
}

/// Constant expression, e.g. an explicit enumerator initializer. Clang
/// reports the evaluated value as a decimal string.
#[derive(Deserialize, Debug)]
pub struct ConstantExprData {
    pub loc: Option<SourceLocation>,
    pub range: Option<SourceRange>,
    pub value: Option<String>,
}

/// `ElaboratedType` under a `TypedefDecl`. When the aggregate is defined
/// inline (`typedef struct { ... } name;`), `ownedTagDecl` points at the
/// tag declaration node that carries the member list.
#[derive(Deserialize, Debug)]
pub struct ElaboratedTypeData {
    #[serde(rename = "ownedTagDecl")]
    pub owned_tag_decl: Option<ReferencedDecl>,
}

/// Structural comment nodes (FullComment, ParagraphComment).
#[derive(Deserialize, Debug)]
pub struct CommentData {
    pub loc: Option<SourceLocation>,
    pub range: Option<SourceRange>,
}

#[derive(Deserialize, Debug)]
pub struct TextCommentData {
    pub loc: Option<SourceLocation>,
    pub range: Option<SourceRange>,
    pub text: Option<String>,
}

/// `\param` documentation block. `direction` is Clang's resolved parameter
/// direction (`in`, `out`, `in,out`).
#[derive(Deserialize, Debug)]
pub struct ParamCommandData {
    pub loc: Option<SourceLocation>,
    pub range: Option<SourceRange>,
    pub param: Option<String>,
    pub direction: Option<String>,
}

/// Generic block command (`\return`, `\invariant`, ...). The command name
/// arrives without the leading backslash.
#[derive(Deserialize, Debug)]
pub struct BlockCommandData {
    pub loc: Option<SourceLocation>,
    pub range: Option<SourceRange>,
    pub name: Option<String>,
}

/// Clang's qualified type representation.
#[derive(Deserialize, Debug)]
pub struct QualType {
    #[serde(rename = "qualType")]
    pub qual_type: Option<String>,
}

impl DeclData {
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    pub fn is_implicit(&self) -> bool {
        self.is_implicit.unwrap_or(false)
    }
    pub fn qual_type(&self) -> Option<&str> {
        self.ty.as_ref().and_then(|t| t.qual_type.as_deref())
    }
}

/// Extract the best concrete source location from a [`SourceLocation`].
///
/// Prefers the expansion location (where a macro was invoked — the position
/// the user sees in their source file) over the spelling location (inside the
/// macro definition).
pub fn resolve_loc(loc: &SourceLocation) -> Option<&BareSourceLocation> {
    loc.expansion_loc.as_ref().or(loc.spelling_loc.as_ref())
}

/// The source file a node was resolved to, if any.
///
/// Declarations carry a `loc`; statements and expressions only a `range`,
/// whose begin location is used instead.
pub fn node_file(kind: &Clang) -> Option<&str> {
    let (loc, range) = match kind {
        Clang::FunctionDecl(d)
        | Clang::CXXMethodDecl(d)
        | Clang::ParmVarDecl(d)
        | Clang::VarDecl(d)
        | Clang::TypedefDecl(d)
        | Clang::FieldDecl(d)
        | Clang::RecordDecl(d)
        | Clang::CXXRecordDecl(d)
        | Clang::EnumDecl(d)
        | Clang::EnumConstantDecl(d)
        | Clang::NamespaceDecl(d)
        | Clang::LinkageSpecDecl(d) => (d.loc.as_ref(), d.range.as_ref()),
        Clang::CompoundStmt(s) | Clang::CallExpr(s) => (s.loc.as_ref(), s.range.as_ref()),
        Clang::DeclRefExpr(r) => (r.loc.as_ref(), r.range.as_ref()),
        Clang::ConstantExpr(c) => (c.loc.as_ref(), c.range.as_ref()),
        Clang::ElaboratedType(_) => (None, None),
        Clang::FullComment(c) | Clang::ParagraphComment(c) => (c.loc.as_ref(), c.range.as_ref()),
        Clang::TextComment(t) => (t.loc.as_ref(), t.range.as_ref()),
        Clang::ParamCommandComment(p) => (p.loc.as_ref(), p.range.as_ref()),
        Clang::BlockCommandComment(b) => (b.loc.as_ref(), b.range.as_ref()),
        Clang::Other {
            loc,
            range,
        } => (loc.as_ref(), range.as_ref()),
    };

    let bare = loc.and_then(resolve_loc).or_else(|| range.map(|r| &r.begin).and_then(resolve_loc))?;
    if bare.file.is_empty() {
        None
    } else {
        Some(&bare.file)
    }
}

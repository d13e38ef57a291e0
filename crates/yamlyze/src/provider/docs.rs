use crate::provider::clang_nodes::{Clang, Node};

/// A declaration's documentation comment, normalized into named sections.
///
/// This is the shape the extraction engine consumes: the first free
/// paragraph becomes the abstract, `\return` blocks the result discussion,
/// `\param` blocks the parameter list, and every other block command a
/// discussion block tagged with its command name. Paragraph text is
/// whitespace-normalized; stripping comment continuation markers is the
/// annotation interpreter's job.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DocComment {
    pub brief: Option<String>,
    pub returns: Option<String>,
    pub params: Vec<DocParam>,
    pub blocks: Vec<DocBlock>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocParam {
    pub name: String,
    pub direction: Option<String>,
    pub discussion: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocBlock {
    pub kind: String,
    pub text: String,
}

/// Resolve a declaration node's attached documentation, or report that there
/// is none (no `FullComment` child).
pub fn doc_comment(node: &Node) -> Option<DocComment> {
    let full = node.inner.iter().find(|c| matches!(c.kind, Clang::FullComment(_)))?;

    let mut doc = DocComment::default();
    for child in &full.inner {
        match &child.kind {
            Clang::ParagraphComment(_) => {
                if doc.brief.is_none() {
                    let text = paragraph_text(child);
                    if !text.trim().is_empty() {
                        doc.brief = Some(text);
                    }
                }
            },
            Clang::ParamCommandComment(p) => {
                if let Some(name) = &p.param {
                    doc.params.push(DocParam {
                        name: name.clone(),
                        direction: p.direction.clone(),
                        discussion: first_paragraph_text(child),
                    });
                }
            },
            Clang::BlockCommandComment(b) => {
                let name = b.name.as_deref().unwrap_or("");
                let text = first_paragraph_text(child).unwrap_or_default();
                match name {
                    "return" | "returns" | "result" => doc.returns = Some(text),
                    _ => doc.blocks.push(DocBlock {
                        kind: name.to_string(),
                        text,
                    }),
                }
            },
            _ => {},
        }
    }

    Some(doc)
}

/// Concatenate the `TextComment` leaves of a paragraph subtree. Each leaf is
/// one source line with its leading indentation still attached; leaves are
/// trimmed and joined with single spaces, blank leaves dropped.
fn paragraph_text(node: &Node) -> String {
    let mut out = String::new();
    collect_text(node, &mut out);
    out
}

fn collect_text(
    node: &Node,
    out: &mut String,
) {
    if let Clang::TextComment(t) = &node.kind
        && let Some(text) = &t.text
    {
        let text = text.trim();
        if !text.is_empty() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(text);
        }
    }
    for child in &node.inner {
        collect_text(child, out);
    }
}

fn first_paragraph_text(node: &Node) -> Option<String> {
    node.inner
        .iter()
        .find(|c| matches!(c.kind, Clang::ParagraphComment(_)))
        .map(paragraph_text)
}

#[cfg(test)]
#[path = "../../tests/src/provider/docs_tests.rs"]
mod tests;

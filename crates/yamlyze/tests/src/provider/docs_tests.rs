use serde_json::json;

use super::*;

fn parse(ast: serde_json::Value) -> Node {
    serde_json::from_value(ast).expect("valid AST fixture")
}

fn text(
    id: &str,
    text: &str,
) -> serde_json::Value {
    json!({"id": id, "kind": "TextComment", "text": text})
}

#[test]
fn documented_function_yields_all_sections() {
    let node = parse(json!({
        "id": "0x1", "kind": "FunctionDecl", "name": "copy_bytes",
        "type": {"qualType": "int (char *, int)"},
        "inner": [
            {"id": "0x10", "kind": "FullComment", "inner": [
                {"id": "0x11", "kind": "ParagraphComment", "inner": [
                    text("0x12", " Copies bytes into the destination"),
                ]},
                {"id": "0x13", "kind": "ParamCommandComment", "param": "dst", "direction": "out", "inner": [
                    {"id": "0x14", "kind": "ParagraphComment", "inner": [text("0x15", " Destination storage ")]},
                ]},
                {"id": "0x16", "kind": "BlockCommandComment", "name": "return", "inner": [
                    {"id": "0x17", "kind": "ParagraphComment", "inner": [text("0x18", " Bytes copied ")]},
                ]},
                {"id": "0x19", "kind": "BlockCommandComment", "name": "invariant", "inner": [
                    {"id": "0x1a", "kind": "ParagraphComment", "inner": [text("0x1b", " max_size: 64")]},
                ]},
            ]},
        ],
    }));

    let doc = doc_comment(&node).expect("documentation present");

    assert_eq!(doc.brief.as_deref(), Some("Copies bytes into the destination"));
    assert_eq!(doc.returns.as_deref(), Some("Bytes copied"));

    assert_eq!(doc.params.len(), 1);
    assert_eq!(doc.params[0].name, "dst");
    assert_eq!(doc.params[0].direction.as_deref(), Some("out"));
    assert_eq!(doc.params[0].discussion.as_deref(), Some("Destination storage"));

    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(doc.blocks[0].kind, "invariant");
    assert_eq!(doc.blocks[0].text, "max_size: 64");
}

#[test]
fn multi_line_paragraphs_join_with_single_spaces() {
    let node = parse(json!({
        "id": "0x1", "kind": "TypedefDecl", "name": "ring_t",
        "type": {"qualType": "struct ring"},
        "inner": [
            {"id": "0x10", "kind": "FullComment", "inner": [
                {"id": "0x11", "kind": "ParagraphComment", "inner": [
                    text("0x12", " A fixed-capacity"),
                    text("0x13", " ring buffer."),
                    text("0x14", "   "),
                ]},
            ]},
        ],
    }));

    let doc = doc_comment(&node).expect("documentation present");
    assert_eq!(doc.brief.as_deref(), Some("A fixed-capacity ring buffer."));
}

#[test]
fn undocumented_node_reports_no_documentation() {
    let node = parse(json!({
        "id": "0x1", "kind": "FunctionDecl", "name": "bare",
        "type": {"qualType": "void ()"},
    }));

    assert!(doc_comment(&node).is_none());
}

use super::*;
use crate::model::{ArgumentEntry, FunctionEntry};
use crate::provider::{DocBlock, DocParam};

fn argument(name: &str) -> ArgumentEntry {
    ArgumentEntry {
        name: name.to_string(),
        ty: "int".to_string(),
        size: 4,
        direction: None,
        docs: None,
    }
}

#[test]
fn clean_text_strips_trailing_continuation_noise() {
    assert_eq!(clean_text("  Computes the checksum   "), "Computes the checksum");
    assert_eq!(clean_text("Running total *\n * "), "Running total");
}

#[test]
fn clean_text_passes_through_text_without_trailing_noise() {
    assert_eq!(clean_text("Frees the buffer."), "Frees the buffer.");
}

#[test]
fn parse_invariant_accepts_a_single_key_value_pair() {
    let (key, value) = parse_invariant(" max_size: 64").expect("well-formed invariant");
    assert_eq!(key, "max_size");
    assert_eq!(value, serde_yaml::Value::Number(64.into()));
}

#[test]
fn parse_invariant_rejects_non_mapping_text() {
    assert!(parse_invariant("just some prose").is_err());
    assert!(parse_invariant("a: b: c").is_err());
}

#[test]
fn malformed_invariant_block_keeps_previously_parsed_ones() {
    let mut entry = TypeEntry::default();
    let doc = DocComment {
        blocks: vec![
            DocBlock {
                kind: "invariant".to_string(),
                text: " alignment: 8".to_string(),
            },
            DocBlock {
                kind: "invariant".to_string(),
                text: "broken: [unclosed".to_string(),
            },
            DocBlock {
                kind: "invariant".to_string(),
                text: " max_entries: 128".to_string(),
            },
            DocBlock {
                kind: "note".to_string(),
                text: " ignored: yes".to_string(),
            },
        ],
        ..Default::default()
    };

    apply_invariants(&mut entry, &doc, "ring_t");

    let keys: Vec<&str> = entry.invariants.keys().map(String::as_str).collect();
    assert_eq!(keys, ["alignment", "max_entries"]);
}

#[test]
fn function_docs_join_parameters_by_name() {
    let mut entry = FunctionEntry {
        args: vec![argument("count"), argument("buffer")],
        ..Default::default()
    };
    let doc = DocComment {
        brief: Some(" Copies bytes into the buffer ".to_string()),
        returns: Some(" Number of bytes copied ".to_string()),
        params: vec![
            DocParam {
                name: "buffer".to_string(),
                direction: Some("out".to_string()),
                discussion: Some(" Destination storage ".to_string()),
            },
            DocParam {
                name: "missing".to_string(),
                direction: Some("in".to_string()),
                discussion: None,
            },
        ],
        ..Default::default()
    };

    apply_function_docs(&mut entry, &doc);

    let docs = entry.docs.as_ref().expect("docs populated");
    assert_eq!(docs.summary.as_deref(), Some("Copies bytes into the buffer"));
    assert_eq!(docs.returns.as_deref(), Some("Number of bytes copied"));

    assert_eq!(entry.args[0].direction, None);
    assert_eq!(entry.args[1].direction.as_deref(), Some("out"));
    assert_eq!(entry.args[1].docs.as_deref(), Some("Destination storage"));
}

#[test]
fn empty_doc_comment_leaves_docs_unset() {
    let mut entry = FunctionEntry::default();
    apply_function_docs(&mut entry, &DocComment::default());
    assert!(entry.docs.is_none());
}

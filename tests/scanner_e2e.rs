//! End-to-end pipeline tests: mapping JSON -> table -> trie -> program ->
//! rendered C / in-process execution.

use pretty_assertions::assert_eq;
use tintgen::{generate_scanner, render_c, PatternTable, ScannerGenerator, Trie};

const MAPPING: &str = r#"{
    "blue": "00f",
    "mediumspringgreen": "00fa9a",
    "red": "f00",
    "white": "fff"
}"#;

/// NUL-terminated buffer with spare zero bytes for growth.
fn buffer(text: &str, pad: usize) -> Vec<u8> {
    let mut buf = text.as_bytes().to_vec();
    buf.extend(std::iter::repeat(0).take(pad + 1));
    buf
}

fn text_of(buf: &[u8]) -> &str {
    let end = buf.iter().position(|&b| b == 0).unwrap_or(buf.len());
    std::str::from_utf8(&buf[..end]).unwrap()
}

#[test]
fn css_buffer_substituted_end_to_end() {
    let table = PatternTable::load_json(MAPPING).unwrap();
    let program = generate_scanner(&table).unwrap();

    let mut buf = buffer("a { color: mediumspringgreen; border: 1px solid white }", 8);
    assert!(program.run(&mut buf));
    assert_eq!(
        text_of(&buf),
        "a { color: #00fa9a; border: 1px solid #fff }"
    );

    // Substituted output never matches an original key again.
    let after_first = buf.clone();
    assert!(!program.run(&mut buf));
    assert_eq!(buf, after_first);
}

#[test]
fn trie_recovers_the_full_key_set() {
    let table = PatternTable::load_json(MAPPING).unwrap();

    let mut trie = Trie::new();
    for key in table.keys() {
        trie.insert(key);
    }

    let keys_in: Vec<&str> = table.keys().collect();
    assert_eq!(trie.keys(), keys_in);
}

#[test]
fn program_carries_one_rewrite_per_key() {
    let table = PatternTable::load_json(MAPPING).unwrap();
    let program = generate_scanner(&table).unwrap();
    assert_eq!(program.rewrite_count(), table.len());
}

#[test]
fn rendered_c_matches_the_output_contract() {
    let table = PatternTable::load_json(MAPPING).unwrap();
    let program = ScannerGenerator::new()
        .with_function_name("replace_colnames")
        .generate(&table)
        .unwrap();
    let source = render_c(&program);

    assert!(source.contains("bool replace_colnames(char* buf) {"));
    assert!(source.contains("return modified;"));
    for (key, replacement) in table.iter() {
        // marker + replacement + trailing NUL
        let copy = format!("memcpy(buf, \"#{}\", {});", replacement, replacement.len() + 2);
        assert!(source.contains(&copy), "missing rewrite for {key:?}");
    }
}

#[test]
fn strict_prefix_pair_rewrites_with_the_longer_key() {
    let table =
        PatternTable::from_pairs([("green", "008000"), ("greenyellow", "adff2f")]).unwrap();
    let program = generate_scanner(&table).unwrap();

    let mut buf = buffer("greenyellow", 8);
    assert!(program.run(&mut buf));
    assert_eq!(text_of(&buf), "#adff2f");

    let mut buf = buffer("green", 8);
    assert!(program.run(&mut buf));
    assert_eq!(text_of(&buf), "#008000");
}

#[test]
fn malformed_tables_abort_before_generation() {
    assert!(PatternTable::from_pairs([("", "000")]).is_err());
    assert!(PatternTable::from_pairs([("off white", "faf0e6")]).is_err());
    assert!(PatternTable::from_pairs([("red", "f00"), ("red", "ff0000")]).is_err());
    assert!(PatternTable::load_json(r#"{"sea-green": "2e8b57"}"#).is_err());
}

#[test]
fn empty_table_generates_a_scanner_that_matches_nothing() {
    let table = PatternTable::from_pairs::<_, String, String>([]).unwrap();
    let program = generate_scanner(&table).unwrap();

    assert!(program.instrs.is_empty());

    let mut buf = buffer("red and blue", 4);
    let before = buf.clone();
    assert!(!program.run(&mut buf));
    assert_eq!(buf, before);
}

#![cfg(test)]
use crtgen_common::config::SessionDefaults;
use crtgen_common::session::Group;
use crtgen_core::markup::{Document, Key};
use crtgen_core::{ParseError, convert, generator, parser};

const LAB: &str = "
core:[
    admin@10.0.0.1:2022
    10.0.0.2
    edge:[
        netops@192.168.1.1
        192.168.1.2:8022
    ]
]
legacy:[
]
10.0.9.9
";

fn defaults() -> SessionDefaults {
    SessionDefaults::new("root", 22)
}

/// Host-shaped keys under `key` (itself included).
fn leaf_keys(key: &Key) -> usize {
    if key.is_leaf() {
        1
    } else {
        key.children.iter().map(leaf_keys).sum()
    }
}

/// Levels of `<key>` nesting below `key`.
fn key_depth(key: &Key) -> usize {
    key.children.iter().map(|child| 1 + key_depth(child)).max().unwrap_or(0)
}

fn nested(levels: usize) -> String {
    let mut text = String::new();
    for i in 0..levels {
        text.push_str(&format!("g{i}:[\n10.0.{}.{}\n", i / 256, i % 256));
    }
    text.push_str(&"]\n".repeat(levels));
    text
}

#[test]
fn leaf_count_matches_host_lines() {
    let tree: Group = parser::parse(LAB, &defaults()).expect("lab hierarchy parses");

    let host_lines: usize = LAB
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.ends_with(":[") && *line != "]")
        .count();

    assert_eq!(tree.host_count(), host_lines);
    assert_eq!(tree.host_count(), 5);
    assert_eq!(tree.group_count(), 3);
}

#[test]
fn markup_mirrors_tree_shape() -> anyhow::Result<()> {
    let tree: Group = parser::parse(LAB, &defaults())?;
    let doc: Document = generator::to_document(&tree);
    let sessions: &Key = &doc.keys[0];

    assert_eq!(leaf_keys(sessions), tree.host_count());
    assert_eq!(key_depth(sessions), tree.depth());

    let xml: String = generator::generate(&tree)?;
    assert_eq!(xml.matches("<string name=\"Hostname\">").count(), tree.host_count());
    assert!(xml.contains("<key name=\"legacy\"></key>"));
    Ok(())
}

#[test]
fn convert_resolves_defaults_per_host() -> anyhow::Result<()> {
    let xml: String = convert(LAB, &defaults())?;

    assert!(xml.contains(
        "<key name=\"192.168.1.2\">\n\
         \t\t\t\t\t<string name=\"Hostname\">192.168.1.2</string>\n\
         \t\t\t\t\t<string name=\"Username\">root</string>\n\
         \t\t\t\t\t<string name=\"Output Transformer Name\">UTF-8</string>\n\
         \t\t\t\t\t<dword name=\"[SSH2] Port\">8022</dword>\n\
         \t\t\t\t\t<dword name=\"ANSI Color\">1</dword>"
    ));
    assert!(xml.contains("<string name=\"Username\">netops</string>"));
    Ok(())
}

#[test]
fn convert_surfaces_parse_errors() {
    let err = convert("a:[\nhost:ssh\n]", &defaults()).unwrap_err();

    assert!(matches!(
        err,
        crtgen_core::Error::Parse(ParseError::InvalidPort { .. })
    ));
    assert!(err.to_string().starts_with("invalid port"));
}

#[test]
fn unbalanced_input_never_parses() {
    for text in ["a:[", "a:[\nb:[\n1.1.1.1\n]", "1.1.1.1\n]", "a:[\n]\n]"] {
        assert!(
            matches!(
                parser::parse(text, &defaults()),
                Err(ParseError::UnclosedGroup { .. })
            ),
            "input {text:?}"
        );
    }
}

#[test]
fn deepest_accepted_hierarchy_converts() -> anyhow::Result<()> {
    let levels: usize = parser::MAX_DEPTH;

    let tree: Group = parser::parse(&nested(levels), &defaults())?;
    let doc: Document = generator::to_document(&tree);
    let xml: String = generator::generate(&tree)?;

    assert_eq!(tree.host_count(), levels);
    assert_eq!(leaf_keys(&doc.keys[0]), levels);
    assert_eq!(key_depth(&doc.keys[0]), tree.depth());
    assert!(xml.ends_with("</VanDyke>"));
    Ok(())
}

#[test]
fn overly_deep_hierarchy_is_an_error() {
    let err = convert(&nested(20_000), &defaults()).unwrap_err();

    assert!(matches!(
        err,
        crtgen_core::Error::Parse(ParseError::TooDeep { limit }) if limit == parser::MAX_DEPTH
    ));
}

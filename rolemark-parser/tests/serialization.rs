//! Serialized output of parsed documents
//!
//! Compact JSON is the format downstream tools consume, so its exact shape is pinned with
//! inline snapshots.

use rolemark_parser::rolemark::formats::to_yaml;
use rolemark_parser::rolemark::testing::factories::{
    end_of_input, fence, file_end, file_start, newline, stream, text,
};
use rolemark_parser::{parse, parse_str, serialize};

#[test]
fn test_file_block_json() {
    let mut tokens = stream(vec![
        file_start("x.py"),
        newline(),
        fence("python"),
        newline(),
        text("print(1)"),
        fence(""),
        newline(),
        file_end("x.py"),
        newline(),
        end_of_input(),
    ]);
    let root = parse(&mut tokens);

    insta::assert_snapshot!(
        serialize(&root, false).unwrap(),
        @r#"{"Type":"Root","Content":"","Children":[{"Type":"File","Content":"","Name":"x.py","Language":"python","Children":[{"Type":"Text","Content":"print(1)"}]},{"Type":"EndOfInput","Content":""}]}"#
    );
}

#[test]
fn test_conversation_json() {
    let root = parse_str("System: be brief\nUser:\nls?\nAI:\n```sh\nls\n```\n");

    insta::assert_snapshot!(
        serialize(&root, false).unwrap(),
        @r#"{"Type":"Root","Content":"","Children":[{"Type":"Role","Content":"System:","Name":"system","Children":[{"Type":"Text","Content":" be brief\n"}]},{"Type":"Role","Content":"User:","Name":"user","Children":[{"Type":"Text","Content":"ls?\n"}]},{"Type":"Role","Content":"AI:","Name":"ai","Children":[{"Type":"CodeBlock","Content":"","Language":"sh","Children":[{"Type":"Text","Content":"ls\n"}]}]},{"Type":"EndOfInput","Content":""}]}"#
    );
}

#[test]
fn test_plain_prose_json() {
    let root = parse_str("just text\nno markers");

    insta::assert_snapshot!(
        serialize(&root, false).unwrap(),
        @r#"{"Type":"Root","Content":"","Children":[{"Type":"Text","Content":"just text\nno markers"},{"Type":"EndOfInput","Content":""}]}"#
    );
}

#[test]
fn test_pretty_and_yaml_agree_on_fields() {
    let root = parse_str("USER:\nhi\n");
    let pretty = serialize(&root, true).unwrap();
    let yaml = to_yaml(&root).unwrap();

    for field in ["Type", "Content", "Name", "Children"] {
        assert!(pretty.contains(&format!("\"{}\"", field)), "json lacks {}", field);
        assert!(yaml.contains(&format!("{}:", field)), "yaml lacks {}", field);
    }
    assert!(!pretty.contains("Language"));
}

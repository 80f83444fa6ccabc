//! Whole-file fixtures pinning section boundaries and blank-line handling.

use insta::{assert_json_snapshot, assert_snapshot};
use sidedoc_core::{Section, Segmenter, segment};

fn listing(sections: &[Section]) -> String {
    let mut out = Vec::new();
    for (i, section) in sections.iter().enumerate() {
        out.push(format!("section {i}"));
        out.push("comment:".to_string());
        out.extend(section.comment.split('\n').map(|l| format!("|{l}")));
        out.push("code:".to_string());
        out.extend(section.code.split('\n').map(|l| format!("|{l}")));
    }
    out.join("\n")
}

#[test]
fn test_blank_lines_are_kept_one_for_one() {
    let sections = segment(include_str!("fixtures/blank_lines.php"));
    assert_snapshot!(listing(&sections), @r#"
    section 0
    comment:
    |
    |Greeter.
    |
    |Says hello.
    |
    code:
    |function greet($name) {
    |
    |    return "Hello, $name";
    |}
    |
    |
    section 1
    comment:
    |Entry point.
    |Runs once.
    code:
    |greet("world");
    "#);
}

#[test]
fn test_python_file_uses_hash_comments() {
    let source = "#!/usr/bin/env python\n# Adds.\ndef add(a, b):\n    return a + b\n";
    let sections = Segmenter::for_extension("py").segment(source);
    assert_json_snapshot!(sections, @r#"
    [
      {
        "comment": "Adds.",
        "code": "def add(a, b):\n    return a + b"
      }
    ]
    "#);
}

#[test]
fn test_comment_after_code_in_same_run() {
    let sections = segment("a();\n// one\n// two\nb();\n/**\n * three\n */\nc();\n");
    assert_eq!(
        sections,
        vec![
            Section::new("", "a();"),
            Section::new("one\ntwo", "b();"),
            Section::new("\nthree\n", "c();"),
        ]
    );
}

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn sidedoc(dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sidedoc"));
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn fixture(dir: &Path, rel: &str, contents: &str) {
    let path = dir.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

#[test]
fn test_help() {
    let dir = tempfile::tempdir().unwrap();
    sidedoc(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--no-prologue"))
        .stdout(predicate::str::contains("--dump-sections"));
}

#[test]
fn test_writes_page_and_reports_progress() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path(), "a.php", "<?php\n// Hello.\necho 1;\n");

    sidedoc(dir.path())
        .arg("a.php")
        .assert()
        .success()
        .stderr(predicate::str::contains("Generating documentation: a.php"));

    let html = fs::read_to_string(dir.path().join("docs/a.php.html")).unwrap();
    assert!(html.contains("<div class=\"doc\">Hello.</div>"));
    assert!(html.contains("<pre class=\"brush: php\">echo 1;</pre>"));
    assert!(!html.contains("&lt;?php"));
}

#[test]
fn test_quiet_hides_progress() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path(), "a.js", "x();\n");

    sidedoc(dir.path())
        .args(["--quiet", "a.js"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
    assert!(dir.path().join("docs/a.js.html").exists());
}

#[test]
fn test_navigation_links_are_relative() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path(), "index.php", "// Root\nx();\n");
    fixture(dir.path(), "src/lib/util.php", "// Util\ny();\n");

    sidedoc(dir.path())
        .args(["-o", "site", "index.php", "src/lib/util.php"])
        .assert()
        .success();

    let util = fs::read_to_string(dir.path().join("site/src/lib/util.php.html")).unwrap();
    assert!(util.contains("href=\"../../index.php.html\""));
    assert!(util.contains("<title>util.php</title>"));
    let index = fs::read_to_string(dir.path().join("site/index.php.html")).unwrap();
    assert!(index.contains("href=\"src/lib/util.php.html\""));
}

#[test]
fn test_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    sidedoc(dir.path())
        .arg("nope.php")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("Error: Failed to read file"));
    assert!(!dir.path().join("docs").exists());
}

#[test]
fn test_invalid_prologue_pattern_fails() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path(), "a.php", "x();\n");
    sidedoc(dir.path())
        .args(["--prologue", "(", "a.php"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid prologue pattern"));
}

#[test]
fn test_dump_sections_prints_json() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path(), "a.py", "#!/usr/bin/env python\n# Greets.\nprint('hi')\n");

    let output = sidedoc(dir.path())
        .args(["--dump-sections", "a.py"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    insta::assert_json_snapshot!(json, @r#"
    [
      {
        "path": "a.py",
        "sections": [
          {
            "code": "print('hi')",
            "comment": "Greets."
          }
        ]
      }
    ]
    "#);
    assert!(!dir.path().join("docs").exists());
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path(), "a.php", "x();\n");
    sidedoc(dir.path())
        .args(["--dry-run", "a.php"])
        .assert()
        .success()
        .stderr(predicate::str::contains("nothing written"));
    assert!(!dir.path().join("docs").exists());
}

#[test]
fn test_no_prologue_keeps_opening_tag() {
    let dir = tempfile::tempdir().unwrap();
    fixture(dir.path(), "a.php", "<?php\nx();\n");
    sidedoc(dir.path())
        .args(["--no-prologue", "a.php"])
        .assert()
        .success();
    let html = fs::read_to_string(dir.path().join("docs/a.php.html")).unwrap();
    assert!(html.contains("&lt;?php\nx();"));
}

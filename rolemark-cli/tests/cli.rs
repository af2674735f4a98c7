use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

const CONVERSATION: &str = "\
USER:
Write a script.
AI:
Here you go.
File: bin/run.sh
```sh
echo hi
```
EOF_bin/run.sh
Run it with:
```sh
sh bin/run.sh
```
";

fn write_input(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("conversation.txt");
    fs::write(&path, CONVERSATION).unwrap();
    path
}

#[test]
fn prints_treeviz_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path());

    let mut cmd = cargo_bin_cmd!("rolemark");
    cmd.current_dir(dir.path()).arg(&input);

    cmd.assert().success().stdout(
        predicate::str::contains("⧉ 2 nodes")
            .and(predicate::str::contains("§ ai"))
            .and(predicate::str::contains("/ bin/run.sh (sh)")),
    );
}

#[test]
fn prints_compact_json_from_stdin() {
    let mut cmd = cargo_bin_cmd!("rolemark");
    cmd.arg("-")
        .arg("--format")
        .arg("ast-json-compact")
        .write_stdin("File: a.txt\n```\nhello\n```\nEOF_a.txt\n");

    cmd.assert().success().stdout(
        "{\"Type\":\"Root\",\"Content\":\"\",\"Children\":[{\"Type\":\"File\",\"Content\":\"\",\"Name\":\"a.txt\",\"Children\":[{\"Type\":\"Text\",\"Content\":\"hello\\n\"}]},{\"Type\":\"EndOfInput\",\"Content\":\"\"}]}\n",
    );
}

#[test]
fn prints_simple_tokens() {
    let mut cmd = cargo_bin_cmd!("rolemark");
    cmd.args(["-", "--format", "token-simple"])
        .write_stdin("AI: ok\n```\n");

    cmd.assert()
        .success()
        .stdout("<role:ai><text: ok><newline>\n<fence:><newline>\n<end>\n");
}

#[test]
fn extracts_files() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path());
    let out = dir.path().join("out");

    let mut cmd = cargo_bin_cmd!("rolemark");
    cmd.arg(&input).arg("--extract").arg(&out);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("run.sh"));
    assert_eq!(
        fs::read_to_string(out.join("bin").join("run.sh")).unwrap(),
        "echo hi\n"
    );
}

#[test]
fn refuses_escaping_file_names() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");

    let mut cmd = cargo_bin_cmd!("rolemark");
    cmd.arg("-")
        .arg("--extract")
        .arg(&out)
        .write_stdin("File: ../evil.sh\n```\nrm -rf /\n```\nEOF_../evil.sh\n");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Refusing to write '../evil.sh'"));
    assert!(!dir.path().join("evil.sh").exists());
}

#[test]
fn prints_prose_for_one_role() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_input(dir.path());

    let mut cmd = cargo_bin_cmd!("rolemark");
    cmd.arg(&input).arg("--role").arg("USER");

    cmd.assert().success().stdout("Write a script.\n");
}

#[test]
fn role_and_format_cannot_be_combined() {
    let mut cmd = cargo_bin_cmd!("rolemark");
    cmd.args(["missing.txt", "--role", "user", "--format", "ast-json"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn config_file_changes_roles_and_format() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("custom.toml");
    fs::write(
        &config,
        "[lexer]\nroles = [\"human\", \"bot\", \"x\", \"y\"]\n\n[output]\nformat = \"ast-json-compact\"\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("rolemark");
    cmd.arg("-")
        .arg("--config")
        .arg(&config)
        .write_stdin("Human: hi\n");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"Type\":\"Role\",\"Content\":\"Human:\",\"Name\":\"human\""));
}

#[test]
fn rejects_unknown_format() {
    let mut cmd = cargo_bin_cmd!("rolemark");
    cmd.args(["missing.txt", "--format", "xml"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format 'xml'"));
}

#[test]
fn lists_formats() {
    let mut cmd = cargo_bin_cmd!("rolemark");
    cmd.arg("--list-formats");

    cmd.assert().success().stdout(
        predicate::str::contains("ast-treeviz").and(predicate::str::contains("token-simple")),
    );
}

//! Integration tests that run the CLI binary.

use std::io::Write;
use std::process::Stdio;

fn bin() -> std::process::Command {
    // CARGO_BIN_EXE_<name> uses the binary target name; hyphens require concat! for env!()
    let bin = env!(concat!("CARGO_BIN_EXE_tip", "-", "segmenter"));
    let mut cmd = std::process::Command::new(bin);
    cmd.env_remove("TIP_SEGMENTER_DATA_DIR")
        .env_remove("TIP_SEGMENTER_LANG")
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn cli_help_succeeds_and_outputs_usage() {
    let output = bin()
        .arg("--help")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("segment"), "expected usage text in output");
}

#[test]
fn cli_version_succeeds() {
    let output = bin()
        .arg("--version")
        .output()
        .expect("binary not found - run cargo build first");

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("tip-segmenter"));
}

#[test]
fn cli_segment_outputs_json_segments() {
    let output = bin()
        .args([
            "segment",
            "Visit the **Louvre** museum",
            "-k",
            "Louvre=World's largest art museum",
        ])
        .output()
        .expect("run");

    assert_eq!(
        stdout_json(&output),
        serde_json::json!([
            {"type": "text", "content": "Visit the "},
            {"type": "highlight", "content": "Louvre", "info": "World's largest art museum"},
            {"type": "text", "content": " museum"},
        ])
    );
}

#[test]
fn cli_segment_reads_stdin() {
    let mut child = bin()
        .args(["segment", "-", "--format", "plain"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(b"Say 'bonjour' to locals\n")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Say bonjour to locals\n"
    );
}

#[test]
fn cli_segment_highlights_file() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let path = tmp.path().join("highlights.json");
    std::fs::write(&path, r#"[{"keyword":"Seine","info":"River through Paris"}]"#)
        .expect("write");

    let output = bin()
        .args(["segment", "Walk along the Seine", "--format", "plain"])
        .arg("--highlights")
        .arg(&path)
        .output()
        .expect("run");

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Walk along the Seine[1]\n  [1] Seine: River through Paris\n"
    );
}

#[test]
fn cli_segment_rejects_short_info() {
    let output = bin()
        .args(["segment", "Louvre", "-k", "Louvre=Art"])
        .output()
        .expect("run");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("at least 5 characters"), "got: {}", stderr);
}

#[test]
fn cli_segment_rejects_malformed_pair() {
    let output = bin()
        .args(["segment", "Louvre", "-k", "Louvre"])
        .output()
        .expect("run");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("KEYWORD=INFO"));
}

#[test]
fn cli_tips_renders_visible_tips_by_votes() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    std::fs::write(
        tmp.path().join("tips-en.json"),
        r#"{"tips":[
            {"id":"1","title":"Museums","description":"Visit the **Louvre** early",
             "category":"CULTURE","votes":2,
             "highlights":[{"keyword":"Louvre","info":"Art museum"}],"status":"approved"},
            {"id":"2","title":"Hidden","description":"Not yet","category":"FOOD",
             "votes":9,"highlights":[],"status":"pending"},
            {"id":"3","title":"Bread","description":"Buy a 'baguette'","category":"FOOD",
             "votes":5,"highlights":[],"status":"approved"}
        ]}"#,
    )
    .expect("write");

    let output = bin()
        .args(["tips", "--lang", "en", "--format", "json"])
        .arg("--data-dir")
        .arg(tmp.path())
        .output()
        .expect("run");

    let json = stdout_json(&output);
    let tips = json.as_array().expect("array");
    assert_eq!(tips.len(), 2);
    assert_eq!(tips[0]["id"], "3");
    assert_eq!(tips[0]["text"], "Buy a baguette");
    assert_eq!(tips[1]["id"], "1");
    assert_eq!(
        tips[1]["segments"][1],
        serde_json::json!({"type": "highlight", "content": "Louvre", "info": "Art museum"})
    );

    let output = bin()
        .args(["tips", "--lang", "en", "--all", "--format", "plain"])
        .arg("--data-dir")
        .arg(tmp.path())
        .output()
        .expect("run");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Hidden [FOOD] (9 votes)\nNot yet\n"));
    assert!(stdout.contains("Visit the Louvre[1] early\n  [1] Louvre: Art museum\n"));
}

#[test]
fn cli_tips_missing_store_is_empty() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .args(["tips", "--format", "json"])
        .env("TIP_SEGMENTER_DATA_DIR", tmp.path())
        .output()
        .expect("run");

    assert_eq!(stdout_json(&output), serde_json::json!([]));
}

#[test]
fn cli_tips_unknown_language_env_fails() {
    let tmp = tempfile::TempDir::new().expect("temp dir");
    let output = bin()
        .arg("tips")
        .env("TIP_SEGMENTER_LANG", "fr")
        .current_dir(tmp.path())
        .output()
        .expect("run");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("TIP_SEGMENTER_LANG"));
}

//! CLI tests for `psm plan`.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn psm() -> Command {
    let mut cmd = Command::cargo_bin("psm").expect("psm binary should exist");
    cmd.env_remove("RUST_LOG").env_remove("PSM_LOG");
    cmd
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

const CONFIG: &str = r#"{
  "project": {"name": "Northwind Outfitters", "source_url": "https://northwind.example"},
  "scope": {"max_pages": 2, "respect_robots_txt": false},
  "capture": {"screenshots": {"desktop": true}}
}"#;

#[test]
fn prints_markdown_to_stdout() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "config.json", CONFIG);
    let urls = write(
        &dir,
        "urls.json",
        r#"["https://northwind.example/", "https://northwind.example/shop", "https://northwind.example/about"]"#,
    );
    psm()
        .arg("plan")
        .arg(&config)
        .arg("--urls-json")
        .arg(&urls)
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "# Run Plan Preview: Northwind Outfitters\n",
        ))
        .stdout(predicate::str::contains(
            "- Truncated to `max_pages`; 1 additional URLs not shown\n",
        ))
        .stdout(predicate::str::contains(
            "- robots.txt respect is disabled; confirm policy allows this.\n",
        ))
        .stdout(predicate::str::ends_with(
            "_Do not begin crawling until this run plan is reviewed._\n",
        ));
}

#[test]
fn writes_markdown_to_output_file() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "config.json", CONFIG);
    let out = dir.path().join("run-plan.md");
    psm()
        .arg("plan")
        .arg(&config)
        .arg("--output")
        .arg(&out)
        .assert()
        .success()
        .stdout("");
    let markdown = fs::read_to_string(&out).unwrap();
    assert!(markdown.contains("- No URLs selected yet; crawl plan is incomplete.\n"));
}

#[test]
fn summary_format() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "config.json", CONFIG);
    let urls = write(&dir, "urls.json", r#"{"urls": ["https://northwind.example/"]}"#);
    psm()
        .args(["-f", "summary", "plan"])
        .arg(&config)
        .arg("--urls-json")
        .arg(&urls)
        .assert()
        .success()
        .stdout("Run plan rendered (1 URL(s) selected, workload fast)\n");
}

#[test]
fn json_envelope_carries_plan() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "config.json", CONFIG);
    let output = psm()
        .args(["plan", "--format", "json"])
        .arg(&config)
        .output()
        .unwrap();
    assert!(output.status.success());
    let envelope: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(envelope["command"], "plan");
    assert_eq!(envelope["status"], "rendered");
    assert_eq!(envelope["plan"]["project"]["name"], "Northwind Outfitters");
    assert!(envelope["markdown"]
        .as_str()
        .unwrap()
        .starts_with("# Run Plan Preview"));
}

#[test]
fn unsupported_url_shape_fails() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "config.json", CONFIG);
    let urls = write(&dir, "urls.json", r#""https://northwind.example/""#);
    psm()
        .arg("plan")
        .arg(&config)
        .arg("--urls-json")
        .arg(&urls)
        .assert()
        .code(1)
        .stdout("ERROR: URL input must be a list or an object with 'urls' or 'pages'\n");
}

#[test]
fn unwritable_output_fails() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "config.json", CONFIG);
    let out = dir.path().join("missing-dir").join("plan.md");
    psm()
        .arg("plan")
        .arg(&config)
        .arg("--output")
        .arg(&out)
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with("ERROR: failed to write run plan to "));
}

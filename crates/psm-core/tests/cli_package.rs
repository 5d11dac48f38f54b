//! CLI tests for `psm check-package`.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const REQUIRED: [&str; 14] = [
    "reports/executive-summary.md",
    "reports/source-audit.md",
    "reports/brand-dna.md",
    "reports/accessibility-audit.md",
    "reports/preserve-normalize-improve-exclude.md",
    "tokens/tokens.json",
    "tokens/tokens.css",
    "tokens/tailwind.theme.js",
    "components/component-library-spec.md",
    "components/component-contracts.json",
    "patterns/page-template-patterns.md",
    "evidence/crawl-manifest.json",
    "evidence/page-weights.json",
    "evidence/extraction-confidence.json",
];

fn psm() -> Command {
    let mut cmd = Command::cargo_bin("psm").expect("psm binary should exist");
    cmd.env_remove("PSM_OUTPUT_DIR").env_remove("RUST_LOG");
    cmd
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn build_package(root: &Path) {
    for rel in REQUIRED {
        write(root, rel, "{}");
    }
    write(
        root,
        "tokens/tokens.json",
        r#"{"color": {}, "typography": {}, "spacing": {}, "radius": {},
            "shadow": {}, "border": {}, "motion": {}, "layout": {}}"#,
    );
    write(
        root,
        "evidence/crawl-manifest.json",
        r#"{"source_url": "https://a.example", "crawl_mode": "sitemap", "pages": []}"#,
    );
    write(root, "evidence/page-weights.json", r#"{"clusters": [], "pages": []}"#);
    write(root, "evidence/extraction-confidence.json", r#"{"threshold": 0.7}"#);
    write(
        root,
        "reports/preserve-normalize-improve-exclude.md",
        "Preserve Normalize Improve Exclude\n",
    );
    write(root, "reports/executive-summary.md", "Brand-faithful, not a clone.\n");
}

#[test]
fn complete_package_passes() {
    let dir = TempDir::new().unwrap();
    build_package(dir.path());
    psm()
        .arg("check-package")
        .arg(dir.path())
        .assert()
        .success()
        .stdout("Validation passed with 0 warning(s)\n");
}

#[test]
fn default_root_is_design_system_output() {
    let dir = TempDir::new().unwrap();
    build_package(&dir.path().join("design-system-output"));
    psm()
        .current_dir(dir.path())
        .arg("check-package")
        .assert()
        .success();
}

#[test]
fn env_overrides_default_root() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("deliverables");
    build_package(&root);
    psm()
        .current_dir(dir.path())
        .env("PSM_OUTPUT_DIR", &root)
        .arg("check-package")
        .assert()
        .success();
}

#[test]
fn missing_files_fail_with_count() {
    let dir = TempDir::new().unwrap();
    build_package(dir.path());
    fs::remove_file(dir.path().join("tokens/tailwind.theme.js")).unwrap();
    psm()
        .arg("check-package")
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(predicate::str::contains("ERROR: Missing required file: "))
        .stdout(predicate::str::contains("tokens/tailwind.theme.js"))
        .stdout(predicate::str::ends_with(
            "Validation failed (1 missing required files)\n",
        ));
}

#[test]
fn errors_print_before_warnings() {
    let dir = TempDir::new().unwrap();
    build_package(dir.path());
    write(dir.path(), "evidence/page-weights.json", r#"{"pages": []}"#);
    write(dir.path(), "reports/executive-summary.md", "A rebuild.\n");

    let output = psm().arg("check-package").arg(dir.path()).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3, "{stdout}");
    assert!(lines[0].starts_with("ERROR: ") && lines[0].ends_with(r#"missing keys ["clusters"]"#));
    assert_eq!(
        lines[1],
        "WARN: Executive summary may be missing explicit non-derivative guardrail language"
    );
    assert_eq!(lines[2], "Validation failed (1 error(s), 1 warning(s))");
}

#[test]
fn json_envelope_includes_inventory() {
    let dir = TempDir::new().unwrap();
    build_package(dir.path());
    let output = psm()
        .args(["--format", "json", "check-package"])
        .arg(dir.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let envelope: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(envelope["command"], "check-package");
    assert_eq!(envelope["status"], "passed");
    let files = envelope["files"].as_array().unwrap();
    assert_eq!(files.len(), REQUIRED.len());
    assert!(files
        .iter()
        .all(|f| f["sha256"].as_str().map(str::len) == Some(64)));
}

#[test]
fn file_as_root_is_an_error() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("not-a-dir");
    fs::write(&file, "x").unwrap();
    psm()
        .arg("check-package")
        .arg(&file)
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with(
            "ERROR: output package root is not a directory: ",
        ));
}

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

const OUTPUT: &str = "build/generated/dup-fqcn-excludes.txt";

const ENV_VARS: &[&str] = &[
    "SHADOWGUARD_MAIN_ROOT",
    "SHADOWGUARD_CLEAN_ROOT",
    "SHADOWGUARD_EXTENSION",
    "SHADOWGUARD_MODE",
    "SHADOWGUARD_OUTPUT",
    "SHADOWGUARD_REPORT_MAX",
    "SHADOWGUARD_LOG",
];

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A project using the default root layout with one stereotype duplicate
/// and one plain duplicate.
fn setup_project() -> TempDir {
    let temp = tempdir().unwrap();
    let root = temp.path();
    for base in ["main/java", "app/src/main/java_clean"] {
        write(
            &root.join(base),
            "com/example/util/Foo.java",
            "package com.example.util;\n\npublic class Foo {}\n",
        );
    }
    write(
        &root.join("main/java"),
        "com/example/guard/AnswerSanitizer.java",
        "package com.example.guard;\n\n@Service\npublic class AnswerSanitizer {}\n",
    );
    write(
        &root.join("app/src/main/java_clean"),
        "com/example/guard/AnswerSanitizer.java",
        "package com.example.guard;\n\npublic class AnswerSanitizer {}\n",
    );
    temp
}

#[allow(deprecated)]
fn shadowguard(project: &Path) -> Command {
    let mut cmd = Command::cargo_bin("shadowguard").expect("binary");
    for var in ENV_VARS {
        cmd.env_remove(var);
    }
    cmd.arg("--verbose");
    cmd.current_dir(project);
    cmd
}

fn generated(project: &Path) -> String {
    fs::read_to_string(project.join(OUTPUT)).unwrap()
}

#[test]
fn generate_default_mode() {
    let project = setup_project();
    shadowguard(project.path())
        .arg("generate")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "duplicates=2 excluded(auto)=1 excluded(hard)=0 kept=1",
        ));

    let content = generated(project.path());
    let header = "# AUTO-GENERATED by shadowguard ; mode=(default) ;";
    assert!(content.starts_with(header));
    assert!(content.ends_with("\ncom/example/guard/AnswerSanitizer*\n"));
}

#[test]
fn generate_fail_mode_exits_one_with_report() {
    let project = setup_project();
    shadowguard(project.path())
        .args(["generate", "--mode", "stereotype:fail"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("[keep] com.example.util.Foo"));

    // The file is still produced for the failing run.
    let content = generated(project.path());
    assert!(content.contains("com/example/guard/AnswerSanitizer*"));
}

#[test]
fn generate_mode_from_env() {
    let project = setup_project();
    shadowguard(project.path())
        .env("SHADOWGUARD_MODE", "all")
        .arg("generate")
        .assert()
        .success();

    let content = generated(project.path());
    assert!(content.contains("mode=all ; filter=all ; onDup=none"));
    assert!(content.contains("com/example/util/Foo*"));
}

#[test]
fn generate_mode_from_project_config() {
    let project = setup_project();
    fs::write(
        project.path().join("shadowguard.toml"),
        "[policy]\nmode = \"all:warn\"\n",
    )
    .unwrap();

    shadowguard(project.path())
        .arg("generate")
        .assert()
        .success();

    let content = generated(project.path());
    assert!(content.contains("filter=all ; onDup=warn"));
}

#[test]
fn generate_json_format() {
    let project = setup_project();
    shadowguard(project.path())
        .args(["generate", "--mode", "all", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"outcome\": \"clean\""))
        .stdout(predicate::str::contains("com/example/util/Foo*"));
}

#[test]
fn generate_missing_roots_writes_header_only() {
    let temp = tempdir().unwrap();
    shadowguard(temp.path())
        .args(["generate", "--mode", "fail"])
        .assert()
        .success();

    assert_eq!(generated(temp.path()).lines().count(), 1);
}

#[test]
fn invalid_config_exits_two() {
    let project = setup_project();
    let config = project.path().join("shadowguard.toml");
    fs::write(config, "[scan\n").unwrap();

    shadowguard(project.path())
        .arg("generate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("[CONFIG_ERROR]"));
}

#[test]
fn check_reports_each_entry() {
    let project = setup_project();
    shadowguard(project.path()).arg("generate").assert().success();

    shadowguard(project.path())
        .args([
            "check",
            "com/example/guard/AnswerSanitizer.class",
            "com/example/util/Foo.class",
            "trace/TimeBudget.class",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "excluded com/example/guard/AnswerSanitizer.class",
        ))
        .stdout(predicate::str::contains("kept com/example/util/Foo.class"))
        .stdout(predicate::str::contains("excluded trace/TimeBudget.class"));
}

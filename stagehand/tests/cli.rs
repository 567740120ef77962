//! Drives the `stagehand` binary end to end.

use std::{
    fs,
    path::Path,
    process::{Command, Output},
};

use tempfile::TempDir;

fn stagehand(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_stagehand"))
        .args(args)
        .current_dir(dir)
        .env("HOME", dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run stagehand")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn init_then_check() {
    let temp = TempDir::new().unwrap();

    let init = stagehand(temp.path(), &["init"]);
    assert!(init.status.success(), "{}", stderr(&init));
    assert!(temp.path().join("stagehand.toml").exists());

    let again = stagehand(temp.path(), &["init"]);
    assert!(again.status.success());
    assert!(stderr(&again).contains("--force"));

    let check = stagehand(temp.path(), &["check"]);
    assert!(check.status.success(), "{}", stderr(&check));
    assert!(stdout(&check).contains("stagehand.toml is valid"));
}

#[test]
fn check_fails_on_lint_errors() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("stagehand.toml"),
        "[style]\nenabled = true\nsrc_dir = \"scss\"\n",
    )
    .unwrap();

    let check = stagehand(temp.path(), &["check"]);

    assert!(!check.status.success());
    assert!(stderr(&check).contains("'out_dir' is not set"));
}

#[test]
fn malformed_config_is_fatal() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("stagehand.toml"),
        "[[passes]]\nname = \"gen\"\nphase = \"sometime\"\ncommand = \"go\"\n",
    )
    .unwrap();

    let plan = stagehand(temp.path(), &["plan", "."]);

    assert!(!plan.status.success());
    assert!(stdout(&plan).is_empty());
}

#[test]
fn missing_config_warns_and_uses_defaults() {
    let temp = TempDir::new().unwrap();

    let plan = stagehand(temp.path(), &["plan", "./cmd/app"]);

    assert!(plan.status.success(), "{}", stderr(&plan));
    assert!(stderr(&plan).contains("using defaults"));
    assert!(stdout(&plan).contains("go build ./cmd/app"));
}

#[test]
fn lint_warning_reported_once() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("stagehand.toml"),
        "[compiler]\nextensions = [\"warp-drive\"]\n",
    )
    .unwrap();

    let plan = stagehand(temp.path(), &["plan", "."]);

    assert!(plan.status.success(), "{}", stderr(&plan));
    let err = stderr(&plan);
    assert_eq!(err.matches("unknown extension 'warp-drive'").count(), 1, "{}", err);
}

#[test]
fn plan_json() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("stagehand.toml"),
        "[compiler]\npath = \"gotip\"\nextensions = [\"code-contracts\"]\n",
    )
    .unwrap();

    let plan = stagehand(temp.path(), &["plan", "--format", "json", "vet", "./..."]);

    assert!(plan.status.success(), "{}", stderr(&plan));
    let json: serde_json::Value = serde_json::from_str(&stdout(&plan)).unwrap();
    let compile = &json["steps"][4]["invocations"][0];
    assert_eq!(compile["program"], "gotip");
    assert_eq!(
        compile["args"],
        serde_json::json!(["vet", "./...", "-tags=contracts"])
    );
}

#[test]
fn dry_run_spawns_nothing() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("stagehand.toml"),
        "[compiler]\npath = \"stagehand-no-such-compiler\"\n",
    )
    .unwrap();

    let build = stagehand(temp.path(), &["build", "--dry-run", "-o", "bin/app", "."]);

    assert!(build.status.success(), "{}", stderr(&build));
    assert!(stdout(&build).contains("stagehand-no-such-compiler build . -o bin/app"));
}

#[cfg(unix)]
#[test]
fn build_runs_pipeline() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("pages")).unwrap();
    fs::write(temp.path().join("pages/index.php"), "<h1>home</h1>").unwrap();
    fs::write(
        temp.path().join("stagehand.toml"),
        r#"
[compiler]
path = "true"

[[passes]]
name = "stamp"
phase = "post"
command = "sh"
args = ["-c", "echo done > stamp.txt"]
enabled = true

[convert]
enabled = true
tool = "cat"
src_dirs = ["pages"]
"#,
    )
    .unwrap();

    let build = stagehand(temp.path(), &["build", "./..."]);

    assert!(build.status.success(), "{}", stderr(&build));
    assert!(stdout(&build).contains("Build completed successfully"));
    assert_eq!(
        fs::read_to_string(temp.path().join("pages/index.html")).unwrap(),
        "<h1>home</h1>"
    );
    assert_eq!(
        fs::read_to_string(temp.path().join("stamp.txt")).unwrap(),
        "done\n"
    );
}

#[cfg(unix)]
#[test]
fn build_failure_names_step() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("stagehand.toml"),
        "[[passes]]\nname = \"gate\"\nphase = \"pre\"\ncommand = \"false\"\nenabled = true\n",
    )
    .unwrap();

    let build = stagehand(temp.path(), &["build", "."]);

    assert!(!build.status.success());
    let err = stderr(&build);
    assert!(err.contains("build failed at pre-passes"), "{}", err);
    assert!(err.contains("pre-pass 'gate' failed"), "{}", err);
    assert!(!stdout(&build).contains("Build completed successfully"));
}

use assert_cmd::cargo;
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// 构造一个使用临时数据目录的 worklog 命令
fn worklog(data_dir: &TempDir) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("worklog");
    cmd.env("WORKLOG_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn list_output(data_dir: &TempDir, args: &[&str]) -> String {
    let output = worklog(data_dir).arg("list").args(args).output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_add_prints_rendered_entry() {
    let temp_dir = TempDir::new().unwrap();

    worklog(&temp_dir)
        .args(["add", "-m", "reviewed PR", "-c", "feature", "-i"])
        .assert()
        .success()
        .stdout(predicate::str::contains("*  [feature]\t'reviewed PR'"));

    assert!(temp_dir.path().join("worklog.db").exists());
}

#[test]
fn test_add_defaults_to_note() {
    let temp_dir = TempDir::new().unwrap();

    worklog(&temp_dir)
        .args(["add", "--message", "lunch"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\t   [note]\t'lunch'"));
}

#[test]
fn test_add_requires_message() {
    let temp_dir = TempDir::new().unwrap();

    worklog(&temp_dir).arg("add").assert().failure();
}

#[test]
fn test_add_rejects_unknown_category() {
    let temp_dir = TempDir::new().unwrap();

    worklog(&temp_dir)
        .args(["add", "-m", "tidy up", "-c", "chore"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid category 'chore'"));

    assert_eq!(list_output(&temp_dir, &[]), "");
}

#[test]
fn test_list_newest_first_with_filters() {
    let temp_dir = TempDir::new().unwrap();

    worklog(&temp_dir)
        .args(["add", "-m", "first", "-c", "bug"])
        .assert()
        .success();
    worklog(&temp_dir)
        .args(["add", "-m", "second", "-c", "meeting", "-i"])
        .assert()
        .success();

    let all = list_output(&temp_dir, &[]);
    let lines: Vec<&str> = all.lines().collect();
    assert_eq!(lines.len(), 2);
    // 同一秒内添加的条目也按插入顺序倒序输出
    assert!(lines[0].ends_with("'second'"));
    assert!(lines[1].ends_with("'first'"));

    let bugs = list_output(&temp_dir, &["-f", "B"]);
    assert!(bugs.contains("'first'"));
    assert!(!bugs.contains("'second'"));

    let important = list_output(&temp_dir, &["--filter", "I"]);
    assert!(important.contains("'second'"));
    assert!(!important.contains("'first'"));

    let important_bugs = list_output(&temp_dir, &["-f", "IB"]);
    assert_eq!(important_bugs, "");

    let future = list_output(&temp_dir, &["--after", "2999-01-01"]);
    assert_eq!(future, "");

    let past = list_output(&temp_dir, &["--before", "2000-01-01 00:00:00"]);
    assert_eq!(past, "");
}

#[test]
fn test_list_rejects_bad_input() {
    let temp_dir = TempDir::new().unwrap();

    worklog(&temp_dir)
        .args(["list", "-a", "last tuesday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));

    worklog(&temp_dir)
        .args(["list", "-f", "BZ"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown filter code 'Z'"));
}

#[test]
fn test_clear_force() {
    let temp_dir = TempDir::new().unwrap();

    worklog(&temp_dir).args(["add", "-m", "gone soon"]).assert().success();
    worklog(&temp_dir).args(["clear", "--force"]).assert().success();
    assert_eq!(list_output(&temp_dir, &[]), "");

    // 清空空库不报错
    worklog(&temp_dir).args(["clear", "-f"]).assert().success();
}

#[test]
fn test_clear_prompt_continue() {
    let temp_dir = TempDir::new().unwrap();

    worklog(&temp_dir).args(["add", "-m", "gone soon"]).assert().success();
    worklog(&temp_dir)
        .arg("clear")
        .write_stdin("continue\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("CAUTION!"));

    assert_eq!(list_output(&temp_dir, &[]), "");
}

#[test]
fn test_clear_prompt_quit_keeps_entries() {
    let temp_dir = TempDir::new().unwrap();

    worklog(&temp_dir).args(["add", "-m", "keep me"]).assert().success();
    worklog(&temp_dir)
        .arg("clear")
        .write_stdin("q\n")
        .assert()
        .success();

    assert!(list_output(&temp_dir, &[]).contains("'keep me'"));
}

#[test]
fn test_clear_prompt_mismatch_fails() {
    let temp_dir = TempDir::new().unwrap();

    worklog(&temp_dir).args(["add", "-m", "keep me"]).assert().success();
    worklog(&temp_dir)
        .arg("clear")
        .write_stdin("nonsense\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Input value 'nonsense' does not match 'continue'",
        ));

    assert!(list_output(&temp_dir, &[]).contains("'keep me'"));
}

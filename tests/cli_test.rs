use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const GO_TEMPLATE: &str = include_str!("../templates/go.gitignore");

fn cli() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("git-ignore-gen"));
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_generate_go_in_empty_dir() {
    let temp = TempDir::new().unwrap();

    cli()
        .current_dir(temp.path())
        .arg("go")
        .assert()
        .success()
        .stdout(predicate::str::contains("成功生成go模板的.gitignore文件"))
        .stdout(predicate::str::contains("文件位置"));

    let content = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
    assert_eq!(content, GO_TEMPLATE);
}

#[test]
fn test_generate_twice_succeeds_without_change() {
    let temp = TempDir::new().unwrap();

    cli().current_dir(temp.path()).arg("go").assert().success();
    cli()
        .current_dir(temp.path())
        .arg("go")
        .assert()
        .success()
        .stdout(predicate::str::contains("警告"));

    let content = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
    assert_eq!(content, GO_TEMPLATE);
}

#[test]
fn test_add_existing_directory() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("bar")).unwrap();
    fs::write(temp.path().join(".gitignore"), "foo.txt").unwrap();

    cli()
        .current_dir(temp.path())
        .args(["-f", "bar/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bar/"));

    let content = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
    assert_eq!(content, "foo.txt\nbar/\n");
}

#[test]
fn test_add_same_path_twice() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("notes.md"), "").unwrap();

    cli().current_dir(temp.path()).args(["-f", "notes.md"]).assert().success();
    cli()
        .current_dir(temp.path())
        .args(["-f", "notes.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("路径已存在于.gitignore中: notes.md"));

    let content = fs::read_to_string(temp.path().join(".gitignore")).unwrap();
    assert_eq!(content, "notes.md\n");
}

#[test]
fn test_unsupported_language() {
    let temp = TempDir::new().unwrap();

    cli()
        .current_dir(temp.path())
        .arg("cobol")
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("错误: "))
        .stderr(predicate::str::contains("不支持的语言模板: cobol"))
        .stderr(predicate::str::contains("go, react, c++, c, matlab, rust"));

    assert!(!temp.path().join(".gitignore").exists());
}

#[test]
fn test_file_flag_without_path() {
    let temp = TempDir::new().unwrap();

    cli()
        .current_dir(temp.path())
        .arg("-f")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("-f选项需要指定文件或文件夹路径"));

    assert!(!temp.path().join(".gitignore").exists());
}

#[test]
fn test_no_arguments_prints_usage() {
    let temp = TempDir::new().unwrap();

    cli()
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("示例"));
}

#[test]
fn test_version_flag() {
    let temp = TempDir::new().unwrap();

    cli()
        .current_dir(temp.path())
        .arg("-v")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")))
        .stdout(predicate::str::contains("构建时间"))
        .stdout(predicate::str::contains("提交"));

    assert!(!temp.path().join(".gitignore").exists());
}

#[test]
fn test_here_flag_skips_parent_file() {
    let temp = TempDir::new().unwrap();
    let sub = temp.path().join("sub");
    fs::create_dir(&sub).unwrap();
    fs::write(temp.path().join(".gitignore"), "*.log\n").unwrap();

    cli()
        .current_dir(&sub)
        .args(["--here", "-f", "cache"])
        .assert()
        .success();

    assert_eq!(fs::read_to_string(sub.join(".gitignore")).unwrap(), "cache\n");
    assert_eq!(
        fs::read_to_string(temp.path().join(".gitignore")).unwrap(),
        "*.log\n"
    );
}

#[test]
fn test_non_utf8_ignore_file_is_extended() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".gitignore"), b"# caf\xe9\nfoo.txt\n").unwrap();

    cli()
        .current_dir(temp.path())
        .args(["-f", "bar.txt"])
        .assert()
        .success();
    cli().current_dir(temp.path()).arg("go").assert().success();

    let mut expected = b"# caf\xe9\nfoo.txt\nbar.txt\n\n# go template\n".to_vec();
    expected.extend_from_slice(GO_TEMPLATE.as_bytes());
    assert_eq!(fs::read(temp.path().join(".gitignore")).unwrap(), expected);
}

#[cfg(unix)]
#[test]
fn test_non_utf8_path_argument() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp = TempDir::new().unwrap();

    cli()
        .current_dir(temp.path())
        .arg("-f")
        .arg(OsStr::from_bytes(b"caf\xe9.log"))
        .assert()
        .success();

    assert_eq!(
        fs::read(temp.path().join(".gitignore")).unwrap(),
        b"caf\xe9.log\n"
    );
}

// use macro form directly; no import needed
use std::fs;
use std::process::Command;
use tempfile::tempdir;

fn bin() -> std::path::PathBuf {
    assert_cmd::cargo::cargo_bin!("downloads_sorter").into()
}

#[test]
fn missing_env_var_is_fatal_and_touches_nothing() {
    let td = tempdir().unwrap();
    fs::write(td.path().join("a.txt"), "a").unwrap();

    let out = Command::new(bin())
        .current_dir(td.path())
        .env_remove("DOWNLOADS_PATH")
        .output()
        .expect("spawn binary");

    assert!(!out.status.success(), "missing DOWNLOADS_PATH must fail");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("DOWNLOADS_PATH"), "stderr was: {stderr}");
    assert!(td.path().join("a.txt").is_file());
    assert!(!td.path().join("txt").exists());
}

#[test]
fn nonexistent_source_is_fatal() {
    let td = tempdir().unwrap();
    let out = Command::new(bin())
        .env("DOWNLOADS_PATH", td.path().join("does-not-exist"))
        .output()
        .expect("spawn binary");
    assert!(!out.status.success());
    assert!(!td.path().join("does-not-exist").exists());
}

#[test]
fn sorts_directory_and_prints_summary() {
    let td = tempdir().unwrap();
    let src = td.path();
    fs::write(src.join("a.txt"), "a").unwrap();
    fs::write(src.join("b.txt"), "b").unwrap();
    fs::write(src.join("README"), "r").unwrap();

    let out = Command::new(bin())
        .env("DOWNLOADS_PATH", src)
        .output()
        .expect("spawn binary");

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("moved 3 file(s)"), "stdout was: {stdout}");
    assert!(src.join("txt/a.txt").is_file());
    assert!(src.join("txt/b.txt").is_file());
    assert!(src.join("no-extensions/README").is_file());
}

#[test]
fn per_entry_failure_keeps_exit_status_zero() {
    let td = tempdir().unwrap();
    let src = td.path();
    fs::create_dir(src.join("txt")).unwrap();
    fs::write(src.join("txt/dup.txt"), "old").unwrap();
    fs::write(src.join("dup.txt"), "new").unwrap();
    fs::write(src.join("ok.log"), "fine").unwrap();

    let out = Command::new(bin())
        .env("DOWNLOADS_PATH", src)
        .arg("--sequential")
        .output()
        .expect("spawn binary");

    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("dup.txt"), "failure must name the file; stderr: {stderr}");
    // stderr is piped here, so the summary's error lines carry no color codes.
    assert!(stderr.contains("error: dup.txt:"), "stderr: {stderr}");
    assert!(src.join("dup.txt").is_file());
    assert!(src.join("log/ok.log").is_file());
}

#[test]
fn dry_run_flag_changes_nothing() {
    let td = tempdir().unwrap();
    let src = td.path();
    fs::write(src.join("movie.mkv"), "m").unwrap();

    let out = Command::new(bin())
        .env("DOWNLOADS_PATH", src)
        .arg("--dry-run")
        .output()
        .expect("spawn binary");

    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("would move 1 file(s)"));
    assert!(src.join("movie.mkv").is_file());
    assert!(!src.join("mkv").exists());
}

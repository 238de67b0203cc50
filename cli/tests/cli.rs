use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

const HOSTS: &str = "groupA:[
user1@10.1.1.1:2022
10.1.1.2
]
10.1.1.3
";

fn write_input(dir: &TempDir, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).unwrap();
    path
}

fn crtgen() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("crtgen");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

#[test]
fn writes_xml_next_to_input_by_default() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "sessions.conf", HOSTS);

    crtgen()
        .arg("-f")
        .arg(&input)
        .arg("-u")
        .arg("root")
        .assert()
        .success()
        .stdout(predicate::str::contains("3 sessions in 1 groups"));

    let xml = fs::read_to_string(dir.path().join("sessions.conf.xml")).unwrap();
    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<VanDyke version=\"3.0\">"));
    assert!(xml.contains("<key name=\"groupA\">"));
    assert!(xml.contains("<dword name=\"[SSH2] Port\">2022</dword>"));
    assert_eq!(xml.matches("<string name=\"Username\">root</string>").count(), 2);
}

#[test]
fn honours_output_and_default_port() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "lab.txt", "10.0.0.7\n");
    let output = dir.path().join("out.xml");

    crtgen()
        .args(["generate", "-p", "2200", "-o"])
        .arg(&output)
        .arg("-f")
        .arg(&input)
        .assert()
        .success();

    let xml = fs::read_to_string(&output).unwrap();
    assert!(xml.contains("<dword name=\"[SSH2] Port\">2200</dword>"));
    assert!(xml.contains("<string name=\"Username\"></string>"));
    assert!(!Path::new(&format!("{}.xml", input.display())).exists());
}

#[test]
fn parse_error_fails_without_output() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "broken.conf", "groupA:[\n10.0.0.1\n");

    crtgen()
        .arg("-f")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unclosed group"));

    assert!(!dir.path().join("broken.conf.xml").exists());
}

#[test]
fn missing_input_is_reported() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("nope.conf");

    crtgen()
        .arg("-f")
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn show_prints_tree() {
    let dir = TempDir::new().unwrap();
    let input = write_input(&dir, "sessions.conf", HOSTS);

    crtgen()
        .arg("show")
        .arg("-f")
        .arg(&input)
        .arg("-u")
        .arg("root")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("groupA [2 hosts]")
                .and(predicate::str::contains("10.1.1.1 (user1, port 2022)"))
                .and(predicate::str::contains("10.1.1.3 (root, port 22)")),
        );

    assert!(!dir.path().join("sessions.conf.xml").exists());
}

use std::fs;

use playground_engine::{ensure_dir, AtomicFileWriter};
use tempfile::TempDir;

#[test]
fn creates_missing_session_dir() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join(".playground");
    assert!(!dir.exists());
    ensure_dir(&dir).unwrap();
    assert!(dir.is_dir());
}

#[test]
fn write_replaces_existing_file() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("session.ron", "(a)").unwrap();
    assert_eq!(first.file_name().unwrap(), "session.ron");
    assert_eq!(fs::read_to_string(&first).unwrap(), "(a)");

    let second = writer.write("session.ron", "(b)").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "(b)");
}

#[test]
fn no_partial_file_when_dir_is_a_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    assert!(writer.write("session.ron", "data").is_err());
    assert!(!file_path.with_file_name("session.ron").exists());
}

#[test]
fn remove_reports_whether_anything_was_deleted() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    assert!(!writer.remove("session.ron").unwrap());
    writer.write("session.ron", "()").unwrap();
    assert!(writer.remove("session.ron").unwrap());
    assert!(!writer.path_of("session.ron").exists());
}

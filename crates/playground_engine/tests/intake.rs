use std::fs;

use playground_engine::{load_file, IntakeError};
use tempfile::TempDir;

#[test]
fn loads_bytes_name_and_mime() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("Meeting.MP3");
    fs::write(&path, b"ID3abc").unwrap();

    let file = load_file(&path).unwrap();
    assert_eq!(file.name, "Meeting.MP3");
    assert_eq!(file.size, 6);
    assert_eq!(file.mime, "audio/mpeg");
    assert_eq!(file.bytes, b"ID3abc");
}

#[test]
fn unknown_extension_gets_generic_mime() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("notes.xyz");
    fs::write(&path, b"x").unwrap();

    assert_eq!(load_file(&path).unwrap().mime, "application/octet-stream");
}

#[test]
fn missing_file_is_reported() {
    let temp = TempDir::new().unwrap();
    let err = load_file(&temp.path().join("absent.wav")).unwrap_err();
    assert!(matches!(err, IntakeError::NotFound(_)));
}

#[test]
fn directory_is_not_a_file() {
    let temp = TempDir::new().unwrap();
    let err = load_file(temp.path()).unwrap_err();
    assert!(matches!(err, IntakeError::NotAFile(_)));
}

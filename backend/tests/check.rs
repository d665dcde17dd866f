//! Integration test: validating local files the way `resumeopt check` does.

use std::io::Write;

use resumeopt::{load_file, IntakeError};
use tempfile::NamedTempFile;

#[tokio::test]
async fn local_pdf_passes_intake() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"%PDF-1.7\n%%EOF\n").unwrap();

    let upload = load_file(file.path()).await.unwrap();
    assert_eq!(upload.size(), 15);
    assert!(upload.file_name.is_some());
    assert!(upload.validate(1024).is_ok());
}

#[tokio::test]
async fn local_text_file_fails_intake() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"just some notes").unwrap();

    let upload = load_file(file.path()).await.unwrap();
    assert_eq!(upload.validate(1024), Err(IntakeError::NotPdf));
    assert_eq!(
        upload.validate(4),
        Err(IntakeError::TooLarge { size: 15, limit: 4 })
    );
}

#[tokio::test]
async fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_file(&dir.path().join("absent.pdf")).await.is_err());
}

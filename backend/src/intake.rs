//! Intake validation for uploaded resumes.
//!
//! Only structural checks happen here: size bounds and the `%PDF-`
//! signature. The document content is never parsed.

use std::path::Path;

use crate::error::{IntakeError, IntakeResult};

/// Multipart field the frontend puts the resume in.
pub const RESUME_FIELD: &str = "resume";

/// Every PDF file starts with this header.
pub const PDF_SIGNATURE: &[u8] = b"%PDF-";

/// A resume received from a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl ResumeUpload {
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// File name for display; clients may omit it.
    pub fn display_name(&self) -> &str {
        self.file_name.as_deref().unwrap_or("unnamed.pdf")
    }

    pub fn validate(&self, limit: usize) -> IntakeResult<()> {
        validate_pdf(&self.bytes, limit)
    }
}

/// Read a local file the same way an upload would arrive.
pub async fn load_file(path: &Path) -> std::io::Result<ResumeUpload> {
    let bytes = tokio::fs::read(path).await?;
    Ok(ResumeUpload {
        file_name: path.file_name().map(|n| n.to_string_lossy().into_owned()),
        content_type: None,
        bytes,
    })
}

/// Check that `bytes` looks like a PDF no larger than `limit`.
pub fn validate_pdf(bytes: &[u8], limit: usize) -> IntakeResult<()> {
    if bytes.is_empty() {
        return Err(IntakeError::EmptyFile);
    }
    if bytes.len() > limit {
        return Err(IntakeError::TooLarge {
            size: bytes.len(),
            limit,
        });
    }
    if !bytes.starts_with(PDF_SIGNATURE) {
        return Err(IntakeError::NotPdf);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_pdf_signature() {
        assert!(validate_pdf(b"%PDF-1.7\n%\xe2\xe3\xcf\xd3", 1024).is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(validate_pdf(b"", 1024), Err(IntakeError::EmptyFile));
    }

    #[test]
    fn test_rejects_other_formats() {
        assert_eq!(validate_pdf(b"\x89PNG\r\n\x1a\n", 1024), Err(IntakeError::NotPdf));
        assert_eq!(validate_pdf(b"PDF-1.7", 1024), Err(IntakeError::NotPdf));
    }

    #[test]
    fn test_size_limit_is_inclusive() {
        let bytes = b"%PDF-1.4";
        assert!(validate_pdf(bytes, bytes.len()).is_ok());
        assert_eq!(
            validate_pdf(bytes, bytes.len() - 1),
            Err(IntakeError::TooLarge { size: 8, limit: 7 })
        );
    }

    #[test]
    fn test_display_name_fallback() {
        let upload = ResumeUpload {
            file_name: None,
            content_type: Some("application/pdf".into()),
            bytes: b"%PDF-1.4".to_vec(),
        };
        assert_eq!(upload.display_name(), "unnamed.pdf");
        assert!(upload.validate(1024).is_ok());
    }
}

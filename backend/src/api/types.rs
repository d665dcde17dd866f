//! REST API types shared with clients.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::store::{Submission, SubmissionStatus};

/// `GET /auth` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Freshly issued access token
    pub auth: String,
}

/// `POST /resume` success response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueuedResponse {
    /// Human-readable status
    pub text: String,
    /// Submission identifier
    pub id: String,
}

impl QueuedResponse {
    pub fn new(id: impl ToString) -> Self {
        Self {
            text: "Request queued.".to_string(),
            id: id.to_string(),
        }
    }
}

/// `GET /resume/{id}` response. Never contains the file bytes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionView {
    pub id: String,
    pub task_name: String,
    pub file_name: Option<String>,
    pub size: usize,
    pub status: SubmissionStatus,
    /// RFC 3339 timestamp
    pub received_at: String,
}

impl From<&Submission> for SubmissionView {
    fn from(submission: &Submission) -> Self {
        SubmissionView {
            id: submission.id.to_string(),
            task_name: submission.task_name.clone(),
            file_name: submission.file_name.clone(),
            size: submission.size,
            status: submission.status,
            received_at: submission.received_at.to_rfc3339(),
        }
    }
}

/// Query string carrying the access token.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenQuery {
    #[serde(default)]
    pub token: Option<String>,
}

/// Create an error response
pub fn error_response(error: &str) -> Value {
    json!({ "error": error })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::ResumeUpload;

    #[test]
    fn test_submission_view_hides_bytes() {
        let submission = Submission::new(
            "tok",
            &ResumeUpload {
                file_name: Some("cv.pdf".into()),
                content_type: None,
                bytes: b"%PDF-1.4 secret".to_vec(),
            },
        );

        let json = serde_json::to_value(SubmissionView::from(&submission)).unwrap();
        assert_eq!(json["fileName"], "cv.pdf");
        assert_eq!(json["size"], 15);
        assert_eq!(json["status"], "queued");
        assert_eq!(json["taskName"], "resume-optimization");
        assert!(json.get("bytes").is_none());
    }

    #[test]
    fn test_queued_response_text() {
        let response = QueuedResponse::new("42");
        assert_eq!(response.text, "Request queued.");
        assert_eq!(error_response("Invalid token.")["error"], "Invalid token.");
    }
}

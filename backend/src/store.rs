//! In-memory submission store.
//!
//! Keeps metadata about accepted resumes, never their bytes. The store is
//! bounded: once full, the oldest submission is dropped. Nothing is
//! persisted across restarts.

use std::collections::{HashMap, VecDeque};
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::DEFAULT_MAX_SUBMISSIONS;
use crate::intake::ResumeUpload;

/// Task name attached to every queued resume.
pub const RESUME_TASK: &str = "resume-optimization";

/// Processing state of a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Queued,
}

/// Metadata of an accepted resume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub id: Uuid,
    /// Token the resume was submitted with
    pub auth: String,
    pub task_name: String,
    pub file_name: Option<String>,
    pub size: usize,
    pub status: SubmissionStatus,
    pub received_at: DateTime<Utc>,
}

impl Submission {
    pub fn new(auth: impl Into<String>, upload: &ResumeUpload) -> Self {
        Self {
            id: Uuid::new_v4(),
            auth: auth.into(),
            task_name: RESUME_TASK.to_string(),
            file_name: upload.file_name.clone(),
            size: upload.size(),
            status: SubmissionStatus::Queued,
            received_at: Utc::now(),
        }
    }
}

#[derive(Debug, Default)]
struct Submissions {
    by_id: HashMap<Uuid, Submission>,
    /// Insertion order, oldest first
    arrival: VecDeque<Uuid>,
}

#[derive(Debug)]
pub struct SubmissionStore {
    submissions: RwLock<Submissions>,
    capacity: usize,
}

impl Default for SubmissionStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_SUBMISSIONS)
    }
}

impl SubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `capacity` submissions (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            submissions: RwLock::new(Submissions::default()),
            capacity: capacity.max(1),
        }
    }

    /// Store a submission. Returns the id of the one evicted to make room, if any.
    pub fn insert(&self, submission: Submission) -> Option<Uuid> {
        let mut submissions = self.submissions.write().unwrap_or_else(|e| e.into_inner());

        let evicted = if submissions.arrival.len() >= self.capacity {
            let oldest = submissions.arrival.pop_front();
            if let Some(id) = &oldest {
                submissions.by_id.remove(id);
            }
            oldest
        } else {
            None
        };

        submissions.arrival.push_back(submission.id);
        submissions.by_id.insert(submission.id, submission);
        evicted
    }

    pub fn get(&self, id: &Uuid) -> Option<Submission> {
        self.read().by_id.get(id).cloned()
    }

    /// Look a submission up on behalf of `auth`; other tokens' entries are invisible.
    pub fn get_owned(&self, id: &Uuid, auth: &str) -> Option<Submission> {
        self.read().by_id.get(id).filter(|s| s.auth == auth).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Submissions> {
        self.submissions.read().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload() -> ResumeUpload {
        ResumeUpload {
            file_name: Some("cv.pdf".into()),
            content_type: Some("application/pdf".into()),
            bytes: b"%PDF-1.4".to_vec(),
        }
    }

    #[test]
    fn test_new_submission_keeps_metadata_only() {
        let submission = Submission::new("tok", &upload());
        assert_eq!(submission.status, SubmissionStatus::Queued);
        assert_eq!(submission.task_name, RESUME_TASK);
        assert_eq!(submission.file_name.as_deref(), Some("cv.pdf"));
        assert_eq!(submission.size, 8);
    }

    #[test]
    fn test_owner_only_lookup() {
        let store = SubmissionStore::new();
        let submission = Submission::new("owner", &upload());
        let id = submission.id;
        assert_eq!(store.insert(submission), None);

        assert!(store.get_owned(&id, "owner").is_some());
        assert!(store.get_owned(&id, "someone-else").is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_oldest_submission_is_evicted_when_full() {
        let store = SubmissionStore::with_capacity(2);
        let ids: Vec<Uuid> = (0..3)
            .map(|_| {
                let submission = Submission::new("tok", &upload());
                let id = submission.id;
                store.insert(submission);
                id
            })
            .collect();

        assert_eq!(store.len(), 2);
        assert!(store.get(&ids[0]).is_none());
        assert!(store.get(&ids[1]).is_some());
        assert!(store.get(&ids[2]).is_some());
    }

    #[test]
    fn test_insert_reports_evicted_id() {
        let store = SubmissionStore::with_capacity(1);
        let first = Submission::new("tok", &upload());
        let first_id = first.id;
        store.insert(first);
        assert_eq!(store.insert(Submission::new("tok", &upload())), Some(first_id));
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&SubmissionStatus::Queued).unwrap();
        assert_eq!(json, "\"queued\"");
    }
}

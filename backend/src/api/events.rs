//! Intake events, printed to stdout and streamed via Server-Sent Events (SSE).
//!
//! Every handler reports what it did through [`EVENT_BROADCASTER`]; clients
//! connected to `GET /events` receive the same entries as JSON.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Event level for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A single intake event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntakeEvent {
    pub level: EventLevel,
    pub message: String,
    /// Submission the event refers to, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission_id: Option<String>,
}

impl IntakeEvent {
    pub fn info(message: impl Into<String>) -> Self {
        Self { level: EventLevel::Info, message: message.into(), submission_id: None }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { level: EventLevel::Success, message: message.into(), submission_id: None }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: EventLevel::Warning, message: message.into(), submission_id: None }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: EventLevel::Error, message: message.into(), submission_id: None }
    }

    pub fn for_submission(mut self, id: impl ToString) -> Self {
        self.submission_id = Some(id.to_string());
        self
    }
}

/// Global event broadcaster
pub static EVENT_BROADCASTER: Lazy<EventBroadcaster> = Lazy::new(EventBroadcaster::new);

/// Broadcasts intake events to all connected SSE clients
pub struct EventBroadcaster {
    sender: broadcast::Sender<IntakeEvent>,
}

impl EventBroadcaster {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(100);
        Self { sender }
    }

    /// Print the event and send it to all subscribers
    pub fn emit(&self, event: IntakeEvent) {
        let prefix = match event.level {
            EventLevel::Info => "   ",
            EventLevel::Success => "   ✓",
            EventLevel::Warning => "   ⚠️",
            EventLevel::Error => "   ❌",
        };
        match &event.submission_id {
            Some(id) => println!("{} {} [{}]", prefix, event.message, id),
            None => println!("{} {}", prefix, event.message),
        }

        // No receivers is fine
        let _ = self.sender.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<IntakeEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}

pub fn emit_info(msg: impl Into<String>) {
    EVENT_BROADCASTER.emit(IntakeEvent::info(msg));
}

pub fn emit_success(msg: impl Into<String>) {
    EVENT_BROADCASTER.emit(IntakeEvent::success(msg));
}

pub fn emit_warning(msg: impl Into<String>) {
    EVENT_BROADCASTER.emit(IntakeEvent::warning(msg));
}

pub fn emit_error(msg: impl Into<String>) {
    EVENT_BROADCASTER.emit(IntakeEvent::error(msg));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_subscribers_receive_events() {
        let broadcaster = EventBroadcaster::new();
        let mut rx = broadcaster.subscribe();

        broadcaster.emit(IntakeEvent::success("Request queued").for_submission("abc"));

        let event = rx.recv().await.unwrap();
        assert_eq!(event.level, EventLevel::Success);
        assert_eq!(event.submission_id.as_deref(), Some("abc"));
    }

    #[test]
    fn test_emit_without_subscribers() {
        EventBroadcaster::new().emit(IntakeEvent::warning("nobody listening"));
    }

    #[test]
    fn test_event_json_shape() {
        let json = serde_json::to_value(IntakeEvent::info("hello")).unwrap();
        assert_eq!(json["level"], "info");
        assert_eq!(json["message"], "hello");
        assert!(json.get("submissionId").is_none());
    }
}

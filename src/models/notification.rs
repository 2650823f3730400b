use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

/// Normalized result of data resolution: who to mail and the opaque
/// payload the templates render against.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEmail {
    pub to: String,
    pub data: JsonValue,
}

/// A previously recorded notification, as stored by the host's
/// notification history. Resending replays this record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub id: Uuid,
    pub event_name: String,
    pub to: String,
    pub data: JsonValue,
    pub created_at: DateTime<Utc>,
}

/// Per-resend overrides recognized for interface compatibility.
///
/// The original recipient recorded on the notification always wins, so the
/// dispatch entry points accept these options without acting on them.
#[derive(Debug, Clone, Default)]
pub struct ResendOptions {
    pub to: Option<String>,
}

/// Outcome of one dispatch pipeline run.
///
/// The two missing-template labels are deliberately distinct: the send
/// path reports the condition as `NoDataFound`, the resend path as
/// `NoTemplateFound`. Callers depend on the per-entry-point labels, so
/// they must not be unified silently.
#[derive(Debug, Clone, PartialEq)]
pub enum NotificationResult {
    /// The relay accepted the request; `status` is its raw HTTP status
    /// code, including 4xx/5xx.
    Delivered {
        to: String,
        status: u16,
        data: JsonValue,
    },

    /// Send path: the event has no template mapping, or its domain type
    /// resolves no data.
    NoDataFound,

    /// Resend path: the recorded event has no template mapping. Carries
    /// the record's recipient and stored data.
    NoTemplateFound { to: String, data: JsonValue },
}

use serde_json::Value as JsonValue;

use crate::error::DispatchError;

#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub filename: String,
    pub content_type: String,
    pub content: Vec<u8>,
}

/// Hook for future attachment support.
///
/// Both dispatch entry points accept a generator but do not invoke it yet;
/// the seam exists so adding attachments later does not change their
/// signatures.
pub trait AttachmentGenerator: Send + Sync {
    fn generate(
        &self,
        event_name: &str,
        data: &JsonValue,
    ) -> Result<Vec<Attachment>, DispatchError>;
}

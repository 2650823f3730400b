use serde::{Deserialize, Serialize};

/// The fully composed message posted to the mail relay.
///
/// Serializes to the relay wire format: `replyTo` is camelCase and unset
/// optional headers are omitted from the JSON body entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MailEnvelope {
    pub from: String,
    pub to: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cc: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bcc: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,

    pub subject: String,
}

impl MailEnvelope {
    /// Fills unset cc/bcc/reply-to headers from configured defaults.
    ///
    /// An empty default string means "no default" and is never applied.
    /// Headers already set on the envelope always win.
    pub fn apply_header_defaults(&mut self, cc: &str, bcc: &str, reply_to: &str) {
        if self.cc.is_none() && !cc.is_empty() {
            self.cc = Some(cc.to_string());
        }
        if self.bcc.is_none() && !bcc.is_empty() {
            self.bcc = Some(bcc.to_string());
        }
        if self.reply_to.is_none() && !reply_to.is_empty() {
            self.reply_to = Some(reply_to.to_string());
        }
    }
}

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};

use crate::{config::Config, error::DispatchError, models::envelope::MailEnvelope};

/// HTTP client for the external mail-relay endpoint.
///
/// The relay owns actual delivery; this client composes the envelope,
/// posts it, and hands the raw response status back to the caller. A
/// 4xx/5xx from the relay is data, not an error — only network failures
/// and timeouts surface as `DispatchError::Transport`.
pub struct MailRelayClient {
    http_client: Client,
    base_url: String,
    api_key: String,
    default_cc: String,
    default_bcc: String,
    default_reply_to: String,
}

impl MailRelayClient {
    pub fn new(config: &Config) -> Result<Self, DispatchError> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| DispatchError::Config(format!("failed to build HTTP client: {e}")))?;

        info!(base_url = %config.strapi_uri, "Mail relay client initialized");

        Ok(Self {
            http_client,
            base_url: config.strapi_uri.clone(),
            api_key: config.strapi_api_key.clone(),
            default_cc: config.default_cc.clone(),
            default_bcc: config.default_bcc.clone(),
            default_reply_to: config.reply_to.clone(),
        })
    }

    /// Applies configured header defaults and posts the envelope to the
    /// relay. Returns the relay's HTTP status code verbatim.
    pub async fn send(&self, envelope: &MailEnvelope) -> Result<u16, DispatchError> {
        let mut envelope = envelope.clone();
        envelope.apply_header_defaults(
            &self.default_cc,
            &self.default_bcc,
            &self.default_reply_to,
        );

        let url = format!("{}/api/email", self.base_url);

        debug!(
            to = %envelope.to,
            subject = %envelope.subject,
            "Posting mail to relay"
        );

        let response = self
            .http_client
            .post(&url)
            // The relay expects the lowercase `bearer` prefix.
            .header("Authorization", format!("bearer {}", self.api_key))
            .json(&envelope)
            .send()
            .await?;

        let status = response.status().as_u16();

        info!(to = %envelope.to, status, "Mail relay responded");

        Ok(status)
    }
}

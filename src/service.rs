use std::sync::Arc;

use serde_json::Value as JsonValue;
use tracing::{debug, info};

use crate::{
    clients::{
        providers::DomainProviders,
        relay::MailRelayClient,
        templates::TemplateStore,
    },
    config::Config,
    error::DispatchError,
    models::{
        attachment::AttachmentGenerator,
        envelope::MailEnvelope,
        notification::{NotificationRecord, NotificationResult, ResendOptions},
    },
    resolver::DataResolver,
};

/// The notification dispatch orchestrator.
///
/// Composes the template registry, data resolver, template store, and
/// relay client into the full pipeline. Holds only immutable configuration
/// and stateless clients, so concurrent dispatches need no coordination.
pub struct StrapiMailer {
    config: Arc<Config>,
    resolver: DataResolver,
    templates: TemplateStore,
    relay: MailRelayClient,
}

impl StrapiMailer {
    pub fn new(config: Config, providers: DomainProviders) -> Result<Self, DispatchError> {
        let config = Arc::new(config);
        let relay = MailRelayClient::new(&config)?;
        let templates = TemplateStore::new(
            &config.email_template_path,
            std::env::vars().collect(),
        );
        let resolver = DataResolver::new(Arc::clone(&config), providers);

        info!(
            from = %config.from_email,
            templates = %config.email_template_path,
            "Mailer service initialized"
        );

        Ok(Self {
            config,
            resolver,
            templates,
            relay,
        })
    }

    /// Dispatches a notification for a domain event.
    ///
    /// Events without a template mapping, and events whose domain type
    /// resolves no data, report `NoDataFound` without an error. The
    /// attachment generator is accepted but not invoked yet.
    pub async fn send_notification(
        &self,
        event_name: &str,
        event_data: &JsonValue,
        _attachment_generator: Option<&dyn AttachmentGenerator>,
    ) -> Result<NotificationResult, DispatchError> {
        let Some(template_id) = self.config.template_for_event(event_name) else {
            debug!(event_name, "No template registered for event");
            return Ok(NotificationResult::NoDataFound);
        };

        let Some(resolved) = self.resolver.resolve(event_name, event_data).await? else {
            return Ok(NotificationResult::NoDataFound);
        };

        let subject = self.templates.render_subject(template_id, Some(&resolved.data))?;
        let html = self.templates.render_body(template_id, Some(&resolved.data))?;

        let envelope = MailEnvelope {
            from: self.config.from_email.clone(),
            to: resolved.to.clone(),
            text: None,
            html: Some(html),
            cc: None,
            bcc: None,
            reply_to: None,
            subject,
        };

        let status = self.relay.send(&envelope).await?;

        info!(event_name, to = %resolved.to, status, "Notification dispatched");

        Ok(NotificationResult::Delivered {
            to: resolved.to,
            status,
            data: resolved.data,
        })
    }

    /// Re-delivers a previously recorded notification.
    ///
    /// Domain data is re-resolved so templates render against current
    /// state, but the recorded recipient is preserved even when fresh
    /// resolution would produce a different one. When resolution yields
    /// nothing, rendering proceeds with an empty data context.
    pub async fn resend_notification(
        &self,
        record: &NotificationRecord,
        _options: Option<&ResendOptions>,
        _attachment_generator: Option<&dyn AttachmentGenerator>,
    ) -> Result<NotificationResult, DispatchError> {
        let Some(template_id) = self.config.template_for_event(&record.event_name) else {
            debug!(
                event_name = %record.event_name,
                notification_id = %record.id,
                "No template registered for recorded event"
            );
            return Ok(NotificationResult::NoTemplateFound {
                to: record.to.clone(),
                data: record.data.clone(),
            });
        };

        let resolved = self.resolver.resolve(&record.event_name, &record.data).await?;
        let fresh_data = resolved.as_ref().map(|r| &r.data);

        let subject = self.templates.render_subject(template_id, fresh_data)?;
        let html = self.templates.render_body(template_id, fresh_data)?;

        let envelope = MailEnvelope {
            from: self.config.from_email.clone(),
            to: record.to.clone(),
            text: None,
            html: Some(html),
            cc: None,
            bcc: None,
            reply_to: None,
            subject,
        };

        let status = self.relay.send(&envelope).await?;

        info!(
            event_name = %record.event_name,
            notification_id = %record.id,
            to = %record.to,
            status,
            "Notification re-dispatched"
        );

        Ok(NotificationResult::Delivered {
            to: record.to.clone(),
            status,
            data: record.data.clone(),
        })
    }
}

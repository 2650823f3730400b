use std::sync::Arc;

use serde_json::{Value as JsonValue, json};
use tracing::{debug, info};

use crate::{
    clients::providers::{DomainProviders, QueryOptions},
    config::Config,
    error::DispatchError,
    models::notification::ResolvedEmail,
};

const ORDER_SELECT: &[&str] = &["shipping_total", "tax_total", "subtotal", "total"];

const ORDER_RELATIONS: &[&str] = &[
    "customer",
    "billing_address",
    "shipping_address",
    "discounts",
    "discounts.rule",
    "shipping_methods",
    "shipping_methods.shipping_option",
    "payments",
    "fulfillments",
    "fulfillments.tracking_links",
    "returns",
    "gift_cards",
    "gift_card_transactions",
    "items",
];

const SWAP_RELATIONS: &[&str] = &[
    "additional_items",
    "return_order",
    "return_order.items",
    "return_order.items.item",
    "return_order.shipping_method",
    "return_order.shipping_method.shipping_option",
];

/// Domain type of an event, derived from the event-name segment before the
/// first `.` separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainType {
    Order,
    Swap,
    Invite,
    User,
    Customer,
    Unknown,
}

impl DomainType {
    pub fn from_event(event_name: &str) -> Self {
        match event_name.split('.').next().unwrap_or("") {
            "order" => DomainType::Order,
            "swap" => DomainType::Swap,
            "invite" => DomainType::Invite,
            "user" => DomainType::User,
            "customer" => DomainType::Customer,
            _ => DomainType::Unknown,
        }
    }
}

/// Routes an event to the matching domain provider and normalizes the
/// fetched aggregate into a recipient plus template payload.
pub struct DataResolver {
    config: Arc<Config>,
    providers: DomainProviders,
}

impl DataResolver {
    pub fn new(config: Arc<Config>, providers: DomainProviders) -> Self {
        Self { config, providers }
    }

    /// Resolves the email data for an event.
    ///
    /// `Ok(None)` means the event is not notification-enabled (no template
    /// mapping) or its domain type resolves no data; no provider is called
    /// for an unmapped event. Provider failures and unusable aggregates
    /// are `DispatchError::Resolve`.
    pub async fn resolve(
        &self,
        event_name: &str,
        event_data: &JsonValue,
    ) -> Result<Option<ResolvedEmail>, DispatchError> {
        if self.config.template_for_event(event_name).is_none() {
            debug!(event_name, "No template mapping, skipping data resolution");
            return Ok(None);
        }

        match DomainType::from_event(event_name) {
            DomainType::Order => {
                let id = event_id(event_name, event_data)?;
                let options = QueryOptions {
                    select: to_strings(ORDER_SELECT),
                    relations: to_strings(ORDER_RELATIONS),
                };
                let order = self.providers.order.retrieve(&id, options).await?;
                with_recipient(event_name, order).map(Some)
            }
            DomainType::Swap => {
                let id = event_id(event_name, event_data)?;
                let options = QueryOptions {
                    select: Vec::new(),
                    relations: to_strings(SWAP_RELATIONS),
                };
                let swap = self.providers.swap.retrieve(&id, options).await?;
                with_recipient(event_name, swap).map(Some)
            }
            DomainType::Invite => {
                let id = event_id(event_name, event_data)?;
                let invites = self
                    .providers
                    .invite
                    .list(json!({ "id": id }), QueryOptions::default())
                    .await?;

                // Only the first matching invite is used.
                let invite = invites.into_iter().next().ok_or_else(|| {
                    DispatchError::Resolve(format!("no invite found for id {id}"))
                })?;

                let to = invite
                    .get("user_email")
                    .and_then(JsonValue::as_str)
                    .ok_or_else(|| {
                        DispatchError::Resolve(format!(
                            "invite {id} has no user_email field"
                        ))
                    })?
                    .to_string();

                Ok(Some(ResolvedEmail { to, data: invite }))
            }
            DomainType::User | DomainType::Customer => {
                info!(
                    event_name,
                    "User and customer event notifications are not supported"
                );
                Ok(None)
            }
            DomainType::Unknown => {
                debug!(event_name, "Unrecognized event domain, no data resolved");
                Ok(None)
            }
        }
    }
}

fn event_id(event_name: &str, event_data: &JsonValue) -> Result<String, DispatchError> {
    event_data
        .get("id")
        .and_then(JsonValue::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            DispatchError::Resolve(format!("event payload for {event_name} is missing an id"))
        })
}

fn with_recipient(event_name: &str, aggregate: JsonValue) -> Result<ResolvedEmail, DispatchError> {
    let to = aggregate
        .get("email")
        .and_then(JsonValue::as_str)
        .ok_or_else(|| {
            DispatchError::Resolve(format!(
                "resolved data for {event_name} has no email field"
            ))
        })?
        .to_string();

    Ok(ResolvedEmail { to, data: aggregate })
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

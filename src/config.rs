use std::collections::HashMap;

use dotenvy::dotenv;
use serde::{Deserialize, Deserializer, de};

use crate::error::DispatchError;

/// Mailer configuration, read from the environment once at startup and
/// immutable afterwards. Empty-string defaults mean "not configured".
#[derive(Clone, Deserialize, Debug)]
pub struct Config {
    /// Bearer token for the mail relay.
    #[serde(default)]
    pub strapi_api_key: String,

    /// Base URI of the mail relay, without the `/api/email` suffix.
    #[serde(default)]
    pub strapi_uri: String,

    #[serde(default = "default_from_email")]
    pub from_email: String,

    /// Organization-wide header defaults, applied to outgoing envelopes
    /// only when the envelope leaves them unset.
    #[serde(default)]
    pub default_cc: String,

    #[serde(default)]
    pub default_bcc: String,

    #[serde(default)]
    pub reply_to: String,

    /// Root directory of the template store.
    #[serde(default = "default_template_path")]
    pub email_template_path: String,

    /// Event name to template identifier mapping. From the environment this
    /// is a flat `event=template,event=template` string.
    #[serde(
        default = "default_template_map",
        deserialize_with = "template_map_from_env"
    )]
    pub template_map: HashMap<String, String>,
}

impl Config {
    pub fn load() -> Result<Self, DispatchError> {
        dotenv().ok();

        let config = envy::from_env::<Self>()
            .map_err(|e| DispatchError::Config(format!("invalid environment variable: {e}")))?;
        Ok(config)
    }

    /// Template registry lookup. Absence is a normal outcome meaning the
    /// event is not notification-enabled.
    pub fn template_for_event(&self, event_name: &str) -> Option<&str> {
        self.template_map.get(event_name).map(String::as_str)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strapi_api_key: String::new(),
            strapi_uri: String::new(),
            from_email: default_from_email(),
            default_cc: String::new(),
            default_bcc: String::new(),
            reply_to: String::new(),
            email_template_path: default_template_path(),
            template_map: default_template_map(),
        }
    }
}

fn default_from_email() -> String {
    "noreply@medusajs.com".to_string()
}

fn default_template_path() -> String {
    "data/emailTemplates".to_string()
}

fn default_template_map() -> HashMap<String, String> {
    HashMap::from([("order.placed".to_string(), "orderplaced".to_string())])
}

fn template_map_from_env<'de, D>(deserializer: D) -> Result<HashMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_template_map(&raw).map_err(de::Error::custom)
}

/// Parses `event=template,event=template` pairs.
pub fn parse_template_map(raw: &str) -> Result<HashMap<String, String>, String> {
    let mut map = HashMap::new();

    for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
        let (event, template) = entry
            .split_once('=')
            .ok_or_else(|| format!("invalid template mapping entry '{entry}'"))?;

        let event = event.trim();
        let template = template.trim();

        if event.is_empty() || template.is_empty() {
            return Err(format!("invalid template mapping entry '{entry}'"));
        }

        map.insert(event.to_string(), template.to_string());
    }

    Ok(map)
}

use std::{collections::HashMap, fs, path::PathBuf};

use handlebars::Handlebars;
use serde_json::{Value as JsonValue, json};
use tracing::debug;

use crate::error::DispatchError;

/// File-backed template store keyed by template identifier.
///
/// A template identifier names a directory under the store root holding a
/// `html.hbs` body and a `subject.hbs` sibling. Both render against the
/// same context: the resolved event data under `data` and the injected
/// environment map under `env`, so templates can reach deployment-specific
/// values such as a storefront base URL.
pub struct TemplateStore {
    root: PathBuf,
    registry: Handlebars<'static>,
    env: HashMap<String, String>,
}

impl TemplateStore {
    pub fn new(root: impl Into<PathBuf>, env: HashMap<String, String>) -> Self {
        Self {
            root: root.into(),
            registry: Handlebars::new(),
            env,
        }
    }

    /// Renders the HTML body template. Absent data renders against an
    /// empty object, which templates must tolerate.
    pub fn render_body(
        &self,
        template_id: &str,
        data: Option<&JsonValue>,
    ) -> Result<String, DispatchError> {
        self.render_part(template_id, "html", data)
    }

    /// Renders the conventionally named subject sibling, trimmed of
    /// trailing whitespace.
    pub fn render_subject(
        &self,
        template_id: &str,
        data: Option<&JsonValue>,
    ) -> Result<String, DispatchError> {
        let subject = self.render_part(template_id, "subject", data)?;
        Ok(subject.trim_end().to_string())
    }

    fn render_part(
        &self,
        template_id: &str,
        part: &str,
        data: Option<&JsonValue>,
    ) -> Result<String, DispatchError> {
        let path = self.root.join(template_id).join(format!("{part}.hbs"));

        debug!(
            template_id,
            part,
            path = %path.display(),
            "Rendering template"
        );

        let source = fs::read_to_string(&path).map_err(|e| {
            DispatchError::Render(format!("cannot read template {}: {e}", path.display()))
        })?;

        let context = json!({
            "data": data.cloned().unwrap_or_else(|| json!({})),
            "env": &self.env,
        });

        Ok(self.registry.render_template(&source, &context)?)
    }
}

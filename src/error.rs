use thiserror::Error;

/// Errors surfaced by the dispatch pipeline.
///
/// Relay HTTP error statuses are not errors; they come back to the caller
/// as the delivery status code. Everything here is a genuine failure that
/// propagates without retry.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("data resolution failed: {0}")]
    Resolve(String),

    #[error("template rendering failed: {0}")]
    Render(String),

    #[error("mail relay transport failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid mailer configuration: {0}")]
    Config(String),
}

impl From<handlebars::RenderError> for DispatchError {
    fn from(err: handlebars::RenderError) -> Self {
        DispatchError::Render(err.to_string())
    }
}

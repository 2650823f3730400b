use anyhow::{Error, Result};
use strapi_mailer::config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load()?;

    info!(
        relay = %config.strapi_uri,
        from = %config.from_email,
        templates = %config.email_template_path,
        registered_events = config.template_map.len(),
        "Configuration validated. Dispatcher is ready to be wired to the event bus."
    );

    Ok(())
}

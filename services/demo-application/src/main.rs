use crate::application::context::start_application;
use crate::application::opentelemetry::OpentelemetryHandler;
use crate::application::settings::DemoSettings;
use anyhow::Result;
mod application;
mod domain;
mod source;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = DemoSettings::from_env()?;

    // Initialize the OpenTelemetry stack
    let _opentelemetry_handler = OpentelemetryHandler::new(&settings)?;

    // Walk the dataset
    start_application(settings).await?;

    Ok(())
}

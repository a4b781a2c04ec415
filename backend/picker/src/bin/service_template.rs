use picker::{config::Settings, routes::app};
use service::{config, telemetry};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings: Settings = config::load(
        concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml"),
        &config::process_env,
    )?;
    telemetry::init(&settings.log_level);

    info!("Starting service template on {}:{}", settings.host, settings.port);
    service::serve(app(), &settings.host, settings.port).await?;

    Ok(())
}

use service::{config, telemetry};
use weather::config::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings: Settings = config::load(
        concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml"),
        &config::process_env,
    )?;
    telemetry::init(&settings.log_level);

    weather::start_server(settings).await?;

    Ok(())
}

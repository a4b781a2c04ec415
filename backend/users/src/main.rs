use service::{config, telemetry};
use users::config::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings: Settings = config::load(
        concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml"),
        &config::process_env,
    )?;
    telemetry::init(settings.log_filter());

    users::start_server(settings).await?;

    Ok(())
}

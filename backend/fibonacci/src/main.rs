use fibonacci::config::Settings;
use service::{config, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings: Settings = config::load(
        concat!(env!("CARGO_MANIFEST_DIR"), "/config.toml"),
        &config::process_env,
    )?;
    telemetry::init(&settings.log_level);

    fibonacci::start_server(settings).await
}

use monitoring::config::Settings;
use service::{config, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings: Settings = config::load(
        concat!(env!("CARGO_MANIFEST_DIR"), "/config/local.toml"),
        &config::process_env,
    )?;
    telemetry::init(settings.log_filter());

    monitoring::start_server(settings).await
}

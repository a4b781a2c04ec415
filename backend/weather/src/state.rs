use std::sync::Arc;

use crate::{config::Settings, services::WeatherClient};

pub struct State {
    pub settings: Settings,
    pub client: WeatherClient,
}

impl State {
    pub fn new(settings: Settings) -> Arc<Self> {
        let client = WeatherClient::new(&settings.api_url, &settings.api_key);

        Arc::new(Self { settings, client })
    }
}

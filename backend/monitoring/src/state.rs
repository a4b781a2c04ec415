use std::sync::Arc;

use crate::{config::Settings, forecast::WeatherClient, metrics::Metrics};

pub struct State {
    pub settings: Settings,
    pub client: WeatherClient,
    pub metrics: Metrics,
}

impl State {
    pub fn new(settings: Settings) -> Result<Arc<Self>, prometheus::Error> {
        let client = WeatherClient::new(&settings.geocoding_url, &settings.forecast_url);
        let metrics = Metrics::new(&settings)?;

        Ok(Arc::new(Self {
            settings,
            client,
            metrics,
        }))
    }
}

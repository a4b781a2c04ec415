//! # Metrics
//!
//! Two Prometheus registries, scraped separately through `/metrics?kind=`:
//!
//! - **system**: process collector (Linux only) and a `service_info` gauge
//!   labelled with app name, version and environment
//! - **analytic**: `temp_feels_like`, counting weather lookups by their
//!   temperature description
use std::{fmt, str::FromStr};

use prometheus::{Encoder, IntCounterVec, IntGaugeVec, Opts, Registry, TextEncoder};
use service::FieldError;
use tracing::info;
use weather::utils::Description;

use crate::config::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    System,
    Analytic,
}

impl FromStr for MetricKind {
    type Err = FieldError;

    /// Case-sensitive: `System` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" => Ok(MetricKind::System),
            "analytic" => Ok(MetricKind::Analytic),
            other => Err(FieldError::new(
                "enum",
                &["query", "kind"],
                format!("Input should be 'system' or 'analytic', got {other:?}"),
            )),
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricKind::System => f.write_str("system"),
            MetricKind::Analytic => f.write_str("analytic"),
        }
    }
}

pub struct Metrics {
    system: Registry,
    analytic: Registry,
    feels_like: IntCounterVec,
}

impl Metrics {
    pub fn new(settings: &Settings) -> Result<Self, prometheus::Error> {
        let system = Registry::new();

        #[cfg(target_os = "linux")]
        system.register(Box::new(
            prometheus::process_collector::ProcessCollector::for_self(),
        ))?;

        let service_info = IntGaugeVec::new(
            Opts::new("service_info", "Service name, version and environment"),
            &["app_name", "version", "environment"],
        )?;
        service_info
            .with_label_values(&[
                settings.app_name.as_str(),
                settings.version.as_str(),
                settings.environment.as_str(),
            ])
            .set(1);
        system.register(Box::new(service_info))?;

        let analytic = Registry::new();
        let feels_like = IntCounterVec::new(
            Opts::new("temp_feels_like", "Weather lookups by temperature description"),
            &["feels_like"],
        )?;
        analytic.register(Box::new(feels_like.clone()))?;

        info!("Metrics collectors initialized");

        Ok(Self {
            system,
            analytic,
            feels_like,
        })
    }

    /// Count one lookup under `description`, returning the new total.
    pub fn record(&self, description: Description) -> u64 {
        let counter = self.feels_like.with_label_values(&[description.as_str()]);
        counter.inc();

        counter.get()
    }

    pub fn registry(&self, kind: MetricKind) -> &Registry {
        match kind {
            MetricKind::System => &self.system,
            MetricKind::Analytic => &self.analytic,
        }
    }

    /// Text exposition of one registry.
    pub fn render(&self, kind: MetricKind) -> Result<Vec<u8>, prometheus::Error> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry(kind).gather(), &mut buffer)?;

        Ok(buffer)
    }

    pub fn content_type() -> String {
        TextEncoder::new().format_type().to_string()
    }
}

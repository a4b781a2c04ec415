use std::sync::Arc;

use crate::{config::Settings, database::Cache};

pub struct State {
    pub settings: Settings,
    pub cache: Cache,
}

impl State {
    pub fn new(settings: Settings, cache: Cache) -> Arc<Self> {
        Arc::new(Self { settings, cache })
    }
}

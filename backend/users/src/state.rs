use std::sync::Arc;

use crate::{config::Settings, database::Database};

pub struct State {
    pub settings: Settings,
    pub db: Database,
}

impl State {
    pub fn new(settings: Settings) -> Arc<Self> {
        Arc::new(Self {
            settings,
            db: Database::new(),
        })
    }
}

use crate::api::ApiClient;
use crate::config::Config;
use crate::journal::JournalHistory;
use crate::sequence::SummarySlot;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub api: ApiClient,
    pub history: Arc<Mutex<JournalHistory>>,
    pub summary: Arc<Mutex<SummarySlot>>,
}

impl AppState {
    pub fn new(config: Config, api: ApiClient) -> Self {
        Self {
            config: Arc::new(config),
            api,
            history: Arc::new(Mutex::new(JournalHistory::default())),
            summary: Arc::new(Mutex::new(SummarySlot::default())),
        }
    }
}

pub mod config;
pub mod error;
pub mod forwarder;
pub mod ingest;
pub mod report;

use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub sink: Arc<dyn forwarder::EventSink>,
}

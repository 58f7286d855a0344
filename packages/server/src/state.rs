use std::sync::Arc;

use generator::ArchiveBuilder;

use crate::config::AppConfig;
use crate::store::GenerationStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn GenerationStore>,
    pub builder: Arc<ArchiveBuilder>,
    pub config: AppConfig,
}

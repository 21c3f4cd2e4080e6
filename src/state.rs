use std::time::Instant;

use crate::config::AppConfig;
use crate::domain::ai::AiService;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub ai_service: AiService,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(config: AppConfig, ai_service: AiService) -> Self {
        Self {
            config,
            ai_service,
            started_at: Instant::now(),
        }
    }
}

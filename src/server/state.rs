use std::sync::Arc;

use crate::features::debate::DebateService;
use crate::features::generation::GenerationService;

#[derive(Clone)]
pub struct AppState {
    pub debate: Arc<DebateService>,
    pub generation: Arc<GenerationService>,
}

impl AppState {
    pub fn new(debate: Arc<DebateService>, generation: Arc<GenerationService>) -> Self {
        Self { debate, generation }
    }
}

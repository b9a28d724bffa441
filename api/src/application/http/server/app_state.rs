use std::sync::Arc;

use foodlens_core::application::FoodLensAppService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: FoodLensAppService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: FoodLensAppService) -> Self {
        Self { args, service }
    }
}

use crate::config::Settings;

use super::{BrushService, StackService};

#[derive(Debug, Clone)]
pub struct AppContext {
    settings: Settings,
    stack_service: StackService,
    brush_service: BrushService,
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl AppContext {
    pub fn new(settings: Settings) -> Self {
        Self {
            stack_service: StackService::new(settings.stack.clone()),
            brush_service: BrushService::new(settings.brush.clone(), settings.stack.clone()),
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn stack_service(&self) -> &StackService {
        &self.stack_service
    }

    pub fn brush_service(&self) -> &BrushService {
        &self.brush_service
    }
}

use std::sync::Arc;

use crate::config::StoredConfig;
use crate::services::{ClipboardService, Clock};
use crate::workflow::generate::TicketTextGenerator;

#[derive(Clone)]
pub struct AppContext {
    pub config: StoredConfig,
    pub generator: TicketTextGenerator,
    pub clock: Arc<dyn Clock>,
    pub clipboard: Arc<dyn ClipboardService>,
}

impl AppContext {
    pub fn new(
        config: StoredConfig,
        clock: Arc<dyn Clock>,
        clipboard: Arc<dyn ClipboardService>,
    ) -> Self {
        let generator = TicketTextGenerator::new(config.generator());
        Self {
            config,
            generator,
            clock,
            clipboard,
        }
    }
}

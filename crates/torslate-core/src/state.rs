use std::sync::Arc;

use torslate_config::Config;

use crate::region::RegionStore;
use crate::surface::{ResultSurfaceManager, SurfaceRenderer};

/// State owned by the controller context.
///
/// Workers never touch it; they report back through the event channel.
pub struct AppContext {
    pub config: Arc<Config>,
    pub regions: RegionStore,
    pub surface: ResultSurfaceManager,
}

impl AppContext {
    pub fn new(config: Arc<Config>, surface_renderer: Arc<dyn SurfaceRenderer>) -> Self {
        let surface = ResultSurfaceManager::new(surface_renderer, config.surface.pointer_margin);
        Self {
            config,
            regions: RegionStore::new(),
            surface,
        }
    }
}

use kanal::AsyncSender;
use torslate_types::AppEvent;

use crate::{RegionIndicator, ResultSurface, SelectionOverlay};

/// Windows owned by the UI thread. Created once and shown or hidden on demand.
pub struct UiState {
    pub overlay: SelectionOverlay,
    pub indicator: RegionIndicator,
    pub surface: ResultSurface,
    /// Events back to the controller
    pub events: AsyncSender<AppEvent>,
}

impl UiState {
    pub fn new(events: AsyncSender<AppEvent>) -> anyhow::Result<Self> {
        Ok(Self {
            overlay: SelectionOverlay::new()?,
            indicator: RegionIndicator::new()?,
            surface: ResultSurface::new()?,
            events,
        })
    }
}

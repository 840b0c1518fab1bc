use std::sync::Arc;
use std::time::Instant;

use torslate_types::{JobId, PhysicalRect, SelectionRect};

use crate::error::CaptureError;
use crate::region::Region;

/// Screen capture provider
pub trait ScreenCapture: Send + Sync {
    /// Capture a physical pixel rectangle as PNG bytes. May block.
    fn capture(&self, rect: PhysicalRect) -> anyhow::Result<Vec<u8>>;
}

/// Captured image travelling through the translation pipeline
#[derive(Debug, Clone)]
pub struct CaptureJob {
    pub image: Vec<u8>,
    pub id: JobId,
    pub submitted_at: Instant,
}

impl CaptureJob {
    pub fn new(id: JobId, image: Vec<u8>) -> Self {
        Self {
            image,
            id,
            submitted_at: Instant::now(),
        }
    }
}

/// Turns logical rectangles into captured images
#[derive(Clone)]
pub struct CaptureService {
    provider: Arc<dyn ScreenCapture>,
}

impl CaptureService {
    pub fn new(provider: Arc<dyn ScreenCapture>) -> Self {
        Self { provider }
    }

    /// Completion of an interactive drag.
    ///
    /// Returns the region to capture, or `None` when the gesture was
    /// cancelled or too small. Neither case is an error.
    pub fn accept_selection(&self, rect: Option<SelectionRect>, scale_factor: f64) -> Option<Region> {
        let Some(rect) = rect else {
            tracing::debug!("Selection cancelled");
            return None;
        };

        match Region::new(rect, scale_factor) {
            Ok(region) => Some(region),
            Err(e) => {
                tracing::debug!("Selection discarded: {}", e);
                None
            }
        }
    }

    /// Capture a stored region without any overlay. Blocks on the provider.
    pub fn capture_fixed(&self, region: &Region) -> Result<Vec<u8>, CaptureError> {
        let physical = region.to_physical();
        tracing::debug!(
            "Capturing {}x{} at ({}, {})",
            physical.width,
            physical.height,
            physical.x,
            physical.y
        );

        let image = self.provider.capture(physical)?;
        Ok(image)
    }

    pub fn capture_job(&self, id: JobId, region: &Region) -> Result<CaptureJob, CaptureError> {
        let image = self.capture_fixed(region)?;
        Ok(CaptureJob::new(id, image))
    }
}

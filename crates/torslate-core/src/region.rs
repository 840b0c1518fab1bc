use torslate_types::{PhysicalRect, SelectionRect};

use crate::error::InvalidRegionError;

/// Selections must be strictly larger than this on both axes
pub const MIN_DIM: i32 = 10;

/// A validated capture rectangle in logical coordinates plus the display
/// scale factor used to convert it to physical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    rect: SelectionRect,
    scale_factor: f64,
}

impl Region {
    /// Normalize the drag rectangle and reject it when too small
    pub fn new(candidate: SelectionRect, scale_factor: f64) -> Result<Self, InvalidRegionError> {
        if !scale_factor.is_finite() || scale_factor <= 0.0 {
            return Err(InvalidRegionError::BadScale(scale_factor));
        }

        let rect = candidate.normalized();
        if rect.width <= MIN_DIM || rect.height <= MIN_DIM {
            return Err(InvalidRegionError::TooSmall {
                width: rect.width,
                height: rect.height,
                min: MIN_DIM,
            });
        }

        Ok(Self { rect, scale_factor })
    }

    pub fn rect(&self) -> SelectionRect {
        self.rect
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Physical pixel rectangle, truncating fractional pixels
    pub fn to_physical(&self) -> PhysicalRect {
        let s = self.scale_factor;
        PhysicalRect {
            x: (self.rect.x as f64 * s) as i32,
            y: (self.rect.y as f64 * s) as i32,
            width: (self.rect.width as f64 * s) as u32,
            height: (self.rect.height as f64 * s) as u32,
        }
    }
}

/// Holds at most one remembered region for replay captures
#[derive(Debug, Default)]
pub struct RegionStore {
    region: Option<Region>,
}

impl RegionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store, replacing whatever was stored before.
    /// A rejected candidate leaves the previous region untouched.
    pub fn set_region(
        &mut self,
        candidate: SelectionRect,
        scale_factor: f64,
    ) -> Result<Region, InvalidRegionError> {
        let region = Region::new(candidate, scale_factor)?;
        self.region = Some(region);
        Ok(region)
    }

    pub fn get_region(&self) -> Option<Region> {
        self.region
    }
}

pub mod capture;
pub mod controller;
pub mod error;
pub mod pipeline;
pub mod region;
pub mod state;
pub mod surface;
pub mod worker;

#[cfg(test)]
mod tests;

pub use capture::{CaptureJob, CaptureService, ScreenCapture};
pub use controller::{Collaborators, ModeController, OverlayRenderer};
pub use error::{CaptureError, InvalidRegionError};
pub use pipeline::{LanguagePair, TranslationPipeline};
pub use region::{MIN_DIM, Region, RegionStore};
pub use state::AppContext;
pub use surface::{Delivery, ResultSurfaceManager, ResultSurfaceState, SurfaceRenderer};

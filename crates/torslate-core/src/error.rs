/// Selection rejected before it becomes a [`crate::Region`].
///
/// Never shown to the user, the overlay simply closes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidRegionError {
    #[error("selection {width}x{height} is not larger than {min}x{min}")]
    TooSmall { width: i32, height: i32, min: i32 },

    #[error("invalid display scale factor {0}")]
    BadScale(f64),
}

/// The screen capture provider failed
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct CaptureError(pub String);

impl From<anyhow::Error> for CaptureError {
    fn from(err: anyhow::Error) -> Self {
        CaptureError(format!("{err:#}"))
    }
}

pub mod geometry;
pub mod result;
pub mod types;

pub use geometry::{PhysicalRect, Point, SelectionRect};
pub use result::{ErrorKind, Stage, TranslationResult, ViewMode};
pub use types::{AppEvent, HotkeyAction, JobId, Mode, SelectionPurpose, UiCommand};

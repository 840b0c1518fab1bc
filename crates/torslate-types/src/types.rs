use serde::{Deserialize, Serialize};

use crate::geometry::{Point, SelectionRect};
use crate::result::{TranslationResult, ViewMode};

/// Events processed by the controller loop
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// A global hotkey fired
    Hotkey(HotkeyAction),
    /// The interactive overlay closed; `None` when the gesture was cancelled
    SelectionFinished {
        rect: Option<SelectionRect>,
        scale_factor: f64,
    },
    /// A worker delivered the outcome of a job
    JobFinished {
        id: JobId,
        result: TranslationResult,
    },
    /// The user dragged the result surface to a new position
    SurfaceMoved(Point),
    SurfaceClosed,
    ToggleView,
    Shutdown,
}

/// Commands sent from the controller to the renderers on the UI thread
#[derive(Debug, Clone, PartialEq)]
pub enum UiCommand {
    OpenSelection(SelectionPurpose),
    ShowIndicator(SelectionRect),
    CloseIndicator,
    ShowSurface {
        position: Point,
        text: String,
        view: ViewMode,
    },
    UpdateSurface {
        text: String,
        view: ViewMode,
    },
    HideSurface,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HotkeyAction {
    /// Drag-select an area and translate it once
    AdHoc,
    /// Drag-select an area and remember it
    RegionSet,
    /// Translate the remembered area again
    Replay,
}

/// What the interactive overlay is selecting for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionPurpose {
    AdHoc,
    RegionSet,
}

/// Hotkey-driven interaction state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Idle,
    AwaitingAdhocSelection,
    AwaitingRegionSet,
    ReplayingRegion,
}

/// Monotonically increasing job sequence number
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct JobId(pub u64);

impl JobId {
    pub fn next(self) -> Self {
        JobId(self.0 + 1)
    }
}

impl std::fmt::Display for JobId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

use std::sync::Arc;

use torslate_types::{JobId, Point, TranslationResult, ViewMode};

/// Renderer of the floating result surface
pub trait SurfaceRenderer: Send + Sync {
    /// Current pointer location in screen coordinates, if known
    fn pointer_position(&self) -> Option<Point>;

    /// Create the surface if needed, place it and show the text
    fn show(&self, position: Point, text: &str, view: ViewMode);

    /// Replace the displayed text in place
    fn update(&self, text: &str, view: ViewMode);

    fn hide(&self);
}

#[derive(Debug, Clone, Default)]
pub struct ResultSurfaceState {
    pub is_visible: bool,
    /// Set only by user moves, survives hide/show
    pub last_position: Option<Point>,
    pub view_mode: ViewMode,
    pub content: Option<TranslationResult>,
}

impl ResultSurfaceState {
    pub fn rendered_text(&self) -> String {
        self.content
            .as_ref()
            .map(|c| c.text_for(self.view_mode))
            .unwrap_or_default()
    }
}

/// Outcome of [`ResultSurfaceManager::deliver`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Shown(Point),
    /// A newer job was already delivered
    Stale { latest: JobId },
}

/// Owns the result surface lifecycle. Mutated only from the controller.
pub struct ResultSurfaceManager {
    state: ResultSurfaceState,
    renderer: Arc<dyn SurfaceRenderer>,
    pointer_margin: i32,
    last_delivered: Option<JobId>,
}

impl ResultSurfaceManager {
    pub fn new(renderer: Arc<dyn SurfaceRenderer>, pointer_margin: i32) -> Self {
        Self {
            state: ResultSurfaceState::default(),
            renderer,
            pointer_margin,
            last_delivered: None,
        }
    }

    pub fn state(&self) -> &ResultSurfaceState {
        &self.state
    }

    /// Show a job result. Results older than the last delivered job are dropped.
    pub fn deliver(&mut self, id: JobId, result: TranslationResult) -> Delivery {
        if let Some(latest) = self.last_delivered.filter(|latest| id < *latest) {
            tracing::warn!("Dropping stale result of job {} (latest {})", id, latest);
            return Delivery::Stale { latest };
        }
        self.last_delivered = Some(id);

        if !result.is_error() {
            self.state.view_mode = ViewMode::Translated;
        }
        self.state.content = Some(result);

        let position = self.state.last_position.unwrap_or_else(|| {
            self.renderer
                .pointer_position()
                .unwrap_or_default()
                .offset(self.pointer_margin, self.pointer_margin)
        });

        self.state.is_visible = true;
        self.renderer
            .show(position, &self.state.rendered_text(), self.state.view_mode);

        tracing::debug!("Result of job {} shown at {:?}", id, position);
        Delivery::Shown(position)
    }

    /// Flip between original and translated text without refetching
    pub fn toggle_view(&mut self) -> ViewMode {
        self.state.view_mode = self.state.view_mode.toggled();
        if self.state.is_visible && self.state.content.is_some() {
            self.renderer
                .update(&self.state.rendered_text(), self.state.view_mode);
        }
        self.state.view_mode
    }

    /// Record a user drag of the surface
    pub fn move_to(&mut self, position: Point) {
        self.state.last_position = Some(position);
    }

    pub fn close(&mut self) {
        if self.state.is_visible {
            self.state.is_visible = false;
            self.renderer.hide();
        }
    }
}

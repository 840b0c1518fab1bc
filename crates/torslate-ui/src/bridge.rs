use kanal::Sender;
use mouse_position::mouse_position::Mouse;
use torslate_core::{OverlayRenderer, SurfaceRenderer};
use torslate_types::{Point, SelectionPurpose, SelectionRect, UiCommand, ViewMode};

/// Renderer handle usable from any thread. Every call becomes a
/// [`UiCommand`] executed on the UI thread.
#[derive(Clone)]
pub struct ChannelRenderer {
    tx: Sender<UiCommand>,
}

impl ChannelRenderer {
    pub fn new(tx: Sender<UiCommand>) -> Self {
        Self { tx }
    }

    pub fn quit(&self) {
        self.send(UiCommand::Quit);
    }

    fn send(&self, command: UiCommand) {
        if let Err(e) = self.tx.send(command) {
            tracing::warn!("UI thread is gone, dropping command: {}", e);
        }
    }
}

impl OverlayRenderer for ChannelRenderer {
    fn open_selection(&self, purpose: SelectionPurpose) {
        self.send(UiCommand::OpenSelection(purpose));
    }

    fn show_indicator(&self, rect: SelectionRect) {
        self.send(UiCommand::ShowIndicator(rect));
    }

    fn close_indicator(&self) {
        self.send(UiCommand::CloseIndicator);
    }
}

impl SurfaceRenderer for ChannelRenderer {
    fn pointer_position(&self) -> Option<Point> {
        match Mouse::get_mouse_position() {
            Mouse::Position { x, y } => Some(Point::new(x, y)),
            Mouse::Error => {
                tracing::debug!("Pointer position unavailable");
                None
            }
        }
    }

    fn show(&self, position: Point, text: &str, view: ViewMode) {
        self.send(UiCommand::ShowSurface {
            position,
            text: text.to_string(),
            view,
        });
    }

    fn update(&self, text: &str, view: ViewMode) {
        self.send(UiCommand::UpdateSurface {
            text: text.to_string(),
            view,
        });
    }

    fn hide(&self) {
        self.send(UiCommand::HideSurface);
    }
}

use std::cell::Cell;
use std::rc::Rc;

use kanal::AsyncSender;
use slint::winit_030::WinitWindowAccessor;
use slint::{ComponentHandle, LogicalPosition, LogicalSize, PhysicalPosition};
use torslate_types::{AppEvent, Point, SelectionPurpose, SelectionRect, UiCommand, ViewMode};

use crate::SelectionOverlay;
use crate::state::UiState;

/// Gap between the remembered region and its dashed border, in logical pixels
const INDICATOR_MARGIN: i32 = 4;

/// Apply one controller command. Returns `false` on [`UiCommand::Quit`].
pub fn handle_command(command: UiCommand, state: &UiState) -> bool {
    match command {
        UiCommand::OpenSelection(purpose) => {
            let hint = match purpose {
                SelectionPurpose::AdHoc => "Drag over the text to translate. Esc cancels.",
                SelectionPurpose::RegionSet => "Drag to set the replay region. Esc cancels.",
            };
            state.overlay.set_hint(hint.into());
            state.overlay.set_dragging(false);
            state.overlay.window().set_fullscreen(true);
            if let Err(e) = state.overlay.show() {
                tracing::error!("[SLINT] Failed to open selection overlay: {}", e);
                cancel_selection(&state.overlay, &state.events);
                return true;
            }
            tracing::debug!("[SLINT] Selection overlay open for {:?}", purpose);
        }
        UiCommand::ShowIndicator(rect) => show_indicator(state, rect),
        UiCommand::CloseIndicator => {
            state.indicator.hide().ok();
            tracing::debug!("[SLINT] Region indicator closed");
        }
        UiCommand::ShowSurface {
            position,
            text,
            view,
        } => {
            set_surface_text(state, text, view);
            state
                .surface
                .window()
                .set_position(PhysicalPosition::new(position.x, position.y));
            if let Err(e) = state.surface.show() {
                tracing::error!("[SLINT] Failed to show result surface: {}", e);
            }
            tracing::debug!("[SLINT] Result surface at {:?}", position);
        }
        UiCommand::UpdateSurface { text, view } => set_surface_text(state, text, view),
        UiCommand::HideSurface => {
            state.surface.hide().ok();
        }
        UiCommand::Quit => {
            state.overlay.hide().ok();
            state.indicator.hide().ok();
            state.surface.hide().ok();
            return false;
        }
    }
    true
}

/// Window bounds of the dashed border drawn around `rect`
fn indicator_bounds(rect: SelectionRect) -> (LogicalPosition, LogicalSize) {
    (
        LogicalPosition::new(
            (rect.x - INDICATOR_MARGIN) as f32,
            (rect.y - INDICATOR_MARGIN) as f32,
        ),
        LogicalSize::new(
            (rect.width + 2 * INDICATOR_MARGIN) as f32,
            (rect.height + 2 * INDICATOR_MARGIN) as f32,
        ),
    )
}

fn show_indicator(state: &UiState, rect: SelectionRect) {
    let window = state.indicator.window();
    let (position, size) = indicator_bounds(rect);
    window.set_position(position);
    window.set_size(size);

    if let Err(e) = state.indicator.show() {
        tracing::error!("[SLINT] Failed to show region indicator: {}", e);
        return;
    }

    // The native window exists only once shown, and may be recreated after a hide
    let click_through = window.with_winit_window(|w| w.set_cursor_hittest(false));
    match click_through {
        Some(Ok(())) => {}
        Some(Err(e)) => tracing::warn!("[SLINT] Region indicator takes clicks: {}", e),
        None => tracing::warn!("[SLINT] Region indicator has no native window"),
    }
}

fn set_surface_text(state: &UiState, text: String, view: ViewMode) {
    state.surface.set_text(text.into());
    state
        .surface
        .set_showing_original(view == ViewMode::Original);
}

/// Screen rectangle of a drag made on the overlay, in logical pixels.
///
/// `origin` is the overlay window position; the drag coordinates are local
/// to that window.
fn selection_rect(
    origin: PhysicalPosition,
    scale_factor: f32,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
) -> SelectionRect {
    let origin = origin.to_logical(scale_factor);
    SelectionRect::new(
        (origin.x + x).round() as i32,
        (origin.y + y).round() as i32,
        width.round() as i32,
        height.round() as i32,
    )
}

/// Hide the overlay and tell the controller nothing was selected
fn cancel_selection(overlay: &SelectionOverlay, tx: &AsyncSender<AppEvent>) {
    let scale_factor = overlay.window().scale_factor();
    overlay.set_dragging(false);
    overlay.hide().ok();
    emit(
        tx,
        AppEvent::SelectionFinished {
            rect: None,
            scale_factor: scale_factor as f64,
        },
    );
}

/// Tracks whether the surface header was actually dragged since the press
#[derive(Debug, Default)]
struct HeaderDrag {
    moved: Cell<bool>,
}

impl HeaderDrag {
    fn press(&self) {
        self.moved.set(false);
    }

    fn drag(&self, dx: f32, dy: f32) {
        if dx != 0.0 || dy != 0.0 {
            self.moved.set(true);
        }
    }

    /// `true` when the release ends a real drag
    fn release(&self) -> bool {
        self.moved.replace(false)
    }
}

/// Hook window callbacks up to the controller channel
pub fn connect(state: &UiState) {
    let events = &state.events;

    {
        let weak = state.overlay.as_weak();
        let tx = events.clone();
        state.overlay.on_selected(move |x, y, width, height| {
            let Some(overlay) = weak.upgrade() else {
                return;
            };
            let window = overlay.window();
            let scale_factor = window.scale_factor();
            let rect = selection_rect(window.position(), scale_factor, x, y, width, height);
            overlay.hide().ok();

            tracing::debug!("[SLINT] Selected {:?} at scale {}", rect, scale_factor);
            emit(
                &tx,
                AppEvent::SelectionFinished {
                    rect: Some(rect),
                    scale_factor: scale_factor as f64,
                },
            );
        });
    }

    {
        let weak = state.overlay.as_weak();
        let tx = events.clone();
        state.overlay.on_cancelled(move || {
            if let Some(overlay) = weak.upgrade() {
                cancel_selection(&overlay, &tx);
            }
        });
    }

    {
        let weak = state.overlay.as_weak();
        let tx = events.clone();
        state.overlay.window().on_close_requested(move || {
            tracing::debug!("[SLINT] Selection overlay closed by the window manager");
            if let Some(overlay) = weak.upgrade() {
                cancel_selection(&overlay, &tx);
            }
            slint::CloseRequestResponse::HideWindow
        });
    }

    {
        let tx = events.clone();
        state.surface.on_toggle_view(move || emit(&tx, AppEvent::ToggleView));
    }

    {
        let tx = events.clone();
        state.surface.on_close(move || emit(&tx, AppEvent::SurfaceClosed));
    }

    {
        let tx = events.clone();
        state.surface.window().on_close_requested(move || {
            emit(&tx, AppEvent::SurfaceClosed);
            slint::CloseRequestResponse::HideWindow
        });
    }

    let header = Rc::new(HeaderDrag::default());

    {
        let header = header.clone();
        state.surface.on_drag_started(move || header.press());
    }

    {
        let weak = state.surface.as_weak();
        let header = header.clone();
        state.surface.on_dragged(move |dx, dy| {
            let Some(surface) = weak.upgrade() else {
                return;
            };
            header.drag(dx, dy);
            let window = surface.window();
            let scale_factor = window.scale_factor();
            let position = window.position();
            window.set_position(PhysicalPosition::new(
                position.x + (dx * scale_factor).round() as i32,
                position.y + (dy * scale_factor).round() as i32,
            ));
        });
    }

    {
        let weak = state.surface.as_weak();
        let tx = events.clone();
        state.surface.on_drag_finished(move || {
            if !header.release() {
                return;
            }
            let Some(surface) = weak.upgrade() else {
                return;
            };
            let position = surface.window().position();
            emit(&tx, AppEvent::SurfaceMoved(Point::new(position.x, position.y)));
        });
    }
}

fn emit(tx: &AsyncSender<AppEvent>, event: AppEvent) {
    let tx = tx.clone();
    let queued = slint::spawn_local(async move {
        if let Err(e) = tx.send(event).await {
            tracing::warn!("[SLINT] Controller is gone: {}", e);
        }
    });
    if let Err(e) = queued {
        tracing::error!("[SLINT] Failed to queue UI event: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_is_offset_by_overlay_origin() {
        // overlay on a second monitor at physical x=1920, scale 1.5
        let rect = selection_rect(
            PhysicalPosition::new(1920, 300),
            1.5,
            10.4,
            20.0,
            100.0,
            49.6,
        );
        assert_eq!(rect, SelectionRect::new(1290, 220, 100, 50));
    }

    #[test]
    fn backwards_drag_keeps_its_sign() {
        let rect = selection_rect(PhysicalPosition::new(0, 0), 1.0, 300.0, 300.0, -200.0, -50.0);
        assert_eq!(rect, SelectionRect::new(300, 300, -200, -50));
    }

    #[test]
    fn indicator_surrounds_region() {
        let (position, size) = indicator_bounds(SelectionRect::new(100, 50, 200, 80));
        assert_eq!(position, LogicalPosition::new(96.0, 46.0));
        assert_eq!(size, LogicalSize::new(208.0, 88.0));
    }

    #[test]
    fn click_on_header_is_not_a_move() {
        let header = HeaderDrag::default();
        header.press();
        header.drag(0.0, 0.0);
        assert!(!header.release());
    }

    #[test]
    fn drag_on_header_is_a_move_once() {
        let header = HeaderDrag::default();
        header.press();
        header.drag(3.0, -1.0);
        assert!(header.release());
        assert!(!header.release());

        header.press();
        assert!(!header.release());
    }
}

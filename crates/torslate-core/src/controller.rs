use std::sync::Arc;

use kanal::AsyncSender;
use torslate_cloud::{TextRecognizer, Translator};
use torslate_config::Config;
use torslate_types::{
    AppEvent, ErrorKind, HotkeyAction, JobId, Mode, SelectionPurpose, SelectionRect,
    TranslationResult,
};

use crate::capture::{CaptureService, ScreenCapture};
use crate::pipeline::TranslationPipeline;
use crate::region::Region;
use crate::state::AppContext;
use crate::surface::{ResultSurfaceManager, SurfaceRenderer};
use crate::worker::spawn_job;

/// Renderer of the interactive selection overlay and the region indicator
pub trait OverlayRenderer: Send + Sync {
    /// Open a full-screen drag overlay; completion arrives as
    /// [`AppEvent::SelectionFinished`]
    fn open_selection(&self, purpose: SelectionPurpose);

    /// Show a click-through dashed border around the remembered region
    fn show_indicator(&self, rect: SelectionRect);

    fn close_indicator(&self);
}

/// External collaborators the controller drives
pub struct Collaborators {
    pub screen: Arc<dyn ScreenCapture>,
    pub recognizer: Arc<dyn TextRecognizer>,
    pub translator: Arc<dyn Translator>,
    pub overlays: Arc<dyn OverlayRenderer>,
    pub surface: Arc<dyn SurfaceRenderer>,
}

/// Hotkey-driven state machine. Single writer of the region store and
/// result surface state.
pub struct ModeController {
    mode: Mode,
    ctx: AppContext,
    capture: CaptureService,
    pipeline: Arc<TranslationPipeline>,
    overlays: Arc<dyn OverlayRenderer>,
    events: AsyncSender<AppEvent>,
    last_job: JobId,
    indicator_open: bool,
}

impl ModeController {
    pub fn new(
        config: Arc<Config>,
        collaborators: Collaborators,
        events: AsyncSender<AppEvent>,
    ) -> Self {
        let pipeline = TranslationPipeline::from_config(
            &config,
            collaborators.recognizer,
            collaborators.translator,
        );

        Self {
            mode: Mode::Idle,
            ctx: AppContext::new(config, collaborators.surface),
            capture: CaptureService::new(collaborators.screen),
            pipeline: Arc::new(pipeline),
            overlays: collaborators.overlays,
            events,
            last_job: JobId(0),
            indicator_open: false,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn region(&self) -> Option<Region> {
        self.ctx.regions.get_region()
    }

    pub fn surface(&self) -> &ResultSurfaceManager {
        &self.ctx.surface
    }

    /// Process one event. Returns `false` once the controller should stop.
    pub fn handle_event(&mut self, event: AppEvent) -> bool {
        match event {
            AppEvent::Hotkey(action) => self.on_hotkey(action),
            AppEvent::SelectionFinished { rect, scale_factor } => {
                self.on_selection(rect, scale_factor)
            }
            AppEvent::JobFinished { id, result } => {
                self.ctx.surface.deliver(id, result);
            }
            AppEvent::SurfaceMoved(position) => self.ctx.surface.move_to(position),
            AppEvent::SurfaceClosed => self.ctx.surface.close(),
            AppEvent::ToggleView => {
                self.ctx.surface.toggle_view();
            }
            AppEvent::Shutdown => {
                tracing::info!("Controller shutting down");
                return false;
            }
        }
        true
    }

    fn on_hotkey(&mut self, action: HotkeyAction) {
        if self.mode != Mode::Idle {
            tracing::warn!("Ignoring {:?} hotkey while {:?}", action, self.mode);
            return;
        }

        match action {
            HotkeyAction::AdHoc => {
                self.set_mode(Mode::AwaitingAdhocSelection);
                self.overlays.open_selection(SelectionPurpose::AdHoc);
            }
            HotkeyAction::RegionSet => {
                if self.indicator_open {
                    self.overlays.close_indicator();
                    self.indicator_open = false;
                }
                self.set_mode(Mode::AwaitingRegionSet);
                self.overlays.open_selection(SelectionPurpose::RegionSet);
            }
            HotkeyAction::Replay => self.replay(),
        }
    }

    fn replay(&mut self) {
        let Some(region) = self.ctx.regions.get_region() else {
            tracing::warn!("Replay requested before any region was set");
            let id = self.next_job_id();
            self.ctx
                .surface
                .deliver(id, TranslationResult::failure(None, ErrorKind::NoRegionSet));
            return;
        };

        self.set_mode(Mode::ReplayingRegion);
        self.dispatch(region);
        self.set_mode(Mode::Idle);
    }

    fn on_selection(&mut self, rect: Option<SelectionRect>, scale_factor: f64) {
        match self.mode {
            Mode::AwaitingAdhocSelection => {
                self.set_mode(Mode::Idle);
                if let Some(region) = self.capture.accept_selection(rect, scale_factor) {
                    self.dispatch(region);
                }
            }
            Mode::AwaitingRegionSet => {
                self.set_mode(Mode::Idle);
                let Some(rect) = rect else {
                    tracing::debug!("Region selection cancelled");
                    return;
                };

                match self.ctx.regions.set_region(rect, scale_factor) {
                    Ok(region) => {
                        tracing::info!("Region saved: {:?}", region.rect());
                        self.overlays.show_indicator(region.rect());
                        self.indicator_open = true;
                    }
                    Err(e) => tracing::debug!("Region selection discarded: {}", e),
                }
            }
            mode => tracing::warn!("Unexpected selection result while {:?}", mode),
        }
    }

    fn dispatch(&mut self, region: Region) -> JobId {
        let id = self.next_job_id();
        tracing::info!("Dispatching job {} for {:?}", id, region.rect());

        spawn_job(
            id,
            region,
            self.capture.clone(),
            self.pipeline.clone(),
            self.events.clone(),
        );
        id
    }

    fn next_job_id(&mut self) -> JobId {
        self.last_job = self.last_job.next();
        self.last_job
    }

    fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            tracing::debug!("Mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }
}

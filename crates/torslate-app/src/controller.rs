use std::sync::Arc;
use std::time::Duration;

use kanal::{AsyncReceiver, AsyncSender, Receiver, Sender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use torslate_capture::{HotkeyListener, XcapCapture};
use torslate_config::Config;
use torslate_core::{Collaborators, ModeController};
use torslate_types::{AppEvent, UiCommand};
use torslate_ui::ChannelRenderer;

use crate::events::event_loop;
use crate::io::{hotkey_listener, shutdown_signal};
use crate::providers;

/// Centralized channel management
pub struct ChannelSet {
    /// Hotkeys, UI callbacks and worker reports into the controller
    pub events: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    /// Controller to the UI thread; never blocks the sender
    pub ui: (Sender<UiCommand>, Receiver<UiCommand>),
}

impl ChannelSet {
    pub fn new(capacity: usize) -> Self {
        Self {
            events: kanal::bounded_async(capacity),
            ui: kanal::unbounded(),
        }
    }
}

/// Wire the engine to the real providers and the UI channel
pub fn build_mode_controller(
    config: Arc<Config>,
    renderer: ChannelRenderer,
    events: AsyncSender<AppEvent>,
) -> ModeController {
    let renderer = Arc::new(renderer);
    let collaborators = Collaborators {
        screen: Arc::new(XcapCapture::new()),
        recognizer: Arc::new(providers::recognizer(&config)),
        translator: Arc::new(providers::translator(&config)),
        overlays: renderer.clone(),
        surface: renderer,
    };
    ModeController::new(config, collaborators, events)
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    config: Arc<Config>,
    channels: ChannelSet,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(config: Arc<Config>) -> Self {
        let channels = ChannelSet::new(config.pipeline.channel_capacity);
        Self {
            config,
            channels,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Ends of the channels the UI thread needs
    pub fn ui_channels(&self) -> (AsyncReceiver<UiCommand>, AsyncSender<AppEvent>) {
        (
            self.channels.ui.1.clone_async(),
            self.channels.events.0.clone(),
        )
    }

    /// Spawn the controller loop, hotkey listener and signal handler.
    /// Must be called inside the runtime.
    pub fn spawn_tasks(&self, hotkeys: Option<HotkeyListener>) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();
        let renderer = ChannelRenderer::new(self.channels.ui.0.clone());

        let mode_controller = build_mode_controller(
            self.config.clone(),
            renderer.clone(),
            self.channels.events.0.clone(),
        );
        tasks.spawn(event_loop(
            mode_controller,
            self.channels.events.1.clone(),
            renderer,
            self.cancel_token.child_token(),
        ));

        match hotkeys {
            Some(listener) => {
                tasks.spawn(hotkey_listener(
                    listener,
                    self.channels.events.0.clone(),
                    self.cancel_token.child_token(),
                ));
            }
            None => tracing::warn!("Running without global hotkeys"),
        }

        tasks.spawn(shutdown_signal(
            self.channels.events.0.clone(),
            self.cancel_token.child_token(),
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }

    /// Wait for spawned tasks, logging failures
    pub async fn join(mut tasks: JoinSet<anyhow::Result<()>>, grace: Duration) {
        let drained = tokio::time::timeout(grace, async {
            while let Some(result) = tasks.join_next().await {
                match result {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => tracing::error!("Task failed: {:#}", e),
                    Err(e) => tracing::error!("Task panicked: {}", e),
                }
            }
        })
        .await;

        if drained.is_err() {
            tracing::warn!("Tasks still running after {:?}, aborting", grace);
        }
    }
}

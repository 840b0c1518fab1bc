use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;
use torslate_core::ModeController;
use torslate_types::AppEvent;
use torslate_ui::ChannelRenderer;

/// Controller loop. Sole owner of the engine state; exits on
/// [`AppEvent::Shutdown`] or cancellation and tells the UI to quit.
pub async fn event_loop(
    mut controller: ModeController,
    events_rx: AsyncReceiver<AppEvent>,
    renderer: ChannelRenderer,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::info!("[EVENT_LOOP] Waiting for events");

    let outcome = loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break Ok(()),
            event = events_rx.recv() => match event {
                Ok(event) => event,
                Err(e) => break Err(e.into()),
            },
        };

        tracing::debug!("[EVENT_LOOP] {:?}", std::mem::discriminant(&event));
        if !controller.handle_event(event) {
            break Ok(());
        }
    };

    renderer.quit();
    tracing::info!("[EVENT_LOOP] Stopped");
    outcome
}

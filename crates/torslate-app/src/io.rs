use std::time::Duration;

use anyhow::Context;
use kanal::AsyncSender;
use tokio_util::sync::CancellationToken;
use torslate_capture::HotkeyListener;
use torslate_types::AppEvent;

const HOTKEY_POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Forward hotkey presses to the controller until cancelled
pub async fn hotkey_listener(
    listener: HotkeyListener,
    event_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    let event_tx = event_tx.to_sync();

    tokio::task::spawn_blocking(move || {
        tracing::info!("Hotkey listener started");

        while !cancel.is_cancelled() {
            if let Some(action) = listener.poll() {
                tracing::info!("Hotkey pressed: {:?}", action);
                match event_tx.try_send(AppEvent::Hotkey(action)) {
                    Ok(true) => {}
                    Ok(false) => tracing::warn!("Controller busy, dropped {:?} hotkey", action),
                    Err(e) => {
                        tracing::warn!("Controller is gone: {}", e);
                        break;
                    }
                }
            }

            std::thread::sleep(HOTKEY_POLL_INTERVAL);
        }

        tracing::info!("Hotkey listener stopping");
    })
    .await
    .context("Hotkey listener panicked")
}

/// Turn Ctrl+C into [`AppEvent::Shutdown`]
pub async fn shutdown_signal(
    event_tx: AsyncSender<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tokio::select! {
        _ = cancel.cancelled() => {}
        signal = tokio::signal::ctrl_c() => {
            signal.context("Failed to listen for Ctrl+C")?;
            tracing::info!("Shutdown requested");
            event_tx.send(AppEvent::Shutdown).await?;
        }
    }
    Ok(())
}

use std::sync::Arc;
use std::time::Duration;

use kanal::Receiver;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use torslate_config::Config;
use torslate_types::{AppEvent, HotkeyAction, SelectionPurpose, UiCommand};
use torslate_ui::ChannelRenderer;

use crate::controller::{ChannelSet, build_mode_controller};
use crate::events::event_loop;
use crate::io::shutdown_signal;

fn drain(rx: &Receiver<UiCommand>) -> Vec<UiCommand> {
    std::iter::from_fn(|| rx.try_recv().ok().flatten()).collect()
}

#[tokio::test]
async fn shutdown_event_stops_loop_and_quits_ui() {
    let channels = ChannelSet::new(8);
    let renderer = ChannelRenderer::new(channels.ui.0.clone());
    let controller = build_mode_controller(
        Arc::new(Config::default()),
        renderer.clone(),
        channels.events.0.clone(),
    );

    let tx = channels.events.0.clone();
    tx.send(AppEvent::Hotkey(HotkeyAction::AdHoc)).await.unwrap();
    tx.send(AppEvent::Shutdown).await.unwrap();

    let finished = timeout(
        Duration::from_secs(2),
        event_loop(
            controller,
            channels.events.1.clone(),
            renderer,
            CancellationToken::new(),
        ),
    )
    .await
    .expect("event loop did not stop");
    assert!(finished.is_ok());

    assert_eq!(
        drain(&channels.ui.1),
        vec![
            UiCommand::OpenSelection(SelectionPurpose::AdHoc),
            UiCommand::Quit
        ]
    );
}

#[tokio::test]
async fn cancellation_stops_idle_loop() {
    let channels = ChannelSet::new(8);
    let renderer = ChannelRenderer::new(channels.ui.0.clone());
    let controller = build_mode_controller(
        Arc::new(Config::default()),
        renderer.clone(),
        channels.events.0.clone(),
    );
    let cancel = CancellationToken::new();

    let running = tokio::spawn(event_loop(
        controller,
        channels.events.1.clone(),
        renderer,
        cancel.clone(),
    ));
    cancel.cancel();

    timeout(Duration::from_secs(2), running)
        .await
        .expect("event loop ignored cancellation")
        .unwrap()
        .unwrap();
    assert_eq!(drain(&channels.ui.1), vec![UiCommand::Quit]);
}

#[tokio::test]
async fn cancelled_signal_handler_returns_quietly() {
    let (tx, rx) = kanal::bounded_async(1);
    let cancel = CancellationToken::new();
    cancel.cancel();

    shutdown_signal(tx.clone(), cancel).await.unwrap();
    assert!(rx.try_recv().unwrap().is_none());
}

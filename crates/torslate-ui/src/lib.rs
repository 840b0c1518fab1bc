use std::rc::Rc;

use kanal::{AsyncReceiver, AsyncSender};
use torslate_types::{AppEvent, UiCommand};

mod bridge;
mod events;
mod state;

pub use bridge::ChannelRenderer;

use crate::state::UiState;

slint::include_modules!();

/// Run the UI event loop on the current thread until [`UiCommand::Quit`]
/// arrives or the command channel closes.
///
/// Most platforms require this to be the main thread.
pub fn run_ui(
    commands: AsyncReceiver<UiCommand>,
    events: AsyncSender<AppEvent>,
) -> anyhow::Result<()> {
    let state = Rc::new(UiState::new(events)?);
    events::connect(&state);

    let ui_state = state.clone();
    slint::spawn_local(async move {
        while let Ok(command) = commands.recv().await {
            if !events::handle_command(command, &ui_state) {
                break;
            }
        }
        tracing::info!("[SLINT] Command loop finished");
        slint::quit_event_loop().ok();
    })?;

    slint::run_event_loop_until_quit()?;
    Ok(())
}

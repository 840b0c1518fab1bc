use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use torslate_capture::HotkeyManager;
use torslate_config::Config;

mod cli;
mod commands;
mod controller;
mod events;
mod io;
mod logging;
mod profile;
mod providers;

#[cfg(test)]
mod tests;

use crate::cli::{Cli, Command};
use crate::controller::AppController;
use crate::profile::{ProfileOrigin, ProfileStore};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let dotenv = dotenvy::dotenv();

    let store = ProfileStore::user()?;
    store.init()?;
    let (config, origin) = store.load(&cli.profile)?;
    let config = config.with_env_overrides();

    logging::init(&config.logging);
    if let Ok(path) = dotenv {
        tracing::debug!("Loaded {}", path.display());
    }
    match &origin {
        ProfileOrigin::Named(name) => tracing::info!("Using profile {}", name),
        ProfileOrigin::MainFallback { requested } => {
            tracing::warn!("Profile {} not found, using main", requested)
        }
        ProfileOrigin::Defaults => tracing::warn!("No profile found, using built-in defaults"),
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    match cli.command {
        Some(Command::Translate { text, detect }) => {
            runtime.block_on(commands::translate(&config, &text, detect))
        }
        Some(Command::Image { path }) => runtime.block_on(commands::image(&config, &path)),
        Some(Command::NewProfile { name }) => commands::new_profile(&store, &name),
        None => run_interactive(config, runtime),
    }
}

/// Hotkeys, controller and UI. The UI owns the main thread.
fn run_interactive(config: Config, runtime: tokio::runtime::Runtime) -> anyhow::Result<()> {
    providers::check_keys(&config);

    // registration needs the thread that pumps platform events
    let hotkeys = match HotkeyManager::register(&config.hotkeys) {
        Ok(registered) => Some(registered),
        Err(e) => {
            tracing::error!("Global hotkeys unavailable: {:#}", e);
            None
        }
    };
    let (_hotkey_manager, listener) = hotkeys.unzip();

    let app = AppController::new(Arc::new(config));
    let (ui_commands, ui_events) = app.ui_channels();
    let tasks = {
        let _guard = runtime.enter();
        app.spawn_tasks(listener)
    };

    tracing::info!("torslate running");
    let ui_result = torslate_ui::run_ui(ui_commands, ui_events);

    app.shutdown();
    runtime.block_on(AppController::join(tasks, SHUTDOWN_GRACE));
    runtime.shutdown_timeout(SHUTDOWN_GRACE);

    ui_result
}

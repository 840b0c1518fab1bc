use std::collections::HashMap;

use anyhow::{Context, Result};
use global_hotkey::{GlobalHotKeyEvent, GlobalHotKeyManager, HotKeyState, hotkey::HotKey};
use torslate_config::HotkeyConfig;
use torslate_types::HotkeyAction;

/// Parse the configured accelerators, e.g. `ctrl+alt+KeyT`
pub fn parse_bindings(config: &HotkeyConfig) -> Result<Vec<(HotkeyAction, HotKey)>> {
    [
        (HotkeyAction::AdHoc, &config.adhoc),
        (HotkeyAction::RegionSet, &config.region_set),
        (HotkeyAction::Replay, &config.replay),
    ]
    .into_iter()
    .map(|(action, binding)| {
        let hotkey = binding
            .parse::<HotKey>()
            .with_context(|| format!("Invalid {:?} hotkey '{}'", action, binding))?;
        Ok((action, hotkey))
    })
    .collect()
}

/// Owns the global shortcut registrations.
///
/// Create it on the thread that runs the platform event loop and keep it
/// alive for as long as the shortcuts should work.
pub struct HotkeyManager {
    manager: GlobalHotKeyManager,
    hotkeys: Vec<HotKey>,
}

impl HotkeyManager {
    pub fn register(config: &HotkeyConfig) -> Result<(Self, HotkeyListener)> {
        let bindings = parse_bindings(config)?;
        let manager = GlobalHotKeyManager::new().context("Failed to create hotkey manager")?;

        let mut hotkeys = Vec::with_capacity(bindings.len());
        for (action, hotkey) in &bindings {
            manager
                .register(*hotkey)
                .with_context(|| format!("Failed to register {:?} hotkey", action))?;
            tracing::info!("Hotkey registered for {:?}: {:?}", action, hotkey);
            hotkeys.push(*hotkey);
        }

        Ok((Self { manager, hotkeys }, HotkeyListener::new(&bindings)))
    }
}

impl Drop for HotkeyManager {
    fn drop(&mut self) {
        if let Err(e) = self.manager.unregister_all(&self.hotkeys) {
            tracing::warn!("Failed to unregister hotkeys: {}", e);
        }
    }
}

/// Maps hotkey events to actions. Can be polled from any thread.
#[derive(Debug, Clone)]
pub struct HotkeyListener {
    actions: HashMap<u32, HotkeyAction>,
}

impl HotkeyListener {
    pub fn new(bindings: &[(HotkeyAction, HotKey)]) -> Self {
        Self {
            actions: bindings
                .iter()
                .map(|(action, hotkey)| (hotkey.id(), *action))
                .collect(),
        }
    }

    /// Next pressed hotkey, if any (non-blocking)
    pub fn poll(&self) -> Option<HotkeyAction> {
        let receiver = GlobalHotKeyEvent::receiver();
        while let Ok(event) = receiver.try_recv() {
            if let Some(action) = self.action_for(&event) {
                return Some(action);
            }
        }
        None
    }

    fn action_for(&self, event: &GlobalHotKeyEvent) -> Option<HotkeyAction> {
        if event.state != HotKeyState::Pressed {
            return None;
        }
        let action = self.actions.get(&event.id).copied();
        if action.is_none() {
            tracing::debug!("Unknown hotkey id {}", event.id);
        }
        action
    }
}

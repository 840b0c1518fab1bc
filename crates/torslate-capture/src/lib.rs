mod capture;
mod hotkey;

pub use capture::XcapCapture;
pub use hotkey::{HotkeyListener, HotkeyManager, parse_bindings};

//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for copy shortcuts
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Continue/submit shortcut display for form help text
/// Ctrl+S works on all platforms
pub const CONTINUE_SHORTCUT: &str = "Ctrl+S";

/// Copy shortcut display
/// - macOS: "Cmd+C"
/// - Linux/Windows: "Ctrl+C" is taken by quit, so plain "c"
#[cfg(target_os = "macos")]
pub const COPY_SHORTCUT: &str = "Cmd+C";

#[cfg(not(target_os = "macos"))]
pub const COPY_SHORTCUT: &str = "c";

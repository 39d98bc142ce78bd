//! Browser Confirmation
//!
//! Blocking `window.confirm()` dialog behind the controller's `Confirm`.

use blog_sync::Prompt;
use tracing::warn;

/// Ask with the native dialog; no window means no
pub fn window_confirm(prompt: &Prompt) -> bool {
    let Some(window) = web_sys::window() else {
        warn!("no window available for confirmation");
        return false;
    };
    window.confirm_with_message(&prompt.message()).unwrap_or(false)
}

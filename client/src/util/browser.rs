//! Thin wrappers over browser APIs used by components.
//!
//! Every helper is a no-op (or returns the "nothing happened" value) outside
//! the browser so SSR stays deterministic.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

#[cfg(feature = "hydrate")]
use crate::state::product_form::SelectedFile;

/// Ask the user to confirm with a native dialog.
///
/// Returns `false` when the dialog cannot be shown.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        match web_sys::window().map(|w| w.confirm_with_message(message)) {
            Some(Ok(confirmed)) => confirmed,
            Some(Err(err)) => {
                log::warn!("confirm dialog failed: {err:?}");
                false
            }
            None => false,
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Go back one entry in the session history.
pub fn history_back() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.history().and_then(|history| history.back()) {
            log::warn!("history.back failed: {err:?}");
        }
    }
}

/// First file picked in a file input, if any.
#[cfg(feature = "hydrate")]
pub fn picked_file(input: &web_sys::HtmlInputElement) -> Option<SelectedFile> {
    let file = input.files()?.get(0)?;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let size = file.size().max(0.0) as u64;
    Some(SelectedFile { name: file.name(), size })
}

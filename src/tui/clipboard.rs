//! Clipboard helper for copying the conversion result
//!
//! Uses `arboard` crate for cross-platform support (Windows, macOS, Linux).
//! The clipboard is created fresh each time to avoid holding resources.

use anyhow::{bail, Context, Result};
use arboard::Clipboard;

/// Copy text to the system clipboard
///
/// Common failure cases: nothing to copy, no display server (headless
/// Linux), permission denied.
pub fn copy_to_clipboard(text: &str) -> Result<()> {
    if text.is_empty() {
        bail!("Nothing to copy");
    }
    let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to set clipboard text")?;
    tracing::debug!(chars = text.chars().count(), "Result copied to clipboard");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_rejected_before_clipboard_access() {
        let err = copy_to_clipboard("").unwrap_err();
        assert_eq!(err.to_string(), "Nothing to copy");
    }
}

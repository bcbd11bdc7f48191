// SPDX-License-Identifier: MPL-2.0
//! Clipboard copy with a single fallback attempt.
//!
//! Clipboard access can fail transiently (headless session, another process
//! holding the clipboard, denied permissions). The helper makes one primary
//! attempt and one fallback attempt through a freshly constructed context,
//! then gives up. No error escapes past [`copy_text`] unconverted; callers
//! map the result onto button feedback.

use crate::error::{Error, Result};

/// Writes `text` through a short-lived clipboard context.
///
/// The context is dropped on every exit path, success or failure.
fn write_through_new_context(text: &str) -> std::result::Result<(), String> {
    let mut clipboard = arboard::Clipboard::new().map_err(|e| e.to_string())?;
    clipboard.set_text(text.to_owned()).map_err(|e| e.to_string())
}

/// Copies `text` to the system clipboard.
///
/// On primary failure a single fallback attempt is made with a fresh
/// context. The fallback failure is reported as [`Error::Clipboard`]; the
/// caller decides how to surface it (danger feedback on the triggering
/// button).
pub fn copy_text(text: &str) -> Result<()> {
    match write_through_new_context(text) {
        Ok(()) => Ok(()),
        Err(primary) => {
            eprintln!("Clipboard write failed: {primary}; retrying with a fresh context");
            write_through_new_context(text).map_err(Error::Clipboard)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ignore = "Clipboard not available in CI/headless environments"]
    fn copy_text_round_trips() {
        copy_text("newsdesk clipboard test").expect("copy should succeed");

        let mut clipboard = arboard::Clipboard::new().expect("clipboard unavailable");
        assert_eq!(
            clipboard.get_text().expect("read should succeed"),
            "newsdesk clipboard test"
        );
    }
}

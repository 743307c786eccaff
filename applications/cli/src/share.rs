//! Terminal share target
//!
//! Terminals have no share sheet, so sharing always falls back to the
//! clipboard. The clipboard is reached through the OSC 52 escape sequence,
//! which most terminal emulators (and tmux with `set-clipboard on`) forward
//! to the system clipboard, including over SSH.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::io::Write;
use tilawa_playback::{ShareError, ShareTarget};
use tracing::debug;

/// OSC 52 sequence setting the clipboard to `text`
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()))
}

/// Writes clipboard requests to a terminal
pub struct TerminalShare<W> {
    out: std::sync::Mutex<W>,
}

impl TerminalShare<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> TerminalShare<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: std::sync::Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[async_trait]
impl<W: Write + Send> ShareTarget for TerminalShare<W> {
    fn supports_native_share(&self) -> bool {
        false
    }

    async fn share(&self, _text: &str) -> Result<(), ShareError> {
        Err(ShareError::Unsupported)
    }

    async fn copy_to_clipboard(&self, text: &str) -> Result<(), ShareError> {
        let sequence = osc52_sequence(text);
        let mut out = self
            .out
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        out.write_all(sequence.as_bytes())
            .and_then(|_| out.flush())
            .map_err(|e| ShareError::Failed(e.to_string()))?;
        debug!(bytes = text.len(), "Clipboard write requested");
        Ok(())
    }
}

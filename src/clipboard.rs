//! Clipboard access for paste.

/// Source of pasted text. `None` means nothing usable, and paste does nothing.
pub trait Clipboard {
    fn get_text(&mut self) -> Option<String>;
}

/// System clipboard. Connection is opened per read, so a clipboard manager
/// that starts later is still picked up.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn get_text(&mut self) -> Option<String> {
        let text = arboard::Clipboard::new().and_then(|mut cb| cb.get_text());
        match text {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::warn!("clipboard unavailable: {e}");
                None
            }
        }
    }
}

/// Fixed contents, for tests and headless runs.
#[derive(Debug, Default, Clone)]
pub struct StaticClipboard(pub Option<String>);

impl Clipboard for StaticClipboard {
    fn get_text(&mut self) -> Option<String> {
        self.0.clone()
    }
}

use arboard::Clipboard;

use crate::domain::AppError;
use crate::ports::ClipboardWriter;

/// System clipboard backed by arboard. The clipboard is opened on first write.
#[derive(Default)]
pub struct ArboardClipboard {
    clipboard: Option<Clipboard>,
}

impl ArboardClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn open(&mut self) -> Result<&mut Clipboard, AppError> {
        let clipboard = match self.clipboard.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new().map_err(|e| AppError::ClipboardError(e.to_string()))?,
        };
        Ok(self.clipboard.insert(clipboard))
    }
}

impl ClipboardWriter for ArboardClipboard {
    fn write_text(&mut self, text: &str) -> Result<(), AppError> {
        self.open()?.set_text(text).map_err(|e| AppError::ClipboardError(e.to_string()))
    }
}

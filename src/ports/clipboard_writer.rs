use crate::domain::AppError;

/// Port for handing a finished prompt to the system clipboard.
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> Result<(), AppError>;
}

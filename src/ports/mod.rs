mod clipboard_writer;
mod config_store;

pub use clipboard_writer::ClipboardWriter;
pub use config_store::{ConfigStore, PARAMETERS_FILE, PROMPTS_FILE};

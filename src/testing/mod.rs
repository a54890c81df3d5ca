//! In-crate fakes for the ports.

mod memory_config_store;
mod mock_clipboard;

pub use memory_config_store::{MemoryConfigStore, SAMPLE_PARAMETERS};
pub use mock_clipboard::MockClipboard;

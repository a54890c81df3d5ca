mod clipboard_arboard;
mod config_embedded;
mod config_filesystem;

pub use clipboard_arboard::ArboardClipboard;
pub use config_embedded::EmbeddedConfigStore;
pub use config_filesystem::FilesystemConfigStore;

mod entry;
mod session;
mod store;

pub use entry::SelectionEntry;
pub use session::PromptSession;
pub use store::{AddOutcome, Selection, ToggleOutcome};

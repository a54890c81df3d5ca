use crate::domain::{Language, Settings};
use crate::ports::ConfigStore;

/// Application context holding dependencies for command execution.
pub struct AppContext<C: ConfigStore> {
    store: C,
    settings: Settings,
}

impl<C: ConfigStore> AppContext<C> {
    pub fn new(store: C, settings: Settings) -> Self {
        Self { store, settings }
    }

    /// Config store the catalog and parameter definitions are read from.
    pub fn store(&self) -> &C {
        &self.store
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Language used for labels in listings.
    pub fn language(&self) -> Language {
        self.settings.language
    }
}

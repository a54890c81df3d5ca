//! Live selection state: ordered entries plus the subject text.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::entry::SelectionEntry;
use crate::domain::AppError;
use crate::domain::catalog::{FragmentKey, PromptsConfig};
use crate::domain::prompt::{GroupedSelection, group_by_position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadySelected,
    UnknownFragment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
    UnknownFragment,
}

/// Selected fragments kept in ascending `order`, unique by [`FragmentKey`].
///
/// Order values come from a private counter that only grows, so an entry
/// added later always sorts after every existing entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "SelectionRecord")]
pub struct Selection {
    entries: Vec<SelectionEntry>,
    #[serde(default)]
    subject: String,
    #[serde(default)]
    next_order: u64,
}

/// Serialized form of a [`Selection`], checked before it becomes one.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SelectionRecord {
    entries: Vec<SelectionEntry>,
    #[serde(default)]
    subject: String,
    #[serde(default)]
    next_order: u64,
}

impl TryFrom<SelectionRecord> for Selection {
    type Error = AppError;

    fn try_from(record: SelectionRecord) -> Result<Self, AppError> {
        let mut entries = record.entries;
        entries.sort_by_key(|e| e.order);

        let mut seen = HashSet::new();
        if let Some(duplicate) = entries.iter().find(|e| !seen.insert(&e.key)) {
            return Err(AppError::InvalidSelection(format!(
                "'{}' is selected more than once",
                duplicate.key
            )));
        }

        let next_order = entries.last().map_or(0, |e| e.order + 1).max(record.next_order);
        Ok(Self { entries, subject: record.subject, next_order })
    }
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[SelectionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.subject = subject.into();
    }

    pub fn is_selected(&self, key: &FragmentKey) -> bool {
        self.entries.iter().any(|e| e.key == *key)
    }

    /// Select the fragment named by `key`, capturing its text and the owning
    /// category's position tag. Unknown and duplicate keys are no-ops.
    pub fn add(&mut self, catalog: &PromptsConfig, key: &FragmentKey) -> AddOutcome {
        if self.is_selected(key) {
            return AddOutcome::AlreadySelected;
        }

        let (Some(category), Some(fragment)) =
            (catalog.category(&key.category_id), catalog.fragment(key))
        else {
            tracing::warn!(selector = %key, "prompt not found in catalog");
            return AddOutcome::UnknownFragment;
        };

        let order = self.next_order();
        self.entries.push(SelectionEntry::new(
            key.clone(),
            fragment.text.clone(),
            category.position_tag(),
            order,
        ));
        AddOutcome::Added
    }

    /// Remove the entry with exactly this key. Returns whether one was removed.
    pub fn remove(&mut self, key: &FragmentKey) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.key != *key);
        self.entries.len() != before
    }

    pub fn toggle(&mut self, catalog: &PromptsConfig, key: &FragmentKey) -> ToggleOutcome {
        if self.remove(key) {
            return ToggleOutcome::Removed;
        }
        match self.add(catalog, key) {
            AddOutcome::Added | AddOutcome::AlreadySelected => ToggleOutcome::Added,
            AddOutcome::UnknownFragment => ToggleOutcome::UnknownFragment,
        }
    }

    /// Move the entry at position `from` to position `to` and renumber every
    /// entry with fresh order values.
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), AppError> {
        let len = self.entries.len();
        if from >= len || to >= len {
            return Err(AppError::InvalidReorder { from, to, len });
        }

        let moved = self.entries.remove(from);
        self.entries.insert(to, moved);
        let base = self.next_order;
        for (offset, entry) in self.entries.iter_mut().enumerate() {
            entry.order = base + offset as u64;
        }
        self.next_order = base + len as u64;
        Ok(())
    }

    /// Drop every entry and the subject.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.subject.clear();
    }

    /// Entry texts in selection order.
    pub fn texts(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.text.as_str()).collect()
    }

    pub fn grouped(&self) -> GroupedSelection<'_> {
        group_by_position(&self.entries)
    }

    fn next_order(&mut self) -> u64 {
        let order = self.next_order;
        self.next_order += 1;
        order
    }
}

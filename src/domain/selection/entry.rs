use serde::{Deserialize, Serialize};

use crate::domain::PositionTag;
use crate::domain::catalog::FragmentKey;

/// One selected fragment. `text` and `position_tag` are captured when the
/// fragment is selected and are not re-resolved against the catalog later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionEntry {
    #[serde(flatten)]
    pub key: FragmentKey,
    pub text: String,
    #[serde(default)]
    pub position_tag: PositionTag,
    /// Sequence value; entries render in ascending order.
    pub order: u64,
}

impl SelectionEntry {
    pub fn new(
        key: FragmentKey,
        text: impl Into<String>,
        position_tag: PositionTag,
        order: u64,
    ) -> Self {
        Self { key, text: text.into(), position_tag, order }
    }
}

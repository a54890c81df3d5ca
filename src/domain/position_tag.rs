use std::fmt;

use serde::{Deserialize, Serialize};

/// Role of a category's fragments within the assembled prompt body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PositionTag {
    /// Rendered after the `photography by` prefix.
    Artist,
    /// Framing, lens and shot type, rendered before the subject.
    Camera,
    /// Rendered after the subject.
    Lighting,
    /// Everything else, rendered last.
    #[default]
    Other,
}

impl PositionTag {
    /// All tags in body order.
    pub const ALL: [PositionTag; 4] =
        [PositionTag::Artist, PositionTag::Camera, PositionTag::Lighting, PositionTag::Other];

    /// Tag name as written in `prompts.yaml`.
    pub fn as_str(&self) -> &'static str {
        match self {
            PositionTag::Artist => "artist",
            PositionTag::Camera => "camera",
            PositionTag::Lighting => "lighting",
            PositionTag::Other => "other",
        }
    }

    /// Parse a tag name, returning `None` for names outside the enumeration.
    pub fn parse(name: &str) -> Option<PositionTag> {
        match name.trim().to_lowercase().as_str() {
            "artist" => Some(PositionTag::Artist),
            "camera" => Some(PositionTag::Camera),
            "lighting" => Some(PositionTag::Lighting),
            "other" => Some(PositionTag::Other),
            _ => None,
        }
    }

    /// Resolve an optional tag name, falling back to `Other`.
    pub fn resolve(name: Option<&str>) -> PositionTag {
        name.and_then(PositionTag::parse).unwrap_or_default()
    }
}

impl From<String> for PositionTag {
    fn from(value: String) -> Self {
        PositionTag::resolve(Some(&value))
    }
}

impl From<PositionTag> for String {
    fn from(value: PositionTag) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for PositionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_roundtrips_every_tag() {
        for tag in PositionTag::ALL {
            assert_eq!(PositionTag::parse(tag.as_str()), Some(tag));
        }
    }

    #[test]
    fn unknown_or_missing_tags_resolve_to_other() {
        assert_eq!(PositionTag::resolve(None), PositionTag::Other);
        assert_eq!(PositionTag::resolve(Some("composition")), PositionTag::Other);
        assert_eq!(PositionTag::resolve(Some(" Camera ")), PositionTag::Camera);
    }

    #[test]
    fn deserializes_unknown_tag_as_other() {
        let tag: PositionTag = serde_yaml::from_str("texture").unwrap();
        assert_eq!(tag, PositionTag::Other);
        let tag: PositionTag = serde_yaml::from_str("lighting").unwrap();
        assert_eq!(tag, PositionTag::Lighting);
    }
}

use std::fmt;

use crate::domain::AppError;

/// How a parameter's value is typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterKind {
    Text,
    Number,
    Switch,
}

impl ParameterKind {
    pub fn name(&self) -> &'static str {
        match self {
            ParameterKind::Text => "text",
            ParameterKind::Number => "number",
            ParameterKind::Switch => "switch",
        }
    }
}

/// Every generation parameter, declared in flag emission order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParameterKey {
    Version,
    AspectRatio,
    Stylize,
    Chaos,
    Quality,
    Weird,
    ImageWeight,
    StyleWeight,
    StyleRef,
    CharacterRef,
    No,
    Tile,
    Style,
    Seed,
    Stop,
}

impl ParameterKey {
    /// All keys in the order their flags are emitted.
    pub const ALL: [ParameterKey; 15] = [
        ParameterKey::Version,
        ParameterKey::AspectRatio,
        ParameterKey::Stylize,
        ParameterKey::Chaos,
        ParameterKey::Quality,
        ParameterKey::Weird,
        ParameterKey::ImageWeight,
        ParameterKey::StyleWeight,
        ParameterKey::StyleRef,
        ParameterKey::CharacterRef,
        ParameterKey::No,
        ParameterKey::Tile,
        ParameterKey::Style,
        ParameterKey::Seed,
        ParameterKey::Stop,
    ];

    /// Identifier used in `parameters.yaml` and on the command line.
    pub fn id(&self) -> &'static str {
        match self {
            ParameterKey::Version => "version",
            ParameterKey::AspectRatio => "aspectRatio",
            ParameterKey::Stylize => "stylize",
            ParameterKey::Chaos => "chaos",
            ParameterKey::Quality => "quality",
            ParameterKey::Weird => "weird",
            ParameterKey::ImageWeight => "imageWeight",
            ParameterKey::StyleWeight => "styleWeight",
            ParameterKey::StyleRef => "styleRef",
            ParameterKey::CharacterRef => "characterRef",
            ParameterKey::No => "no",
            ParameterKey::Tile => "tile",
            ParameterKey::Style => "style",
            ParameterKey::Seed => "seed",
            ParameterKey::Stop => "stop",
        }
    }

    /// Midjourney flag. `Version` switches to `--niji` for Niji models.
    pub fn flag(&self) -> &'static str {
        match self {
            ParameterKey::Version => "--v",
            ParameterKey::AspectRatio => "--ar",
            ParameterKey::Stylize => "--s",
            ParameterKey::Chaos => "--c",
            ParameterKey::Quality => "--q",
            ParameterKey::Weird => "--weird",
            ParameterKey::ImageWeight => "--iw",
            ParameterKey::StyleWeight => "--sw",
            ParameterKey::StyleRef => "--sref",
            ParameterKey::CharacterRef => "--cref",
            ParameterKey::No => "--no",
            ParameterKey::Tile => "--tile",
            ParameterKey::Style => "--style",
            ParameterKey::Seed => "--seed",
            ParameterKey::Stop => "--stop",
        }
    }

    pub fn kind(&self) -> ParameterKind {
        match self {
            ParameterKey::Version
            | ParameterKey::AspectRatio
            | ParameterKey::Quality
            | ParameterKey::StyleRef
            | ParameterKey::CharacterRef
            | ParameterKey::No
            | ParameterKey::Style => ParameterKind::Text,
            ParameterKey::Stylize
            | ParameterKey::Chaos
            | ParameterKey::Weird
            | ParameterKey::ImageWeight
            | ParameterKey::StyleWeight
            | ParameterKey::Seed
            | ParameterKey::Stop => ParameterKind::Number,
            ParameterKey::Tile => ParameterKind::Switch,
        }
    }

    /// Parse an identifier. Accepts the camelCase id, its lowercase form, or
    /// the flag name with or without dashes (`ar`, `--ar`).
    pub fn from_id(id: &str) -> Option<ParameterKey> {
        let trimmed = id.trim();
        let bare = trimmed.trim_start_matches('-');
        ParameterKey::ALL.into_iter().find(|key| {
            key.id() == trimmed
                || key.id().eq_ignore_ascii_case(trimmed)
                || key.flag().trim_start_matches('-') == bare
        })
    }

    pub fn parse(id: &str) -> Result<ParameterKey, AppError> {
        ParameterKey::from_id(id).ok_or_else(|| AppError::UnknownParameter(id.to_string()))
    }
}

impl fmt::Display for ParameterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

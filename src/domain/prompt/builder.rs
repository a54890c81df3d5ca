//! Prompt assembly: selection snapshot + subject + parameters → prompt string.
//!
//! Everything here is a pure function of its inputs.

use std::fmt;

use crate::domain::PositionTag;
use crate::domain::parameters::{ParameterKey, ParameterValues};
use crate::domain::selection::SelectionEntry;

/// Literal that always opens a grouped prompt body.
pub const PHOTOGRAPHY_PREFIX: &str = "photography";

const SEGMENT_SEPARATOR: &str = ", ";
const NIJI_PREFIX: &str = "niji";

/// Selection entries split by position tag, each group in ascending `order`.
#[derive(Debug, Default, PartialEq)]
pub struct GroupedSelection<'a> {
    pub artist: Vec<&'a SelectionEntry>,
    pub camera: Vec<&'a SelectionEntry>,
    pub lighting: Vec<&'a SelectionEntry>,
    pub other: Vec<&'a SelectionEntry>,
}

impl<'a> GroupedSelection<'a> {
    pub fn group(&self, tag: PositionTag) -> &[&'a SelectionEntry] {
        match tag {
            PositionTag::Artist => &self.artist,
            PositionTag::Camera => &self.camera,
            PositionTag::Lighting => &self.lighting,
            PositionTag::Other => &self.other,
        }
    }
}

pub fn group_by_position(selection: &[SelectionEntry]) -> GroupedSelection<'_> {
    let mut ordered: Vec<&SelectionEntry> = selection.iter().collect();
    ordered.sort_by_key(|entry| entry.order);

    let mut groups = GroupedSelection::default();
    for entry in ordered {
        match entry.position_tag {
            PositionTag::Artist => groups.artist.push(entry),
            PositionTag::Camera => groups.camera.push(entry),
            PositionTag::Lighting => groups.lighting.push(entry),
            PositionTag::Other => groups.other.push(entry),
        }
    }
    groups
}

/// A single emitted flag token such as `--ar 16:9` or `--tile`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterFlag {
    pub key: ParameterKey,
    pub name: &'static str,
    pub value: Option<String>,
}

impl ParameterFlag {
    fn valued(key: ParameterKey, value: impl Into<String>) -> Self {
        Self { key, name: key.flag(), value: Some(value.into()) }
    }

    fn bare(key: ParameterKey) -> Self {
        Self { key, name: key.flag(), value: None }
    }
}

impl fmt::Display for ParameterFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Some(value) => write!(f, "{} {}", self.name, value),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Assemble the full prompt from grouped selection entries, a free-text
/// subject and parameter values.
///
/// Body order is fixed: `photography[ by <artists>]`, camera, subject,
/// lighting, other. Empty segments are skipped.
pub fn assemble(selection: &[SelectionEntry], subject: &str, params: &ParameterValues) -> String {
    let groups = group_by_position(selection);

    let artists = join_texts(groups.artist.iter().map(|e| e.text.as_str()));
    let lead = if artists.is_empty() {
        PHOTOGRAPHY_PREFIX.to_string()
    } else {
        format!("{} by {}", PHOTOGRAPHY_PREFIX, artists)
    };

    let segments = [
        lead,
        join_texts(groups.camera.iter().map(|e| e.text.as_str())),
        subject.trim().to_string(),
        join_texts(groups.lighting.iter().map(|e| e.text.as_str())),
        join_texts(groups.other.iter().map(|e| e.text.as_str())),
    ];

    let body = join_texts(segments.iter().map(String::as_str));
    with_parameters(body, params)
}

/// Assemble a prompt from texts in the given order, without grouping or a
/// subject. Shares the parameter suffix with [`assemble`].
pub fn assemble_flat<S: AsRef<str>>(texts: &[S], params: &ParameterValues) -> String {
    let body = join_texts(texts.iter().map(AsRef::as_ref));
    with_parameters(body, params)
}

/// A prompt may be submitted only when it has visible content.
pub fn is_valid(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Flags for every parameter whose value differs from its omission rule,
/// in [`ParameterKey::ALL`] order.
pub fn parameter_flags(params: &ParameterValues) -> Vec<ParameterFlag> {
    ParameterKey::ALL.into_iter().filter_map(|key| flag_for(key, params)).collect()
}

fn flag_for(key: ParameterKey, params: &ParameterValues) -> Option<ParameterFlag> {
    match key {
        ParameterKey::Version => present_text(&params.version).map(version_flag),
        ParameterKey::AspectRatio => text_flag(key, present_text(&params.aspect_ratio)),
        ParameterKey::Stylize => number_flag(key, params.stylize, |v| v != 100.0),
        ParameterKey::Chaos => number_flag(key, params.chaos, |v| v > 0.0),
        ParameterKey::Quality => {
            text_flag(key, present_text(&params.quality).filter(|v| *v != "1"))
        }
        ParameterKey::Weird => number_flag(key, params.weird, |v| v > 0.0),
        ParameterKey::ImageWeight => number_flag(key, params.image_weight, |v| v != 1.0),
        ParameterKey::StyleWeight => number_flag(key, params.style_weight, |v| v != 100.0),
        ParameterKey::StyleRef => trimmed_flag(key, &params.style_ref),
        ParameterKey::CharacterRef => trimmed_flag(key, &params.character_ref),
        ParameterKey::No => trimmed_flag(key, &params.no),
        ParameterKey::Tile => params.tile.filter(|on| *on).map(|_| ParameterFlag::bare(key)),
        // Checked trimmed, emitted untrimmed.
        ParameterKey::Style => {
            text_flag(key, params.style.as_deref().filter(|v| !v.trim().is_empty()))
        }
        ParameterKey::Seed => number_flag(key, params.seed, |v| v > 0.0),
        ParameterKey::Stop => number_flag(key, params.stop, |v| v != 100.0),
    }
}

/// `niji-6` → `--niji 6`, bare `niji` → `--niji`, anything else → `--v <value>`.
fn version_flag(version: &str) -> ParameterFlag {
    let key = ParameterKey::Version;
    match version.strip_prefix(NIJI_PREFIX) {
        Some(rest) => {
            let model = rest.strip_prefix('-').unwrap_or(rest);
            let value = (!model.is_empty()).then(|| model.to_string());
            ParameterFlag { key, name: "--niji", value }
        }
        None => ParameterFlag::valued(key, version),
    }
}

fn present_text(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn text_flag(key: ParameterKey, value: Option<&str>) -> Option<ParameterFlag> {
    value.map(|v| ParameterFlag::valued(key, v))
}

fn trimmed_flag(key: ParameterKey, value: &Option<String>) -> Option<ParameterFlag> {
    text_flag(key, value.as_deref().map(str::trim).filter(|v| !v.is_empty()))
}

fn number_flag(
    key: ParameterKey,
    value: Option<f64>,
    include: impl Fn(f64) -> bool,
) -> Option<ParameterFlag> {
    value.filter(|v| include(*v)).map(|v| ParameterFlag::valued(key, v.to_string()))
}

fn join_texts<'a>(texts: impl Iterator<Item = &'a str>) -> String {
    texts.filter(|t| !t.trim().is_empty()).collect::<Vec<_>>().join(SEGMENT_SEPARATOR)
}

/// Append flags after a single space. An empty body yields the flags alone.
fn with_parameters(body: String, params: &ParameterValues) -> String {
    let flags = parameter_flags(params);
    if flags.is_empty() {
        return body;
    }

    let suffix = flags.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ");
    if body.is_empty() { suffix } else { format!("{} {}", body, suffix) }
}

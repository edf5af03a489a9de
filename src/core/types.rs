// src/core/types.rs
use serde::{Deserialize, Serialize};

/// An OCR classification tag with its confidence, as reported by the
/// label-detection service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub description: String,
    pub score: f32,
}

impl Label {
    pub fn new(description: impl Into<String>, score: f32) -> Self {
        Self { description: description.into(), score }
    }
}

/// How tokens are glued together before a pattern runs over them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum JoinMethod {
    /// Patterns run against each token on its own.
    #[default]
    #[serde(rename = "none", alias = "no")]
    None,
    #[serde(rename = "spaceDelimited", alias = "space_delimited")]
    SpaceDelimited,
    #[serde(rename = "noDelimiter", alias = "no_delimiter")]
    NoDelimiter,
}

impl JoinMethod {
    pub fn delimiter(self) -> Option<&'static str> {
        match self {
            JoinMethod::None => None,
            JoinMethod::SpaceDelimited => Some(" "),
            JoinMethod::NoDelimiter => Some(""),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScanDirection {
    #[default]
    #[serde(rename = "leftToRight", alias = "left_to_right")]
    LeftToRight,
    #[serde(rename = "rightToLeft", alias = "right_to_left")]
    RightToLeft,
}

/// Which regex engine a pattern was compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Engine {
    Linear,
    Backtracking,
}

/// A weighted reference color for a denomination, e.g. `"184,156,135": 10.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorHint {
    pub rgb: [u8; 3],
    pub weight: f64,
}

/// What the collaborator hands over for one photograph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognitionRequest {
    pub currency_code: String,
    /// Empty when the caller wants the denomination detected.
    #[serde(default)]
    pub denomination: String,
    #[serde(default)]
    pub tokens: Vec<String>,
    #[serde(default)]
    pub labels: Vec<Label>,
}

/// Outcome of a recognition. Either field may be empty: no matching
/// denomination, or no serial found on the note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognitionResult {
    pub denomination: String,
    pub serial: String,
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique identifier for a scene within a story.
///
/// Scene ids are small integers assigned by the author. They are stable
/// across runs and appear verbatim in diagnostics and path summaries.
/// The default id, 0, is where playthroughs start unless a story says
/// otherwise.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SceneId(pub u32);

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for SceneId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A labeled edge from one scene to another.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    /// The option text shown to the player.
    pub label: String,
    /// The scene this choice leads to.
    #[serde(rename = "goto")]
    pub target: SceneId,
}

impl Choice {
    /// Create a choice with the given label and target scene.
    pub fn new(label: impl Into<String>, target: impl Into<SceneId>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }
}

/// A single node in the story graph: narrative text plus outgoing choices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// Unique identifier of this scene.
    pub id: SceneId,
    /// The narrative text shown when the scene is entered.
    pub text: String,
    /// Outgoing choices, in menu order. Empty for endings.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<Choice>,
}

impl Scene {
    /// Create a scene with the given id and text, and no choices yet.
    pub fn new(id: impl Into<SceneId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            choices: Vec::new(),
        }
    }

    /// Add an outgoing choice.
    pub fn with_choice(mut self, label: impl Into<String>, target: impl Into<SceneId>) -> Self {
        self.choices.push(Choice::new(label, target));
        self
    }

    /// A scene with no outgoing choices ends the story.
    pub fn is_ending(&self) -> bool {
        self.choices.is_empty()
    }
}

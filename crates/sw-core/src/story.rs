use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::audit::AuditReport;
use crate::error::StoryResult;
use crate::scene::{Scene, SceneId};

/// Metadata about the story itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryMeta {
    /// Title shown in the opening banner.
    pub title: String,
    /// Optional subtitle shown beneath the title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    /// Optional sign-off line shown after an ending is reached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub farewell: Option<String>,
    /// The scene every playthrough starts from.
    #[serde(default)]
    pub start: SceneId,
}

impl StoryMeta {
    /// Create metadata with the given title, starting at scene 0.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            tagline: None,
            farewell: None,
            start: SceneId(0),
        }
    }

    /// Set the tagline.
    pub fn with_tagline(mut self, tagline: impl Into<String>) -> Self {
        self.tagline = Some(tagline.into());
        self
    }

    /// Set the farewell line.
    pub fn with_farewell(mut self, farewell: impl Into<String>) -> Self {
        self.farewell = Some(farewell.into());
        self
    }

    /// Set the starting scene.
    pub fn with_start(mut self, start: impl Into<SceneId>) -> Self {
        self.start = start.into();
        self
    }
}

/// A complete story: metadata plus the scene graph. Owns all scenes.
#[derive(Debug, Clone)]
pub struct Story {
    /// Story metadata.
    pub meta: StoryMeta,
    scenes: BTreeMap<SceneId, Scene>,
}

impl Story {
    /// Create an empty story with the given metadata.
    pub fn new(meta: StoryMeta) -> Self {
        Self {
            meta,
            scenes: BTreeMap::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Scenes
    // -----------------------------------------------------------------------

    /// Insert a scene. A scene with an id already present replaces the
    /// earlier one; the replaced scene is returned.
    pub fn insert_scene(&mut self, scene: Scene) -> Option<Scene> {
        self.scenes.insert(scene.id, scene)
    }

    /// Insert a scene, builder-style.
    pub fn with_scene(mut self, scene: Scene) -> Self {
        self.insert_scene(scene);
        self
    }

    /// Get a scene by id.
    pub fn scene(&self, id: SceneId) -> Option<&Scene> {
        self.scenes.get(&id)
    }

    /// Iterate over all scenes in ascending id order.
    pub fn scenes(&self) -> impl Iterator<Item = &Scene> {
        self.scenes.values()
    }

    // -----------------------------------------------------------------------
    // Statistics
    // -----------------------------------------------------------------------

    /// Number of scenes in the story.
    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// Number of scenes with no outgoing choices.
    pub fn ending_count(&self) -> usize {
        self.scenes.values().filter(|s| s.is_ending()).count()
    }

    /// Total number of choices across all scenes.
    pub fn choice_count(&self) -> usize {
        self.scenes.values().map(|s| s.choices.len()).sum()
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    /// Run the structural checks over this story.
    pub fn audit(&self) -> AuditReport {
        AuditReport::of(self)
    }

    // -----------------------------------------------------------------------
    // JSON file form
    // -----------------------------------------------------------------------

    /// Parse a story from its JSON file form.
    ///
    /// Scenes are inserted in file order, so a duplicated id resolves to
    /// the scene that appears later in the file.
    pub fn from_json(source: &str) -> StoryResult<Self> {
        let file: StoryFile = serde_json::from_str(source)?;
        let mut story = Self::new(file.meta);
        for scene in file.scenes {
            story.insert_scene(scene);
        }
        Ok(story)
    }

    /// Serialize the story to pretty-printed JSON, scenes in id order.
    pub fn to_json(&self) -> StoryResult<String> {
        let file = StoryFile {
            meta: self.meta.clone(),
            scenes: self.scenes.values().cloned().collect(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }
}

/// On-disk shape of a story file: metadata fields at the top level,
/// followed by the scene list.
#[derive(Serialize, Deserialize)]
struct StoryFile {
    #[serde(flatten)]
    meta: StoryMeta,
    scenes: Vec<Scene>,
}

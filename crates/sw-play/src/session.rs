//! Playthrough state and the traversal loop.

use std::io::BufRead;

use sw_core::{SceneId, Story};

use crate::error::{PlayError, PlayResult};
use crate::presenter::Presenter;
use crate::prompt::{self, OnClosedInput};

/// Configuration for a playthrough.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayConfig {
    /// Policy for input closing mid-session.
    pub on_closed_input: OnClosedInput,
    /// Start somewhere other than the story's own start scene.
    pub start: Option<SceneId>,
}

impl PlayConfig {
    /// Set the closed-input policy.
    pub fn with_on_closed_input(mut self, policy: OnClosedInput) -> Self {
        self.on_closed_input = policy;
        self
    }

    /// Override the starting scene.
    pub fn with_start(mut self, start: impl Into<SceneId>) -> Self {
        self.start = Some(start.into());
        self
    }
}

/// How a session closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// An ending scene was reached.
    Ended(SceneId),
    /// Input closed before an ending, under [`OnClosedInput::EndSession`].
    Abandoned,
}

/// Where a finished session went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    /// Every scene visited, in visit order. Never empty, and revisits
    /// appear as often as they happened.
    pub history: Vec<SceneId>,
    /// How the session closed.
    pub outcome: Outcome,
}

impl Transcript {
    /// The ending scene, when one was reached.
    pub fn ending(&self) -> Option<SceneId> {
        match self.outcome {
            Outcome::Ended(id) => Some(id),
            Outcome::Abandoned => None,
        }
    }
}

/// A single playthrough of one story.
///
/// The session owns the story for its duration and tracks where it has
/// been. [`Session::run`] consumes the session and returns a [`Transcript`].
#[derive(Debug)]
pub struct Session {
    story: Story,
    config: PlayConfig,
    current: SceneId,
    history: Vec<SceneId>,
}

impl Session {
    /// Create a session positioned at the starting scene.
    ///
    /// Fails when the starting scene, the story's own or the override in
    /// `config`, does not exist.
    pub fn new(story: Story, config: PlayConfig) -> PlayResult<Self> {
        let start = config.start.unwrap_or(story.meta.start);
        if story.scene(start).is_none() {
            return Err(PlayError::SceneNotFound(start));
        }

        Ok(Self {
            story,
            config,
            current: start,
            history: Vec::new(),
        })
    }

    /// The story being played.
    pub fn story(&self) -> &Story {
        &self.story
    }

    /// The scene the session currently stands at.
    pub fn current(&self) -> SceneId {
        self.current
    }

    /// Every scene visited so far, in visit order.
    pub fn history(&self) -> &[SceneId] {
        &self.history
    }

    /// Walk the story until an ending, reading selections from `input`.
    ///
    /// Each iteration handles one scene: look it up, record the visit,
    /// show the text. An ending closes the session with the path summary;
    /// any other scene presents its menu and waits for a valid selection.
    /// A scene id with nothing behind it aborts the playthrough with
    /// [`PlayError::SceneNotFound`]; auditing the story first catches
    /// those before anyone plays.
    pub fn run(
        mut self,
        input: &mut impl BufRead,
        presenter: &mut impl Presenter,
    ) -> PlayResult<Transcript> {
        presenter.opening(&self.story.meta);

        loop {
            let scene = self
                .story
                .scene(self.current)
                .ok_or(PlayError::SceneNotFound(self.current))?;

            self.history.push(scene.id);
            presenter.scene(&scene.text);

            if scene.is_ending() {
                presenter.epilogue(&self.history);
                return Ok(Transcript {
                    history: self.history,
                    outcome: Outcome::Ended(scene.id),
                });
            }

            let labels: Vec<&str> = scene.choices.iter().map(|c| c.label.as_str()).collect();
            presenter.menu(&labels);

            let pick = match prompt::read_selection(
                input,
                presenter,
                scene.choices.len(),
                self.config.on_closed_input,
            ) {
                Some(pick) => pick,
                None => {
                    return Ok(Transcript {
                        history: self.history,
                        outcome: Outcome::Abandoned,
                    });
                }
            };

            self.current = scene.choices[pick - 1].target;
        }
    }
}

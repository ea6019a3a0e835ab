//! The seam between traversal and display.

use sw_core::{SceneId, StoryMeta};

use crate::prompt::Rejection;

/// Receives everything a playthrough wants shown.
///
/// The engine drives a presenter through the whole session: the opening,
/// each scene's text and menu, every prompt and rejection, and the closing
/// path summary. Implementations decide styling and pacing; the engine
/// decides order and content.
pub trait Presenter {
    /// The story is about to start.
    fn opening(&mut self, meta: &StoryMeta);
    /// A scene has been entered.
    fn scene(&mut self, text: &str);
    /// The numbered menu for the current scene, in menu order.
    fn menu(&mut self, labels: &[&str]);
    /// A selection between 1 and `max_option` is wanted.
    fn prompt(&mut self, max_option: usize);
    /// The last input line was rejected.
    fn reject(&mut self, rejection: Rejection);
    /// An ending was reached; `path` lists every visited scene, in order.
    fn epilogue(&mut self, path: &[SceneId]);
}

/// A presenter that shows nothing. Useful for tests and dry runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Presenter for Silent {
    fn opening(&mut self, _meta: &StoryMeta) {}
    fn scene(&mut self, _text: &str) {}
    fn menu(&mut self, _labels: &[&str]) {}
    fn prompt(&mut self, _max_option: usize) {}
    fn reject(&mut self, _rejection: Rejection) {}
    fn epilogue(&mut self, _path: &[SceneId]) {}
}

/// One display event captured by a [`Recorder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    /// The opening, carrying the story title.
    Opening(String),
    /// A scene's narrative text.
    Scene(String),
    /// A menu's labels, in menu order.
    Menu(Vec<String>),
    /// A prompt for a selection up to the given maximum.
    Prompt(usize),
    /// A rejected input line.
    Rejected(Rejection),
    /// The closing path summary.
    Epilogue(Vec<SceneId>),
}

/// A presenter that records every event instead of displaying it.
///
/// Lets tests and headless hosts assert on the exact display sequence.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    /// Everything shown so far, in order.
    pub events: Vec<Shown>,
}

impl Recorder {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The rejections recorded so far, in order.
    pub fn rejections(&self) -> Vec<Rejection> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Shown::Rejected(r) => Some(*r),
                _ => None,
            })
            .collect()
    }
}

impl Presenter for Recorder {
    fn opening(&mut self, meta: &StoryMeta) {
        self.events.push(Shown::Opening(meta.title.clone()));
    }

    fn scene(&mut self, text: &str) {
        self.events.push(Shown::Scene(text.to_string()));
    }

    fn menu(&mut self, labels: &[&str]) {
        let labels = labels.iter().map(|l| l.to_string()).collect();
        self.events.push(Shown::Menu(labels));
    }

    fn prompt(&mut self, max_option: usize) {
        self.events.push(Shown::Prompt(max_option));
    }

    fn reject(&mut self, rejection: Rejection) {
        self.events.push(Shown::Rejected(rejection));
    }

    fn epilogue(&mut self, path: &[SceneId]) {
        self.events.push(Shown::Epilogue(path.to_vec()));
    }
}

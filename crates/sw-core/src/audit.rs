//! Structural validation of story graphs.
//!
//! An audit walks the whole graph before anyone plays it: defects are
//! problems that would strand a playthrough mid-story, cautions are
//! oddities an author probably wants to know about.

use std::collections::{BTreeSet, VecDeque};
use std::fmt;

use crate::scene::SceneId;
use crate::story::Story;

/// A structural problem that makes a story unsafe to play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Defect {
    /// A choice points at a scene id that does not exist.
    DanglingChoice {
        /// The scene holding the choice.
        scene: SceneId,
        /// One-based position of the choice in the scene's menu.
        choice: usize,
        /// The missing scene the choice points at.
        target: SceneId,
    },
    /// The starting scene does not exist.
    MissingStart {
        /// The configured starting scene.
        start: SceneId,
    },
    /// The story has no scenes at all.
    NoScenes,
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DanglingChoice {
                scene,
                choice,
                target,
            } => {
                write!(
                    f,
                    "choice {choice} of scene {scene} leads to missing scene {target}"
                )
            }
            Self::MissingStart { start } => write!(f, "start scene {start} does not exist"),
            Self::NoScenes => write!(f, "story has no scenes"),
        }
    }
}

/// A suspicious structure that is still playable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Caution {
    /// A scene no sequence of choices can reach.
    Unreachable {
        /// The unreachable scene.
        scene: SceneId,
    },
    /// No scene ends the story, so no playthrough can either.
    NoEndings,
}

impl fmt::Display for Caution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreachable { scene } => {
                write!(f, "scene {scene} is unreachable from the start scene")
            }
            Self::NoEndings => write!(f, "story has no endings"),
        }
    }
}

/// The outcome of auditing a story's structure.
#[derive(Debug, Clone, Default)]
pub struct AuditReport {
    /// Problems that make the story unsafe to play.
    pub defects: Vec<Defect>,
    /// Oddities worth an author's attention.
    pub cautions: Vec<Caution>,
}

impl AuditReport {
    /// Run every structural check over a story.
    ///
    /// Findings come out in a stable order: defects by scene id, then
    /// cautions by scene id. Reachability is only analyzed when the start
    /// scene exists; a missing start already blocks play on its own.
    pub fn of(story: &Story) -> Self {
        let mut report = Self::default();

        if story.scene_count() == 0 {
            report.defects.push(Defect::NoScenes);
            return report;
        }

        let start = story.meta.start;
        if story.scene(start).is_none() {
            report.defects.push(Defect::MissingStart { start });
        }

        for scene in story.scenes() {
            for (i, choice) in scene.choices.iter().enumerate() {
                if story.scene(choice.target).is_none() {
                    report.defects.push(Defect::DanglingChoice {
                        scene: scene.id,
                        choice: i + 1,
                        target: choice.target,
                    });
                }
            }
        }

        if story.scene(start).is_some() {
            let reachable = reachable_from(story, start);
            for scene in story.scenes() {
                if !reachable.contains(&scene.id) {
                    report.cautions.push(Caution::Unreachable { scene: scene.id });
                }
            }
        }

        if story.ending_count() == 0 {
            report.cautions.push(Caution::NoEndings);
        }

        report
    }

    /// A story is sound when the audit found no defects.
    pub fn is_sound(&self) -> bool {
        self.defects.is_empty()
    }

    /// Total number of findings, defects and cautions together.
    pub fn finding_count(&self) -> usize {
        self.defects.len() + self.cautions.len()
    }
}

impl fmt::Display for AuditReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut lines: Vec<String> = Vec::new();
        for defect in &self.defects {
            lines.push(format!("error: {defect}"));
        }
        for caution in &self.cautions {
            lines.push(format!("warning: {caution}"));
        }
        if lines.is_empty() {
            lines.push("no findings".to_string());
        }
        write!(f, "{}", lines.join("\n"))
    }
}

/// Breadth-first walk over choice edges, ignoring dangling targets.
fn reachable_from(story: &Story, start: SceneId) -> BTreeSet<SceneId> {
    let mut seen = BTreeSet::new();
    let mut queue = VecDeque::new();
    seen.insert(start);
    queue.push_back(start);

    while let Some(id) = queue.pop_front() {
        if let Some(scene) = story.scene(id) {
            for choice in &scene.choices {
                if story.scene(choice.target).is_some() && seen.insert(choice.target) {
                    queue.push_back(choice.target);
                }
            }
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Scene;
    use crate::story::StoryMeta;

    fn sound_story() -> Story {
        Story::new(StoryMeta::new("Sound"))
            .with_scene(
                Scene::new(0, "Fork.")
                    .with_choice("Left", 1)
                    .with_choice("Right", 2),
            )
            .with_scene(Scene::new(1, "Left end."))
            .with_scene(Scene::new(2, "Right end."))
    }

    #[test]
    fn sound_story_has_no_findings() {
        let report = sound_story().audit();
        assert!(report.is_sound());
        assert_eq!(report.finding_count(), 0);
        assert_eq!(report.to_string(), "no findings");
    }

    #[test]
    fn dangling_choice_is_a_defect() {
        let story = Story::new(StoryMeta::new("Dangling")).with_scene(
            Scene::new(0, "Fork.")
                .with_choice("Fine", 1)
                .with_choice("Broken", 9),
        );

        // Scene 1 also missing, so the first choice dangles too.
        let report = story.audit();
        assert!(!report.is_sound());
        assert!(report.defects.contains(&Defect::DanglingChoice {
            scene: SceneId(0),
            choice: 2,
            target: SceneId(9),
        }));
    }

    #[test]
    fn missing_start_is_a_defect() {
        let story =
            Story::new(StoryMeta::new("Headless").with_start(9)).with_scene(Scene::new(0, "Lost."));
        let report = story.audit();
        assert!(
            report
                .defects
                .contains(&Defect::MissingStart { start: SceneId(9) })
        );
    }

    #[test]
    fn empty_story_reports_only_no_scenes() {
        let report = Story::new(StoryMeta::new("Empty")).audit();
        assert_eq!(report.defects, vec![Defect::NoScenes]);
        assert!(report.cautions.is_empty());
    }

    #[test]
    fn unreachable_scene_is_a_caution() {
        let story = sound_story().with_scene(Scene::new(7, "An island."));
        let report = story.audit();
        assert!(report.is_sound());
        assert_eq!(
            report.cautions,
            vec![Caution::Unreachable { scene: SceneId(7) }]
        );
    }

    #[test]
    fn reachability_is_skipped_when_start_is_missing() {
        let story = Story::new(StoryMeta::new("Headless").with_start(9))
            .with_scene(Scene::new(0, "An ending."));
        let report = story.audit();
        assert!(
            report
                .cautions
                .iter()
                .all(|c| !matches!(c, Caution::Unreachable { .. }))
        );
    }

    #[test]
    fn endless_story_is_a_caution() {
        let story = Story::new(StoryMeta::new("Loop"))
            .with_scene(Scene::new(0, "Round.").with_choice("Again", 1))
            .with_scene(Scene::new(1, "And round.").with_choice("Back", 0));
        let report = story.audit();
        assert!(report.is_sound());
        assert_eq!(report.cautions, vec![Caution::NoEndings]);
    }

    #[test]
    fn cycles_do_not_hang_the_reachability_walk() {
        let story = Story::new(StoryMeta::new("Cycle"))
            .with_scene(Scene::new(0, "A.").with_choice("On", 1))
            .with_scene(Scene::new(1, "B.").with_choice("Back", 0).with_choice("Out", 2))
            .with_scene(Scene::new(2, "Out."));
        let report = story.audit();
        assert!(report.is_sound());
        assert!(report.cautions.is_empty());
    }

    #[test]
    fn report_rendering() {
        let story = Story::new(StoryMeta::new("Broken"))
            .with_scene(
                Scene::new(0, "Start.")
                    .with_choice("Onward", 1)
                    .with_choice("Into the void", 9),
            )
            .with_scene(Scene::new(1, "Middle.").with_choice("Back", 0))
            .with_scene(Scene::new(4, "An island."));

        let report = story.audit();
        insta::assert_snapshot!(report.to_string(), @r"
        error: choice 2 of scene 0 leads to missing scene 9
        warning: scene 4 is unreachable from the start scene
        ");
    }

    // -------------------------------------------------------------------
    // Properties
    // -------------------------------------------------------------------

    use crate::scene::Choice;
    use proptest::prelude::*;

    /// Scene entries whose ids all come from one pool, with choice targets
    /// given as indexes back into that pool.
    fn linked_entries() -> impl Strategy<Value = Vec<(u32, Vec<prop::sample::Index>)>> {
        prop::collection::vec(
            (0u32..40, prop::collection::vec(any::<prop::sample::Index>(), 0..4)),
            1..10,
        )
    }

    fn build_story(entries: &[(u32, Vec<prop::sample::Index>)]) -> Story {
        let keys: Vec<u32> = entries.iter().map(|(id, _)| *id).collect();
        let mut story = Story::new(StoryMeta::new("Generated").with_start(keys[0]));
        for (id, targets) in entries {
            let mut scene = Scene::new(*id, "somewhere");
            for target in targets {
                scene = scene.with_choice("onward", keys[target.index(keys.len())]);
            }
            story.insert_scene(scene);
        }
        story
    }

    proptest! {
        #[test]
        fn fully_linked_stories_audit_without_defects(entries in linked_entries()) {
            let story = build_story(&entries);
            prop_assert!(story.audit().is_sound());
        }

        #[test]
        fn a_dangling_choice_always_breaks_soundness(
            entries in linked_entries(),
            pick in any::<prop::sample::Index>(),
        ) {
            let mut story = build_story(&entries);
            let keys: Vec<u32> = entries.iter().map(|(id, _)| *id).collect();
            let id = SceneId(keys[pick.index(keys.len())]);

            let mut scene = story.scene(id).unwrap().clone();
            scene.choices.push(Choice::new("into the void", 1000));
            story.insert_scene(scene);

            prop_assert!(!story.audit().is_sound());
        }
    }
}

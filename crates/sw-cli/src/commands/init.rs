use std::fs;
use std::path::PathBuf;

use sw_core::{Scene, Story, StoryMeta};

pub fn run(name: &str) -> Result<(), String> {
    let path = PathBuf::from(format!("{name}.json"));

    if path.exists() {
        return Err(format!("'{}' already exists", path.display()));
    }

    // Serializing a built story keeps the template parseable by construction.
    let json = template(name).to_json().map_err(|e| e.to_string())?;
    fs::write(&path, json).map_err(|e| format!("cannot write {}: {e}", path.display()))?;

    println!("Created story '{}' in {}", name, path.display());
    println!();
    println!("Get started:");
    println!("  # Edit {} to write your scenes", path.display());
    println!("  sw check {}   # Validate the graph", path.display());
    println!("  sw list {}    # Scene overview", path.display());
    println!("  sw play {}    # Play it", path.display());

    Ok(())
}

fn template(name: &str) -> Story {
    Story::new(
        StoryMeta::new(name)
            .with_tagline("An adventure of your making.")
            .with_farewell("Thanks for playing."),
    )
    .with_scene(
        Scene::new(0, "You stand at a crossroads. One path climbs, the other descends.")
            .with_choice("Take the high path", 1)
            .with_choice("Take the low path", 2),
    )
    .with_scene(Scene::new(
        1,
        "The high path opens onto a summit at dawn.\n\n*** ENDING: The Summit ***",
    ))
    .with_scene(Scene::new(
        2,
        "The low path winds into a quiet valley.\n\n*** ENDING: The Valley ***",
    ))
}

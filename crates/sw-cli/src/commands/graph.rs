use std::path::Path;

pub fn run(path: &Path) -> Result<(), String> {
    let story = super::load_story(path)?;

    println!("  Choice graph for '{}'", story.meta.title);
    println!();

    for scene in story.scenes() {
        if scene.is_ending() {
            println!("  [{}] (ending)", scene.id);
            continue;
        }
        for choice in &scene.choices {
            println!("  [{}] --> {} --> [{}]", scene.id, choice.label, choice.target);
        }
    }

    println!();
    println!(
        "  {} scenes, {} choices, {} endings",
        story.scene_count(),
        story.choice_count(),
        story.ending_count()
    );

    Ok(())
}

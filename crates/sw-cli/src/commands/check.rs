use std::path::Path;

pub fn run(path: &Path) -> Result<(), String> {
    let story = super::load_story(path)?;
    let report = story.audit();
    super::print_report(&report);

    if !report.is_sound() {
        return Err("story has structural defects".into());
    }

    println!("  All checks passed for '{}'.", story.meta.title);
    println!(
        "  {} scenes, {} choices, {} endings",
        story.scene_count(),
        story.choice_count(),
        story.ending_count()
    );

    Ok(())
}

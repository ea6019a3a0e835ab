use std::path::Path;

use comfy_table::{ContentArrangement, Table};

pub fn run(path: &Path) -> Result<(), String> {
    let story = super::load_story(path)?;

    if story.scene_count() == 0 {
        println!("  No scenes found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Kind", "Choices", "Text"]);

    for scene in story.scenes() {
        let kind = if scene.is_ending() { "ending" } else { "branch" };
        table.add_row(vec![
            scene.id.to_string(),
            kind.to_string(),
            scene.choices.len().to_string(),
            preview(&scene.text),
        ]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} scenes, {} endings",
        story.scene_count(),
        story.ending_count()
    );

    Ok(())
}

/// First line of the scene text, truncated to table width.
fn preview(text: &str) -> String {
    let line = text.lines().next().unwrap_or("").trim_end();
    if line.is_empty() {
        return "—".to_string();
    }
    if line.chars().count() > 60 {
        let cut: String = line.chars().take(57).collect();
        format!("{cut}...")
    } else {
        line.to_string()
    }
}

pub mod check;
pub mod graph;
pub mod init;
pub mod list;
pub mod play;

use std::fs;
use std::path::Path;

use colored::Colorize;
use miette::{LabeledSpan, NamedSource, miette};
use sw_core::{AuditReport, Story, StoryError};

/// Read and parse a story file, rendering a span report on malformed JSON.
pub fn load_story(path: &Path) -> Result<Story, String> {
    let source = fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;

    match Story::from_json(&source) {
        Ok(story) => Ok(story),
        Err(e) => {
            let StoryError::Json(json_err) = &e;
            let offset = byte_offset(&source, json_err.line(), json_err.column());
            let report = miette!(
                labels = vec![LabeledSpan::at_offset(offset, "here")],
                "{e}"
            )
            .with_source_code(NamedSource::new(path.display().to_string(), source));
            eprintln!("{report:?}");
            Err(format!("failed to load {}", path.display()))
        }
    }
}

/// Load a story and refuse to hand it out unless the audit finds no defects.
pub fn load_sound_story(path: &Path) -> Result<Story, String> {
    let story = load_story(path)?;
    let report = story.audit();
    if !report.is_sound() {
        print_report(&report);
        return Err(format!(
            "story has structural defects; see `sw check {}`",
            path.display()
        ));
    }
    Ok(story)
}

/// Print audit findings to stderr, one line per finding, with a summary.
pub fn print_report(report: &AuditReport) {
    for defect in &report.defects {
        eprintln!("{} {defect}", "error:".red().bold());
    }
    for caution in &report.cautions {
        eprintln!("{} {caution}", "warning:".yellow().bold());
    }

    let errors = report.defects.len();
    let warnings = report.cautions.len();

    if errors > 0 {
        eprintln!(
            "  {} error{}, {} warning{}",
            errors,
            if errors == 1 { "" } else { "s" },
            warnings,
            if warnings == 1 { "" } else { "s" },
        );
    } else if warnings > 0 {
        eprintln!(
            "  {} warning{}",
            warnings,
            if warnings == 1 { "" } else { "s" },
        );
    }
}

/// Translate serde_json's 1-based line/column into a byte offset.
fn byte_offset(source: &str, line: usize, column: usize) -> usize {
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(source.len())
}

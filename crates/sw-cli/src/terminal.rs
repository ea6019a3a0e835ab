//! The terminal presenter: banner, typewriter text, beat dots, menus.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use colored::Colorize;
use sw_core::{SceneId, StoryMeta};
use sw_play::{Presenter, Rejection};

/// Timing for the terminal presenter. Cosmetic only; nothing in the
/// traversal engine depends on these delays.
#[derive(Debug, Clone, Copy)]
pub struct Pacing {
    /// Delay after each printed character of narrative text.
    pub char_delay: Duration,
    /// Number of beat dots printed between scenes.
    pub beat_dots: usize,
    /// Delay after each beat dot.
    pub dot_delay: Duration,
}

impl Default for Pacing {
    fn default() -> Self {
        Self {
            char_delay: Duration::from_millis(6),
            beat_dots: 3,
            dot_delay: Duration::from_millis(250),
        }
    }
}

impl Pacing {
    /// No delays and no beat dots; for piped input and tests.
    pub fn none() -> Self {
        Self {
            char_delay: Duration::ZERO,
            beat_dots: 0,
            dot_delay: Duration::ZERO,
        }
    }
}

/// Presents a playthrough on stdout.
pub struct TerminalPresenter {
    pacing: Pacing,
    farewell: Option<String>,
    scenes_shown: usize,
}

impl TerminalPresenter {
    /// Create a presenter with the given pacing.
    pub fn new(pacing: Pacing) -> Self {
        Self {
            pacing,
            farewell: None,
            scenes_shown: 0,
        }
    }

    /// Print text character by character, flushing as it goes.
    fn type_out(&self, text: &str) {
        let mut out = io::stdout();
        if self.pacing.char_delay.is_zero() {
            let _ = write!(out, "{text}");
            let _ = out.flush();
            return;
        }
        for c in text.chars() {
            let _ = write!(out, "{c}");
            let _ = out.flush();
            thread::sleep(self.pacing.char_delay);
        }
    }

    /// A short "..." beat between scenes.
    fn beat(&self) {
        if self.pacing.beat_dots == 0 {
            return;
        }
        let mut out = io::stdout();
        for _ in 0..self.pacing.beat_dots {
            let _ = write!(out, ".");
            let _ = out.flush();
            if !self.pacing.dot_delay.is_zero() {
                thread::sleep(self.pacing.dot_delay);
            }
        }
        println!();
    }
}

impl Presenter for TerminalPresenter {
    fn opening(&mut self, meta: &StoryMeta) {
        self.farewell = meta.farewell.clone();

        println!();
        println!("=====================================");
        println!("  {}", meta.title.to_uppercase().bold());
        println!("=====================================");
        println!();
        if let Some(tagline) = &meta.tagline {
            self.type_out(tagline);
            println!();
        }
        self.beat();
    }

    fn scene(&mut self, text: &str) {
        if self.scenes_shown > 0 {
            self.beat();
        }
        self.scenes_shown += 1;

        println!();
        println!("-------------------------------------");
        self.type_out(text);
        println!();
    }

    fn menu(&mut self, labels: &[&str]) {
        for (i, label) in labels.iter().enumerate() {
            println!("  {}) {label}", i + 1);
        }
        println!();
    }

    fn prompt(&mut self, max_option: usize) {
        print!("Enter choice (1-{max_option}): ");
        let _ = io::stdout().flush();
    }

    fn reject(&mut self, rejection: Rejection) {
        let notice = match rejection {
            Rejection::NotANumber => "Please enter a number.",
            Rejection::OutOfRange => "Please choose a valid option.",
        };
        println!("{}", notice.yellow());
    }

    fn epilogue(&mut self, path: &[SceneId]) {
        let steps: Vec<String> = path.iter().map(ToString::to_string).collect();
        println!("-------------------------------------");
        println!("Path Taken: {}", steps.join(" -> "));
        if let Some(farewell) = &self.farewell {
            println!();
            println!("{farewell}");
        }
    }
}

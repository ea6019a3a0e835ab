use std::io;
use std::path::Path;

use sw_play::{OnClosedInput, PlayConfig, Session};

use crate::terminal::{Pacing, TerminalPresenter};

pub fn run(path: &Path, fast: bool, from: Option<u32>, halt_on_eof: bool) -> Result<(), String> {
    let story = super::load_sound_story(path)?;

    let mut config = PlayConfig::default();
    if let Some(id) = from {
        config = config.with_start(id);
    }
    if halt_on_eof {
        config = config.with_on_closed_input(OnClosedInput::EndSession);
    }

    let session = Session::new(story, config).map_err(|e| e.to_string())?;

    let pacing = if fast { Pacing::none() } else { Pacing::default() };
    let mut presenter = TerminalPresenter::new(pacing);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    session
        .run(&mut input, &mut presenter)
        .map_err(|e| e.to_string())?;

    Ok(())
}

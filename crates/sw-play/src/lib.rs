//! The Scheideweg traversal engine.
//!
//! A [`Session`] walks a [`sw_core::Story`] one numbered choice at a time:
//! show a scene, offer its menu, read a selection, follow the edge. Display
//! goes through a [`Presenter`], input comes from any [`std::io::BufRead`],
//! so playthroughs run the same against a terminal or a test fixture.

/// Error types for the traversal engine.
pub mod error;
/// The seam between traversal and display.
pub mod presenter;
/// Reading and validating menu selections.
pub mod prompt;
/// Playthrough state and the traversal loop.
pub mod session;

/// Re-export error types.
pub use error::{PlayError, PlayResult};
/// Re-export presenter types.
pub use presenter::{Presenter, Recorder, Shown, Silent};
/// Re-export selection types.
pub use prompt::{OnClosedInput, Rejection, read_selection};
/// Re-export session types.
pub use session::{Outcome, PlayConfig, Session, Transcript};

//! # Public API
//!
//! String-keyed entry points for front ends that hold selections as text
//! (a CLI argument, a value from a `<select>`). Each one parses and
//! validates all of its input before computing anything, so a bad name
//! fails the whole call instead of yielding a partial result.
//!
//! ## Typical Usage
//!
//! ```rust
//! use caged_engine::api::chord_view;
//!
//! let view = chord_view("A", "major", "C")?;
//! assert_eq!(view.voicings()[0].offset, 9);
//! assert!(view.is_root_at(4, 12)?);
//! # Ok::<(), caged_engine::CagedError>(())
//! ```

use rand::{rngs::StdRng, SeedableRng};

use crate::error::Result;
use crate::fretboard::{ChordView, ShapeSelection};
use crate::mode_pattern::{calculate_mode_pattern, ModePosition, ModeView};
use crate::modes::ModeId;
use crate::pitch::note_to_number;
use crate::quiz::{QuizPreferences, QuizSession};
use crate::shapes::ChordQuality;

/// Build a chord view from a root note name, a quality and a shape letter
/// (or `"all"`).
pub fn chord_view(root: &str, quality: &str, shape: &str) -> Result<ChordView> {
    let root = note_to_number(root)?;
    let quality: ChordQuality = quality.parse()?;
    let selection: ShapeSelection = shape.parse()?;
    Ok(ChordView::new(root, quality, selection))
}

/// Build a mode view from a mode name and root note name.
///
/// ```rust
/// use caged_engine::api::mode_view;
///
/// let view = mode_view("dorian", "D", 15)?;
/// assert!(view.positions().iter().all(|p| !p.note.contains('#')));
/// # Ok::<(), caged_engine::CagedError>(())
/// ```
pub fn mode_view(mode: &str, root: &str, max_fret: u8) -> Result<ModeView> {
    let mode: ModeId = mode.parse()?;
    let root = note_to_number(root)?;
    ModeView::new(mode, root, max_fret)
}

pub fn mode_pattern(mode: &str, root: &str, max_fret: u8) -> Result<Vec<ModePosition>> {
    let mode: ModeId = mode.parse()?;
    let root = note_to_number(root)?;
    calculate_mode_pattern(mode, root, max_fret)
}

/// Validate persisted JSON preferences and start a seeded quiz session.
pub fn quiz_from_json(preferences: &str, seed: u64) -> Result<QuizSession> {
    let config = QuizPreferences::from_json(preferences)?.validate()?;
    let mut rng = StdRng::seed_from_u64(seed);
    QuizSession::start(&config, &mut rng)
}

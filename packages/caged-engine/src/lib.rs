//! # caged-engine
//!
//! The music-theory engine behind the CAGED chord visualizer, the mode
//! visualizer and the chord-recognition quiz. It maps a root, a chord
//! quality and a shape or mode onto concrete (string, fret) cells of a
//! standard-tuned guitar, and generates quiz questions from the same data.
//!
//! ## Modules
//! - `pitch` - Pitch classes and note names
//! - `tuning` - Standard tuning and coordinate validation
//! - `shapes` - The CAGED shape catalog and shape sequencing
//! - `modes` - The seven modes and the pentatonic scales
//! - `position` - Transposition offsets and realized voicings
//! - `fretboard` - Per-cell predicates for chord views
//! - `mode_pattern` - Mode layouts across the neck
//! - `overlap` - Styles for cells shared by several shapes
//! - `quiz` - Question generation, sessions and persisted preferences
//! - `api` - String-keyed entry points
//!
//! Everything except quiz generation is a pure function of its arguments
//! and the read-only catalogs, so views can be queried from any number of
//! threads at once.

pub mod api;
pub mod error;
pub mod fretboard;
pub mod mode_pattern;
pub mod modes;
pub mod overlap;
pub mod pitch;
pub mod position;
pub mod quiz;
pub mod shapes;
pub mod tuning;

pub use error::{CagedError, Result};
pub use fretboard::{
    is_natural_note_at, is_scale_tone_at, note_name_at, optimal_display_range, show_note_name,
    CellInfo, ChordView, FretPosition, FretRange, Overlays, ShapeSelection,
};
pub use mode_pattern::{calculate_mode_pattern, mode_pitch_classes, root_positions_for, ModePosition, ModeView};
pub use modes::{ModeDefinition, ModeId, ScaleKind};
pub use overlap::{resolve_style, CellStyle};
pub use pitch::{interval, interval_name, note_to_number, number_to_note, transpose, PitchClass};
pub use position::{realize_shape, resolve_offset, ChordVoicing, StringVoicing};
pub use shapes::{natural_sequence, shape, shapes, CagedLetter, ChordQuality, ShapeDefinition};
pub use tuning::{DEFAULT_MAX_FRET, MAX_FRET, STANDARD_TUNING, STRING_COUNT};

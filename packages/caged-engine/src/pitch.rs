//! # Pitch-Class Arithmetic
//!
//! Conversion between note names and pitch classes (integers 0-11, semitone
//! distance from C), plus the modular arithmetic every other module builds on.
//!
//! ## Invariant
//! All arithmetic is taken mod 12 with a non-negative result. `PitchClass`
//! can only be built through [`PitchClass::new`], which normalizes with
//! `rem_euclid`, so a value outside 0..=11 is unrepresentable.
//!
//! ## Note Names
//! Sharps only: `C C# D D# E F F# G G# A A# B`. Parsing is strict apart from
//! surrounding whitespace, so `"Db"` is an `InvalidNote`.
//!
//! ## Related Modules
//! - `tuning` - Maps (string, fret) to a pitch class
//! - `position` - Computes transposition offsets between pitch classes
//! - `fretboard` - Labels cells with `number_to_note`

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CagedError, Result};

/// The chromatic alphabet, indexed by pitch class.
pub const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Pitch classes without an accidental (C D E F G A B).
const NATURALS: [bool; 12] = [
    true, false, true, false, true, true, false, true, false, true, false, true,
];

/// Scale-degree labels by semitone distance from the root.
const INTERVAL_NAMES: [&str; 12] = [
    "R", "b2", "2", "b3", "3", "4", "b5", "5", "b6", "6", "b7", "7",
];

/// A note identity independent of octave, always in 0..=11.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);
    pub const D: PitchClass = PitchClass(2);
    pub const E: PitchClass = PitchClass(4);
    pub const G: PitchClass = PitchClass(7);
    pub const A: PitchClass = PitchClass(9);
    pub const B: PitchClass = PitchClass(11);

    /// Build a pitch class from any integer, wrapping mod 12.
    pub fn new(value: i32) -> Self {
        PitchClass(value.rem_euclid(12) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        NOTE_NAMES[self.0 as usize]
    }

    /// True for C, D, E, F, G, A and B.
    pub fn is_natural(self) -> bool {
        NATURALS[self.0 as usize]
    }

    /// Move by `semitones` (either direction), wrapping mod 12.
    pub fn transpose(self, semitones: i32) -> Self {
        PitchClass::new(self.0 as i32 + semitones)
    }

    /// Upward distance from `self` to `to`, in 0..=11.
    pub fn interval_to(self, to: PitchClass) -> PitchClass {
        interval(self, to)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for PitchClass {
    type Err = CagedError;

    fn from_str(s: &str) -> Result<Self> {
        note_to_number(s)
    }
}

/// Parse a note name into its pitch class.
///
/// # Example
/// ```
/// use caged_engine::note_to_number;
///
/// assert_eq!(note_to_number("A").unwrap().value(), 9);
/// assert_eq!(note_to_number("F#").unwrap().value(), 6);
/// assert!(note_to_number("Bb").is_err());
/// ```
pub fn note_to_number(name: &str) -> Result<PitchClass> {
    let trimmed = name.trim();
    NOTE_NAMES
        .iter()
        .position(|&n| n == trimmed)
        .map(|idx| PitchClass(idx as u8))
        .ok_or_else(|| CagedError::InvalidNote(name.to_string()))
}

/// Name of the pitch class `n mod 12`. Total: every integer has a name.
pub fn number_to_note(n: i32) -> &'static str {
    PitchClass::new(n).name()
}

/// Directional interval `(to - from) mod 12`, never negative.
pub fn interval(from: PitchClass, to: PitchClass) -> PitchClass {
    PitchClass::new(to.0 as i32 - from.0 as i32)
}

/// Transpose a note name by `semitones`, wrapping around the octave.
pub fn transpose(note: &str, semitones: i32) -> Result<&'static str> {
    Ok(note_to_number(note)?.transpose(semitones).name())
}

/// Degree label for an interval above the root ("R", "b3", "5", ...).
pub fn interval_name(semitones: i32) -> &'static str {
    INTERVAL_NAMES[semitones.rem_euclid(12) as usize]
}

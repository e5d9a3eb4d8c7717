//! # Tuning Table
//!
//! The one fixed 6-string standard tuning. String index 0 is the
//! highest-pitched string as displayed (high e), index 5 the low E.

use crate::error::{CagedError, Result};
use crate::pitch::PitchClass;

pub const STRING_COUNT: usize = 6;

/// Highest fret any query may address.
pub const MAX_FRET: u8 = 24;

/// Default upper bound of the displayed neck.
pub const DEFAULT_MAX_FRET: u8 = 15;

/// Open-string pitch classes: e B G D A E.
pub const STANDARD_TUNING: [PitchClass; STRING_COUNT] = [
    PitchClass::E,
    PitchClass::B,
    PitchClass::G,
    PitchClass::D,
    PitchClass::A,
    PitchClass::E,
];

const STRING_LABELS: [&str; STRING_COUNT] = ["e", "B", "G", "D", "A", "E"];

/// Validate a string index and narrow it to `usize` form.
pub fn check_string(string: usize) -> Result<usize> {
    if string < STRING_COUNT {
        Ok(string)
    } else {
        Err(CagedError::OutOfRangeIndex {
            axis: "string",
            value: string as i64,
            expected: "0..=5",
        })
    }
}

/// Validate a fret coordinate (0 = open string).
pub fn check_fret(fret: i32) -> Result<u8> {
    if (0..=MAX_FRET as i32).contains(&fret) {
        Ok(fret as u8)
    } else {
        Err(CagedError::OutOfRangeIndex {
            axis: "fret",
            value: fret as i64,
            expected: "0..=24",
        })
    }
}

/// Validate an upper display bound.
pub fn check_max_fret(max_fret: u8) -> Result<u8> {
    if (1..=MAX_FRET).contains(&max_fret) {
        Ok(max_fret)
    } else {
        Err(CagedError::OutOfRangeIndex {
            axis: "max fret",
            value: max_fret as i64,
            expected: "1..=24",
        })
    }
}

pub fn open_pitch(string: usize) -> Result<PitchClass> {
    Ok(STANDARD_TUNING[check_string(string)?])
}

/// Pitch class sounding at `fret` on `string`.
pub fn pitch_at(string: usize, fret: i32) -> Result<PitchClass> {
    let open = open_pitch(string)?;
    let fret = check_fret(fret)?;
    Ok(open.transpose(fret as i32))
}

/// Display label for a string ("e" for the high string, "E" for the low).
pub fn string_label(string: usize) -> Result<&'static str> {
    Ok(STRING_LABELS[check_string(string)?])
}

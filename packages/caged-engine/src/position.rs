//! # Position Resolver
//!
//! Every shape and every mode is defined once, in its natural position. This
//! module computes the fret offset that moves it to any of the 12 roots and
//! applies that offset to a shape pattern.
//!
//! ## Offset Formula
//! `offset = (target_root - natural_root + 12) mod 12`, always in 0..=11.
//!
//! ## Open vs. Barre
//! A pattern value of 0 is an open string only when the offset is also 0.
//! At any other offset it becomes a barre at the offset fret. Other values
//! are shifted by the offset, and an unplayed string stays unplayed.
//!
//! ## Related Modules
//! - `shapes` - The patterns this module transposes
//! - `fretboard` - Queries realized voicings cell by cell

use serde::Serialize;

use crate::pitch::{interval, PitchClass};
use crate::shapes::{shape, CagedLetter, ChordQuality, ShapeDefinition};
use crate::tuning::{STANDARD_TUNING, STRING_COUNT};

/// Frets to move a shape from `natural_root` up to `target_root`.
///
/// ```
/// use caged_engine::{resolve_offset, PitchClass};
///
/// // A major played with the C shape sits at the 9th fret
/// assert_eq!(resolve_offset(PitchClass::A, PitchClass::C), 9);
/// ```
pub fn resolve_offset(target_root: PitchClass, natural_root: PitchClass) -> u8 {
    interval(natural_root, target_root).value()
}

/// What one string does in a realized voicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "fret", rename_all = "lowercase")]
pub enum StringVoicing {
    Muted,
    Open,
    Barre(u8),
    Fretted(u8),
}

impl StringVoicing {
    /// The sounding fret, with 0 for an open string.
    pub fn fret(self) -> Option<u8> {
        match self {
            StringVoicing::Muted => None,
            StringVoicing::Open => Some(0),
            StringVoicing::Barre(f) | StringVoicing::Fretted(f) => Some(f),
        }
    }

    pub fn is_played(self) -> bool {
        self != StringVoicing::Muted
    }
}

/// Apply the open/barre convention to one pattern cell.
pub fn realize_fret(pattern_value: Option<u8>, offset: u8) -> StringVoicing {
    match (pattern_value, offset) {
        (None, _) => StringVoicing::Muted,
        (Some(0), 0) => StringVoicing::Open,
        (Some(0), barre) => StringVoicing::Barre(barre),
        (Some(v), off) => StringVoicing::Fretted(v + off),
    }
}

/// A shape transposed to a concrete root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordVoicing {
    pub shape: CagedLetter,
    pub quality: ChordQuality,
    pub root: PitchClass,
    pub offset: u8,
    pub strings: [StringVoicing; STRING_COUNT],
}

impl ChordVoicing {
    pub fn definition(&self) -> &'static ShapeDefinition {
        shape(self.shape, self.quality)
    }

    /// Does this voicing sound `fret` on `string`?
    pub fn plays(&self, string: usize, fret: u8) -> bool {
        self.strings
            .get(string)
            .and_then(|v| v.fret())
            .map_or(false, |f| f == fret)
    }

    /// (string, fret) of every string carrying the chord root.
    pub fn root_cells(&self) -> Vec<(usize, u8)> {
        self.definition()
            .root_string_indices
            .iter()
            .filter_map(|&s| self.strings[s].fret().map(|f| (s, f)))
            .collect()
    }

    /// Lowest and highest sounding frets.
    pub fn fret_span(&self) -> Option<(u8, u8)> {
        let frets = self.strings.iter().filter_map(|v| v.fret());
        let (mut lo, mut hi) = (u8::MAX, 0);
        let mut any = false;
        for f in frets {
            lo = lo.min(f);
            hi = hi.max(f);
            any = true;
        }
        any.then_some((lo, hi))
    }

    /// Chord symbol such as "A" or "F#m".
    pub fn chord_name(&self) -> String {
        format!("{}{}", self.root, self.quality.suffix())
    }
}

/// Transpose `letter`'s shape so that it sounds `root`.
pub fn realize_shape(letter: CagedLetter, quality: ChordQuality, root: PitchClass) -> ChordVoicing {
    let def = shape(letter, quality);
    let offset = resolve_offset(root, def.natural_root());
    let mut strings = [StringVoicing::Muted; STRING_COUNT];
    for (slot, value) in strings.iter_mut().zip(def.pattern.iter()) {
        *slot = realize_fret(*value, offset);
    }
    ChordVoicing {
        shape: letter,
        quality,
        root,
        offset,
        strings,
    }
}

/// Pitch class that a realized string sounds, if it is played.
pub fn sounding_pitch(voicing: &ChordVoicing, string: usize) -> Option<PitchClass> {
    let fret = voicing.strings.get(string)?.fret()?;
    Some(STANDARD_TUNING[string].transpose(fret as i32))
}

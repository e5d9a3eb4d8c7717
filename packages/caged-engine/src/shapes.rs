//! # Shape Catalog
//!
//! The five moveable CAGED chord shapes, each defined once in its natural
//! open position, for both major and minor quality.
//!
//! ## Encoding
//! A pattern holds one entry per string (index 0 = high e, 5 = low E):
//! `None` for a string that is not played, `Some(n)` for a fret offset above
//! the barre. An offset of 0 is an open string in natural position and the
//! barre everywhere else (see `position::realize_fret`).
//!
//! ```text
//!            e  B  G  D  A  E     roots
//! major C    0  1  0  2  3  x     B, A
//! major A    0  2  2  2  0  x     G, A
//! major G    3  0  0  0  2  3     e, G, E
//! major E    0  0  1  2  2  0     e, D, E
//! major D    2  3  2  0  x  x     B, D
//! minor C    x  1  0  1  3  x     B, A
//! minor A    0  1  2  2  0  x     G, A
//! minor G    3  3  0  0  1  3     e, G, E
//! minor E    0  0  0  2  2  0     e, D, E
//! minor D    1  3  2  0  x  x     B, D
//! ```
//!
//! ## Shape Identity
//! Shapes are keyed by the closed enum [`CagedLetter`]; the same five letters
//! name the root chords a CAGED quiz asks about, because each shape's natural
//! root is the chord it is named after.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CagedError, Result};
use crate::pitch::PitchClass;
use crate::tuning::STRING_COUNT;

/// One of the five CAGED letters. Declaration order is the CAGED cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CagedLetter {
    C,
    A,
    G,
    E,
    D,
}

impl CagedLetter {
    /// The fixed cycle C, A, G, E, D.
    pub const ALL: [CagedLetter; 5] = [
        CagedLetter::C,
        CagedLetter::A,
        CagedLetter::G,
        CagedLetter::E,
        CagedLetter::D,
    ];

    /// Position in the CAGED cycle (C = 0 ... D = 4).
    pub fn cycle_index(self) -> usize {
        self as usize
    }

    /// Pitch class of the letter, which is also the shape's natural root.
    pub fn pitch_class(self) -> PitchClass {
        match self {
            CagedLetter::C => PitchClass::C,
            CagedLetter::A => PitchClass::A,
            CagedLetter::G => PitchClass::G,
            CagedLetter::E => PitchClass::E,
            CagedLetter::D => PitchClass::D,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CagedLetter::C => "C",
            CagedLetter::A => "A",
            CagedLetter::G => "G",
            CagedLetter::E => "E",
            CagedLetter::D => "D",
        }
    }
}

impl fmt::Display for CagedLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CagedLetter {
    type Err = CagedError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "C" | "c" => Ok(CagedLetter::C),
            "A" | "a" => Ok(CagedLetter::A),
            "G" | "g" => Ok(CagedLetter::G),
            "E" | "e" => Ok(CagedLetter::E),
            "D" | "d" => Ok(CagedLetter::D),
            other => Err(CagedError::InvalidConfiguration(format!(
                "'{}' is not one of C, A, G, E, D",
                other
            ))),
        }
    }
}

/// Selects which shape table to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChordQuality {
    #[default]
    Major,
    Minor,
}

impl ChordQuality {
    pub fn as_str(self) -> &'static str {
        match self {
            ChordQuality::Major => "major",
            ChordQuality::Minor => "minor",
        }
    }

    /// Chord symbol suffix ("" for major, "m" for minor).
    pub fn suffix(self) -> &'static str {
        match self {
            ChordQuality::Major => "",
            ChordQuality::Minor => "m",
        }
    }
}

impl fmt::Display for ChordQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ChordQuality {
    type Err = CagedError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "major" | "maj" => Ok(ChordQuality::Major),
            "minor" | "min" | "m" => Ok(ChordQuality::Minor),
            other => Err(CagedError::InvalidConfiguration(format!(
                "unknown chord quality '{}'",
                other
            ))),
        }
    }
}

/// A moveable chord shape in its natural open position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShapeDefinition {
    pub id: CagedLetter,
    pub display_name: &'static str,
    pub color: &'static str,
    pub pattern: [Option<u8>; STRING_COUNT],
    /// Display only; 0 = open/barre finger, `None` = unplayed.
    pub finger_pattern: [Option<u8>; STRING_COUNT],
    /// Strings that sound the root at barre position 0.
    pub root_string_indices: &'static [usize],
}

impl ShapeDefinition {
    pub fn natural_root(&self) -> PitchClass {
        self.id.pitch_class()
    }

    pub fn is_root_string(&self, string: usize) -> bool {
        self.root_string_indices.contains(&string)
    }
}

const X: Option<u8> = None;

static MAJOR_SHAPES: [ShapeDefinition; 5] = [
    ShapeDefinition {
        id: CagedLetter::C,
        display_name: "C Shape",
        color: "#ef4444",
        pattern: [Some(0), Some(1), Some(0), Some(2), Some(3), X],
        finger_pattern: [Some(0), Some(1), Some(0), Some(2), Some(3), X],
        root_string_indices: &[1, 4],
    },
    ShapeDefinition {
        id: CagedLetter::A,
        display_name: "A Shape",
        color: "#f97316",
        pattern: [Some(0), Some(2), Some(2), Some(2), Some(0), X],
        finger_pattern: [Some(0), Some(4), Some(3), Some(2), Some(0), X],
        root_string_indices: &[2, 4],
    },
    ShapeDefinition {
        id: CagedLetter::G,
        display_name: "G Shape",
        color: "#eab308",
        pattern: [Some(3), Some(0), Some(0), Some(0), Some(2), Some(3)],
        finger_pattern: [Some(4), Some(0), Some(0), Some(0), Some(1), Some(2)],
        root_string_indices: &[0, 2, 5],
    },
    ShapeDefinition {
        id: CagedLetter::E,
        display_name: "E Shape",
        color: "#22c55e",
        pattern: [Some(0), Some(0), Some(1), Some(2), Some(2), Some(0)],
        finger_pattern: [Some(0), Some(0), Some(1), Some(3), Some(2), Some(0)],
        root_string_indices: &[0, 3, 5],
    },
    ShapeDefinition {
        id: CagedLetter::D,
        display_name: "D Shape",
        color: "#3b82f6",
        pattern: [Some(2), Some(3), Some(2), Some(0), X, X],
        finger_pattern: [Some(2), Some(3), Some(1), Some(0), X, X],
        root_string_indices: &[1, 3],
    },
];

static MINOR_SHAPES: [ShapeDefinition; 5] = [
    ShapeDefinition {
        id: CagedLetter::C,
        display_name: "C Shape",
        color: "#ef4444",
        pattern: [X, Some(1), Some(0), Some(1), Some(3), X],
        finger_pattern: [X, Some(1), Some(0), Some(2), Some(4), X],
        root_string_indices: &[1, 4],
    },
    ShapeDefinition {
        id: CagedLetter::A,
        display_name: "A Shape",
        color: "#f97316",
        pattern: [Some(0), Some(1), Some(2), Some(2), Some(0), X],
        finger_pattern: [Some(0), Some(1), Some(3), Some(2), Some(0), X],
        root_string_indices: &[2, 4],
    },
    ShapeDefinition {
        id: CagedLetter::G,
        display_name: "G Shape",
        color: "#eab308",
        pattern: [Some(3), Some(3), Some(0), Some(0), Some(1), Some(3)],
        finger_pattern: [Some(4), Some(4), Some(0), Some(0), Some(1), Some(3)],
        root_string_indices: &[0, 2, 5],
    },
    ShapeDefinition {
        id: CagedLetter::E,
        display_name: "E Shape",
        color: "#22c55e",
        pattern: [Some(0), Some(0), Some(0), Some(2), Some(2), Some(0)],
        finger_pattern: [Some(0), Some(0), Some(0), Some(3), Some(2), Some(0)],
        root_string_indices: &[0, 3, 5],
    },
    ShapeDefinition {
        id: CagedLetter::D,
        display_name: "D Shape",
        color: "#3b82f6",
        pattern: [Some(1), Some(3), Some(2), Some(0), X, X],
        finger_pattern: [Some(1), Some(3), Some(2), Some(0), X, X],
        root_string_indices: &[1, 3],
    },
];

/// All five shapes for a quality, in CAGED order.
pub fn shapes(quality: ChordQuality) -> &'static [ShapeDefinition; 5] {
    match quality {
        ChordQuality::Major => &MAJOR_SHAPES,
        ChordQuality::Minor => &MINOR_SHAPES,
    }
}

/// Exhaustive lookup: every letter has a shape in every quality.
pub fn shape(letter: CagedLetter, quality: ChordQuality) -> &'static ShapeDefinition {
    &shapes(quality)[letter.cycle_index()]
}

/// The CAGED cycle rotated so that `root` comes first.
///
/// ```
/// use caged_engine::{natural_sequence, CagedLetter::*};
///
/// assert_eq!(natural_sequence(G), [G, E, D, C, A]);
/// ```
pub fn natural_sequence(root: CagedLetter) -> [CagedLetter; 5] {
    let start = root.cycle_index();
    let mut seq = CagedLetter::ALL;
    seq.rotate_left(start);
    seq
}

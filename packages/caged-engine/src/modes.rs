//! # Mode Catalog
//!
//! The seven rotations of the diatonic scale, plus the two pentatonic scales
//! the chord visualizer overlays on a shape.
//!
//! ## Types
//! - [`ModeId`] - Closed enum of the seven mode names, in scale-rotation order
//! - [`ModeDefinition`] - Interval set, color and description for one mode
//! - [`ScaleKind`] - Whatever scale is currently active: a pentatonic picked by
//!   chord quality, or a mode
//!
//! ## Interval Sets
//! Each mode's intervals start at 0, strictly increase, and step by 1 or 2
//! semitones, counting the step from the last degree back up to the octave.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CagedError, Result};
use crate::shapes::ChordQuality;

pub const MAJOR_PENTATONIC: [u8; 5] = [0, 2, 4, 7, 9];
pub const MINOR_PENTATONIC: [u8; 5] = [0, 3, 5, 7, 10];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeId {
    Ionian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Locrian,
}

impl ModeId {
    pub const ALL: [ModeId; 7] = [
        ModeId::Ionian,
        ModeId::Dorian,
        ModeId::Phrygian,
        ModeId::Lydian,
        ModeId::Mixolydian,
        ModeId::Aeolian,
        ModeId::Locrian,
    ];

    pub fn definition(self) -> &'static ModeDefinition {
        &MODES[self as usize]
    }

    pub fn as_str(self) -> &'static str {
        self.definition().name
    }
}

impl fmt::Display for ModeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ModeId {
    type Err = CagedError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        ModeId::ALL
            .iter()
            .copied()
            .find(|m| m.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CagedError::InvalidConfiguration(format!("unknown mode '{}'", wanted)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModeDefinition {
    pub id: ModeId,
    pub name: &'static str,
    pub intervals: [u8; 7],
    pub color: &'static str,
    pub description: &'static str,
}

impl ModeDefinition {
    /// 1-based scale degree of an interval above the root, if it is in the mode.
    pub fn degree_of(&self, interval: u8) -> Option<u8> {
        self.intervals
            .iter()
            .position(|&iv| iv == interval % 12)
            .map(|d| d as u8 + 1)
    }

    pub fn contains(&self, interval: u8) -> bool {
        self.intervals.contains(&(interval % 12))
    }
}

static MODES: [ModeDefinition; 7] = [
    ModeDefinition {
        id: ModeId::Ionian,
        name: "Ionian",
        intervals: [0, 2, 4, 5, 7, 9, 11],
        color: "#3b82f6",
        description: "The major scale. Bright and resolved.",
    },
    ModeDefinition {
        id: ModeId::Dorian,
        name: "Dorian",
        intervals: [0, 2, 3, 5, 7, 9, 10],
        color: "#8b5cf6",
        description: "Natural minor with a raised 6th. Minor but hopeful.",
    },
    ModeDefinition {
        id: ModeId::Phrygian,
        name: "Phrygian",
        intervals: [0, 1, 3, 5, 7, 8, 10],
        color: "#ef4444",
        description: "Natural minor with a flat 2nd. Dark, Spanish flavor.",
    },
    ModeDefinition {
        id: ModeId::Lydian,
        name: "Lydian",
        intervals: [0, 2, 4, 6, 7, 9, 11],
        color: "#06b6d4",
        description: "Major with a raised 4th. Dreamy and floating.",
    },
    ModeDefinition {
        id: ModeId::Mixolydian,
        name: "Mixolydian",
        intervals: [0, 2, 4, 5, 7, 9, 10],
        color: "#f97316",
        description: "Major with a flat 7th. Bluesy dominant sound.",
    },
    ModeDefinition {
        id: ModeId::Aeolian,
        name: "Aeolian",
        intervals: [0, 2, 3, 5, 7, 8, 10],
        color: "#6366f1",
        description: "The natural minor scale. Sad and introspective.",
    },
    ModeDefinition {
        id: ModeId::Locrian,
        name: "Locrian",
        intervals: [0, 1, 3, 5, 6, 8, 10],
        color: "#64748b",
        description: "Flat 2nd and flat 5th. Unstable and tense.",
    },
];

pub fn modes() -> &'static [ModeDefinition; 7] {
    &MODES
}

/// The scale whose tones are highlighted alongside the chord or mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScaleKind {
    MajorPentatonic,
    MinorPentatonic,
    Mode(ModeId),
}

impl ScaleKind {
    /// The pentatonic that matches a chord quality.
    pub fn pentatonic_for(quality: ChordQuality) -> Self {
        match quality {
            ChordQuality::Major => ScaleKind::MajorPentatonic,
            ChordQuality::Minor => ScaleKind::MinorPentatonic,
        }
    }

    pub fn intervals(self) -> &'static [u8] {
        match self {
            ScaleKind::MajorPentatonic => &MAJOR_PENTATONIC,
            ScaleKind::MinorPentatonic => &MINOR_PENTATONIC,
            ScaleKind::Mode(id) => &id.definition().intervals,
        }
    }

    pub fn contains(self, interval: u8) -> bool {
        self.intervals().contains(&(interval % 12))
    }
}

//! # Mode Pattern Calculation
//!
//! Lays a mode out across the whole neck for a chosen root.
//!
//! ## Algorithm
//! 1. Transpose the mode's interval set by the root to get its absolute
//!    pitch classes
//! 2. Walk every (string, fret) cell up to `max_fret`, string-major
//! 3. Keep cells whose pitch class is in the set, recording the untransposed
//!    interval (for scale-degree numbering) and whether it is the root
//!
//! The display range frames the root cells with `DISPLAY_PADDING` frets of
//! context on either side.

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::fretboard::{optimal_display_range, FretRange};
use crate::modes::{ModeDefinition, ModeId, ScaleKind};
use crate::pitch::{interval, interval_name, PitchClass};
use crate::tuning::{check_fret, check_max_fret, check_string, STANDARD_TUNING};

/// One in-mode cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModePosition {
    pub string: usize,
    pub fret: u8,
    pub note: &'static str,
    pub interval_from_root: u8,
    /// 1-based scale degree within the mode.
    pub degree: u8,
    pub is_root: bool,
}

impl ModePosition {
    /// Degree label such as "R", "b3" or "5".
    pub fn interval_label(&self) -> &'static str {
        interval_name(self.interval_from_root as i32)
    }
}

/// The mode's absolute pitch classes, in scale order from the root.
pub fn mode_pitch_classes(mode: ModeId, root: PitchClass) -> [PitchClass; 7] {
    let intervals = mode.definition().intervals;
    let mut pcs = [root; 7];
    for (pc, &iv) in pcs.iter_mut().zip(intervals.iter()) {
        *pc = root.transpose(iv as i32);
    }
    pcs
}

pub fn calculate_mode_pattern(mode: ModeId, root: PitchClass, max_fret: u8) -> Result<Vec<ModePosition>> {
    let max_fret = check_max_fret(max_fret)?;
    let def: &ModeDefinition = mode.definition();
    let absolute = mode_pitch_classes(mode, root);

    let mut positions = Vec::new();
    for (string, open) in STANDARD_TUNING.iter().enumerate() {
        for fret in 0..=max_fret {
            let pc = open.transpose(fret as i32);
            if !absolute.contains(&pc) {
                continue;
            }
            let iv = interval(root, pc).value();
            // Membership was just checked, so the degree always exists.
            let degree = def.degree_of(iv).unwrap_or(0);
            positions.push(ModePosition {
                string,
                fret,
                note: pc.name(),
                interval_from_root: iv,
                degree,
                is_root: iv == 0,
            });
        }
    }
    debug!(
        mode = def.name,
        root = root.name(),
        max_fret,
        count = positions.len(),
        "calculated mode pattern"
    );
    Ok(positions)
}

/// Root-flagged cells of a mode pattern.
pub fn root_positions_for(mode: ModeId, root: PitchClass, max_fret: u8) -> Result<Vec<ModePosition>> {
    Ok(calculate_mode_pattern(mode, root, max_fret)?
        .into_iter()
        .filter(|p| p.is_root)
        .collect())
}

/// A mode laid out on the neck.
#[derive(Debug, Clone)]
pub struct ModeView {
    mode: ModeId,
    root: PitchClass,
    max_fret: u8,
    positions: Vec<ModePosition>,
}

impl ModeView {
    pub fn new(mode: ModeId, root: PitchClass, max_fret: u8) -> Result<Self> {
        let positions = calculate_mode_pattern(mode, root, max_fret)?;
        Ok(Self {
            mode,
            root,
            max_fret,
            positions,
        })
    }

    pub fn mode(&self) -> ModeId {
        self.mode
    }

    pub fn root(&self) -> PitchClass {
        self.root
    }

    pub fn max_fret(&self) -> u8 {
        self.max_fret
    }

    pub fn positions(&self) -> &[ModePosition] {
        &self.positions
    }

    /// The in-mode cell at (string, fret), if any.
    pub fn position_at(&self, string: usize, fret: i32) -> Result<Option<&ModePosition>> {
        let string = check_string(string)?;
        let fret = check_fret(fret)?;
        Ok(self
            .positions
            .iter()
            .find(|p| p.string == string && p.fret == fret))
    }

    pub fn is_scale_tone_at(&self, string: usize, fret: i32) -> Result<bool> {
        crate::fretboard::is_scale_tone_at(string, fret, self.root, ScaleKind::Mode(self.mode))
    }

    pub fn is_root_at(&self, string: usize, fret: i32) -> Result<bool> {
        Ok(self.position_at(string, fret)?.map_or(false, |p| p.is_root))
    }

    pub fn root_positions(&self) -> Vec<ModePosition> {
        self.positions.iter().copied().filter(|p| p.is_root).collect()
    }

    pub fn display_range(&self) -> Result<FretRange> {
        optimal_display_range(self.root_positions().iter().map(|p| p.fret), self.max_fret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::STRING_COUNT;
    use std::collections::BTreeSet;

    fn grid_size(max_fret: u8) -> usize {
        STRING_COUNT * (max_fret as usize + 1)
    }

    #[test]
    fn test_c_ionian_is_the_natural_notes() {
        let positions = calculate_mode_pattern(ModeId::Ionian, PitchClass::C, 12).unwrap();
        let notes: BTreeSet<&str> = positions.iter().map(|p| p.note).collect();
        let expected: BTreeSet<&str> = ["C", "D", "E", "F", "G", "A", "B"].into_iter().collect();
        assert_eq!(notes, expected);
        assert!(positions.iter().all(|p| !p.note.contains('#')));
    }

    #[test]
    fn test_d_dorian_pitch_classes() {
        let names: Vec<&str> = mode_pitch_classes(ModeId::Dorian, PitchClass::D)
            .iter()
            .map(|pc| pc.name())
            .collect();
        assert_eq!(names, vec!["D", "E", "F", "G", "A", "B", "C"]);
        let values: BTreeSet<u8> = mode_pitch_classes(ModeId::Dorian, PitchClass::D)
            .iter()
            .map(|pc| pc.value())
            .collect();
        assert_eq!(values, BTreeSet::from([2, 4, 5, 7, 9, 11, 0]));
    }

    #[test]
    fn test_interval_is_untransposed_and_roots_flagged() {
        let positions = calculate_mode_pattern(ModeId::Dorian, PitchClass::D, 15).unwrap();
        for p in &positions {
            assert_eq!(p.is_root, p.note == "D");
            assert_eq!(p.is_root, p.interval_from_root == 0);
        }
        // F on the high e string, 1st fret, is the minor third of D
        let f = positions.iter().find(|p| p.string == 0 && p.fret == 1).unwrap();
        assert_eq!(f.interval_from_root, 3);
        assert_eq!(f.degree, 3);
        assert_eq!(f.interval_label(), "b3");
    }

    #[test]
    fn test_positions_are_string_major_and_bounded() {
        let positions = calculate_mode_pattern(ModeId::Lydian, PitchClass::new(5), 15).unwrap();
        assert!(positions.windows(2).all(|w| (w[0].string, w[0].fret) < (w[1].string, w[1].fret)));
        assert!(positions.iter().all(|p| p.fret <= 15));
        // Seven of twelve pitch classes, so a bit over half the grid
        assert!(positions.len() > grid_size(15) / 2);
    }

    #[test]
    fn test_root_positions_and_range() {
        let view = ModeView::new(ModeId::Aeolian, PitchClass::A, 15).unwrap();
        let roots = view.root_positions();
        assert!(roots.iter().all(|p| p.note == "A"));
        assert_eq!(roots, root_positions_for(ModeId::Aeolian, PitchClass::A, 15).unwrap());
        // A appears at fret 0 (A string) and fret 14 (G string), so the
        // padded range spans the whole displayed neck
        assert_eq!(view.display_range().unwrap(), FretRange { start: 0, end: 15 });
        assert!(view.is_root_at(4, 12).unwrap());
        assert!(!view.is_root_at(4, 2).unwrap());
        assert!(view.is_scale_tone_at(4, 3).unwrap()); // C
        assert!(!view.is_scale_tone_at(4, 4).unwrap()); // C#
    }

    #[test]
    fn test_invalid_bounds_fail() {
        assert!(calculate_mode_pattern(ModeId::Ionian, PitchClass::C, 0).is_err());
        assert!(ModeView::new(ModeId::Ionian, PitchClass::C, 40).is_err());
        let view = ModeView::new(ModeId::Ionian, PitchClass::C, 12).unwrap();
        assert!(view.position_at(7, 0).is_err());
    }
}

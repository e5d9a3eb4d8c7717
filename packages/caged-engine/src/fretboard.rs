//! # Fretboard Predicates
//!
//! Answers every question a renderer asks about one (string, fret) cell:
//! which shapes sound there, whether it is the root, whether it belongs to
//! the active scale, what the note is called and whether to label it.
//!
//! ## Fret 0
//! Open strings are drawn apart from the fretted grid. `shows_chord_tone_at`
//! therefore only reports fretted dots (fret >= 1); the open-string case is
//! answered by `shows_open_string`. `shapes_at` and `is_root_at` cover both.
//!
//! ## Views
//! - [`ChordView`] - One root and quality, with a single shape or all five
//! - `mode_pattern::ModeView` - A mode rooted on any of the 12 notes
//!
//! Views are rebuilt whenever the root, quality or selection changes; nothing
//! derived is cached across selections.
//!
//! ## Related Modules
//! - `position` - Realizes the shape voicings a view is built from
//! - `overlap` - Styles cells shared by several shapes
//! - `mode_pattern` - The mode counterpart of this module

use serde::Serialize;

use crate::error::{CagedError, Result};
use crate::modes::ScaleKind;
use crate::overlap::{caged_order, resolve_style, CellStyle};
use crate::pitch::{interval, PitchClass};
use crate::position::{realize_shape, ChordVoicing, StringVoicing};
use crate::shapes::{CagedLetter, ChordQuality};
use crate::tuning::{check_fret, check_max_fret, check_string, pitch_at, STRING_COUNT};

/// Frets of context shown either side of the outermost roots.
pub const DISPLAY_PADDING: u8 = 2;

/// An inclusive span of frets to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FretRange {
    pub start: u8,
    pub end: u8,
}

impl FretRange {
    pub fn new(start: u8, end: u8) -> Result<Self> {
        if start > end {
            return Err(CagedError::InvalidConfiguration(format!(
                "fret range starts at {} but ends at {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, fret: u8) -> bool {
        (self.start..=self.end).contains(&fret)
    }

    pub fn frets(&self) -> std::ops::RangeInclusive<u8> {
        self.start..=self.end
    }
}

/// A (string, fret) coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct FretPosition {
    pub string: usize,
    pub fret: u8,
}

/// Pad the outermost root frets and clamp to the neck.
///
/// With no roots at all the whole neck up to `max_fret` is shown.
pub fn optimal_display_range<I>(root_frets: I, max_fret: u8) -> Result<FretRange>
where
    I: IntoIterator<Item = u8>,
{
    let max_fret = check_max_fret(max_fret)?;
    let mut bounds: Option<(u8, u8)> = None;
    for fret in root_frets {
        bounds = Some(match bounds {
            None => (fret, fret),
            Some((lo, hi)) => (lo.min(fret), hi.max(fret)),
        });
    }
    match bounds {
        None => FretRange::new(0, max_fret),
        Some((lo, hi)) => FretRange::new(
            lo.saturating_sub(DISPLAY_PADDING).min(max_fret),
            hi.saturating_add(DISPLAY_PADDING).min(max_fret),
        ),
    }
}

/// Note name sounding at a cell.
pub fn note_name_at(string: usize, fret: i32) -> Result<&'static str> {
    Ok(pitch_at(string, fret)?.name())
}

/// True when the cell sounds C, D, E, F, G, A or B.
pub fn is_natural_note_at(string: usize, fret: i32) -> Result<bool> {
    Ok(pitch_at(string, fret)?.is_natural())
}

/// True when the cell's interval above `root` is in `scale`.
pub fn is_scale_tone_at(string: usize, fret: i32, root: PitchClass, scale: ScaleKind) -> Result<bool> {
    let pc = pitch_at(string, fret)?;
    Ok(scale.contains(interval(root, pc).value()))
}

/// Which overlays the user has switched on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Overlays {
    pub show_scale: bool,
    pub show_all_notes: bool,
}

/// Everything known about one cell of a chord view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellInfo {
    pub string: usize,
    pub fret: u8,
    pub note: &'static str,
    pub is_natural: bool,
    pub shapes: Vec<CagedLetter>,
    pub is_chord_tone: bool,
    pub shows_dot: bool,
    pub is_root: bool,
    pub is_scale_tone: bool,
    pub style: Option<CellStyle>,
}

/// Whether a cell gets a note label.
///
/// Chord tones are always labeled. Scale tones are labeled while the scale
/// overlay is on, and any natural note while "show all notes" is on.
pub fn show_note_name(cell: &CellInfo, overlays: Overlays) -> bool {
    cell.is_chord_tone
        || (overlays.show_scale && cell.is_scale_tone)
        || (overlays.show_all_notes && cell.is_natural)
}

/// One shape, or the union of all five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "shape", rename_all = "lowercase")]
pub enum ShapeSelection {
    Single(CagedLetter),
    All,
}

impl ShapeSelection {
    pub fn letters(self) -> Vec<CagedLetter> {
        match self {
            ShapeSelection::Single(letter) => vec![letter],
            ShapeSelection::All => CagedLetter::ALL.to_vec(),
        }
    }
}

impl std::str::FromStr for ShapeSelection {
    type Err = CagedError;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(ShapeSelection::All)
        } else {
            Ok(ShapeSelection::Single(s.parse()?))
        }
    }
}

/// A chord realized on the neck with one or all CAGED shapes.
#[derive(Debug, Clone)]
pub struct ChordView {
    root: PitchClass,
    quality: ChordQuality,
    selection: ShapeSelection,
    voicings: Vec<ChordVoicing>,
}

impl ChordView {
    pub fn new(root: PitchClass, quality: ChordQuality, selection: ShapeSelection) -> Self {
        let voicings = selection
            .letters()
            .into_iter()
            .map(|letter| realize_shape(letter, quality, root))
            .collect();
        Self {
            root,
            quality,
            selection,
            voicings,
        }
    }

    pub fn root(&self) -> PitchClass {
        self.root
    }

    pub fn quality(&self) -> ChordQuality {
        self.quality
    }

    pub fn selection(&self) -> ShapeSelection {
        self.selection
    }

    pub fn voicings(&self) -> &[ChordVoicing] {
        &self.voicings
    }

    /// The pentatonic matching the chord quality.
    pub fn scale(&self) -> ScaleKind {
        ScaleKind::pentatonic_for(self.quality)
    }

    /// Shapes sounding at a cell, in CAGED order. Includes open strings.
    pub fn shapes_at(&self, string: usize, fret: i32) -> Result<Vec<CagedLetter>> {
        let string = check_string(string)?;
        let fret = check_fret(fret)?;
        Ok(self.shapes_at_unchecked(string, fret))
    }

    fn shapes_at_unchecked(&self, string: usize, fret: u8) -> Vec<CagedLetter> {
        let hits: Vec<CagedLetter> = self
            .voicings
            .iter()
            .filter(|v| v.plays(string, fret))
            .map(|v| v.shape)
            .collect();
        caged_order(&hits)
    }

    /// A fretted chord-tone dot at the cell. Always false for fret 0.
    pub fn shows_chord_tone_at(&self, string: usize, fret: i32) -> Result<bool> {
        let string = check_string(string)?;
        let fret = check_fret(fret)?;
        Ok(fret >= 1 && !self.shapes_at_unchecked(string, fret).is_empty())
    }

    /// The string rings open in at least one selected shape.
    pub fn shows_open_string(&self, string: usize) -> Result<bool> {
        let string = check_string(string)?;
        Ok(self
            .voicings
            .iter()
            .any(|v| v.strings[string] == StringVoicing::Open))
    }

    /// No selected shape plays the string.
    pub fn is_muted_string(&self, string: usize) -> Result<bool> {
        let string = check_string(string)?;
        Ok(self.voicings.iter().all(|v| !v.strings[string].is_played()))
    }

    /// A shape occupying the cell lists this string among its roots.
    pub fn is_root_at(&self, string: usize, fret: i32) -> Result<bool> {
        let string = check_string(string)?;
        let fret = check_fret(fret)?;
        Ok(self.is_root_unchecked(string, fret))
    }

    fn is_root_unchecked(&self, string: usize, fret: u8) -> bool {
        self.voicings
            .iter()
            .any(|v| v.plays(string, fret) && v.definition().is_root_string(string))
    }

    pub fn is_scale_tone_at(&self, string: usize, fret: i32) -> Result<bool> {
        is_scale_tone_at(string, fret, self.root, self.scale())
    }

    pub fn style_at(&self, string: usize, fret: i32) -> Result<Option<CellStyle>> {
        Ok(resolve_style(&self.shapes_at(string, fret)?, self.quality))
    }

    pub fn cell(&self, string: usize, fret: i32) -> Result<CellInfo> {
        let pc = pitch_at(string, fret)?;
        let fret = fret as u8;
        let shapes = self.shapes_at_unchecked(string, fret);
        let is_chord_tone = !shapes.is_empty();
        Ok(CellInfo {
            string,
            fret,
            note: pc.name(),
            is_natural: pc.is_natural(),
            is_chord_tone,
            shows_dot: is_chord_tone && fret >= 1,
            is_root: self.is_root_unchecked(string, fret),
            is_scale_tone: self.scale().contains(interval(self.root, pc).value()),
            style: resolve_style(&shapes, self.quality),
            shapes,
        })
    }

    /// Every cell of the grid up to `max_fret`, string-major.
    pub fn cells(&self, max_fret: u8) -> Result<Vec<CellInfo>> {
        let max_fret = check_max_fret(max_fret)?;
        let mut cells = Vec::with_capacity(STRING_COUNT * (max_fret as usize + 1));
        for string in 0..STRING_COUNT {
            for fret in 0..=max_fret {
                cells.push(self.cell(string, fret as i32)?);
            }
        }
        Ok(cells)
    }

    /// Root-flagged cells across the selected shapes, sorted and unique.
    pub fn root_positions(&self) -> Vec<FretPosition> {
        let mut roots: Vec<FretPosition> = self
            .voicings
            .iter()
            .flat_map(|v| v.root_cells())
            .map(|(string, fret)| FretPosition { string, fret })
            .collect();
        roots.sort_unstable();
        roots.dedup();
        roots
    }

    pub fn display_range(&self, max_fret: u8) -> Result<FretRange> {
        optimal_display_range(self.root_positions().iter().map(|p| p.fret), max_fret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CagedLetter::*;

    fn view(root: PitchClass, quality: ChordQuality, selection: ShapeSelection) -> ChordView {
        ChordView::new(root, quality, selection)
    }

    #[test]
    fn test_open_c_has_no_dot_at_fret_zero() {
        let v = view(PitchClass::C, ChordQuality::Major, ShapeSelection::Single(C));
        assert!(!v.shows_chord_tone_at(0, 0).unwrap());
        assert!(v.shows_open_string(0).unwrap());
        assert_eq!(v.shapes_at(0, 0).unwrap(), vec![C]);
        assert!(v.shows_chord_tone_at(1, 1).unwrap());
        assert!(v.shows_chord_tone_at(4, 3).unwrap());
        assert!(!v.shows_chord_tone_at(4, 2).unwrap());
        assert!(v.is_muted_string(5).unwrap());
    }

    #[test]
    fn test_roots_of_open_c() {
        let v = view(PitchClass::C, ChordQuality::Major, ShapeSelection::Single(C));
        assert!(v.is_root_at(1, 1).unwrap());
        assert!(v.is_root_at(4, 3).unwrap());
        // E on the D string is a chord tone but not a root
        assert!(!v.is_root_at(3, 2).unwrap());
        assert_eq!(
            v.root_positions(),
            vec![FretPosition { string: 1, fret: 1 }, FretPosition { string: 4, fret: 3 }]
        );
    }

    #[test]
    fn test_every_realized_shape_has_a_root_cell() {
        for quality in [ChordQuality::Major, ChordQuality::Minor] {
            for letter in CagedLetter::ALL {
                for r in 0..12 {
                    let v = view(PitchClass::new(r), quality, ShapeSelection::Single(letter));
                    let roots = v.root_positions();
                    assert!(!roots.is_empty());
                    for p in roots {
                        assert!(v.is_root_at(p.string, p.fret as i32).unwrap());
                    }
                }
            }
        }
    }

    #[test]
    fn test_all_shapes_union() {
        let v = view(PitchClass::C, ChordQuality::Major, ShapeSelection::All);
        // A shape for C barres at fret 3; C shape plays the A string at 3 too
        assert_eq!(v.shapes_at(4, 3).unwrap(), vec![C, A]);
        assert!(matches!(v.style_at(4, 3).unwrap(), Some(CellStyle::Split { .. })));
        assert!(v.is_root_at(4, 3).unwrap());
        assert!(!v.is_muted_string(5).unwrap());
    }

    #[test]
    fn test_pentatonic_membership() {
        let major = view(PitchClass::A, ChordQuality::Major, ShapeSelection::Single(E));
        // A major pentatonic: A B C# E F#
        assert!(major.is_scale_tone_at(5, 5).unwrap()); // A
        assert!(major.is_scale_tone_at(5, 9).unwrap()); // C#
        assert!(!major.is_scale_tone_at(5, 8).unwrap()); // C
        let minor = view(PitchClass::A, ChordQuality::Minor, ShapeSelection::Single(E));
        assert!(minor.is_scale_tone_at(5, 8).unwrap()); // C
        assert!(!minor.is_scale_tone_at(5, 9).unwrap()); // C#
    }

    #[test]
    fn test_note_names_and_naturals() {
        assert_eq!(note_name_at(0, 0).unwrap(), "E");
        assert_eq!(note_name_at(4, 1).unwrap(), "A#");
        assert_eq!(note_name_at(2, 12).unwrap(), "G");
        assert!(is_natural_note_at(5, 1).unwrap()); // F
        assert!(!is_natural_note_at(5, 2).unwrap()); // F#
    }

    #[test]
    fn test_out_of_range_queries_fail() {
        let v = view(PitchClass::C, ChordQuality::Major, ShapeSelection::All);
        assert!(matches!(
            v.shows_chord_tone_at(6, 3),
            Err(CagedError::OutOfRangeIndex { axis: "string", .. })
        ));
        assert!(matches!(
            v.is_root_at(0, -1),
            Err(CagedError::OutOfRangeIndex { axis: "fret", .. })
        ));
        assert!(note_name_at(9, 0).is_err());
    }

    #[test]
    fn test_cell_labels() {
        let v = view(PitchClass::G, ChordQuality::Major, ShapeSelection::Single(E));
        let dot = v.cell(5, 3).unwrap();
        assert!(dot.shows_dot && dot.is_root);
        assert!(show_note_name(&dot, Overlays::default()));

        // F on the low E string: not a chord tone, not in G major pentatonic
        let f = v.cell(5, 1).unwrap();
        assert!(!show_note_name(&f, Overlays::default()));
        assert!(show_note_name(&f, Overlays { show_scale: false, show_all_notes: true }));

        // A on the low E string: a scale tone only
        let a = v.cell(5, 5).unwrap();
        assert!(!a.is_chord_tone && a.is_scale_tone);
        assert!(show_note_name(&a, Overlays { show_scale: true, show_all_notes: false }));

        // F# is neither natural nor in the pentatonic
        let f_sharp = v.cell(5, 2).unwrap();
        assert!(!show_note_name(&f_sharp, Overlays { show_scale: true, show_all_notes: true }));
    }

    #[test]
    fn test_display_range_pads_and_clamps() {
        let open_c = view(PitchClass::C, ChordQuality::Major, ShapeSelection::Single(C));
        assert_eq!(open_c.display_range(15).unwrap(), FretRange { start: 0, end: 5 });

        let high = view(PitchClass::B, ChordQuality::Major, ShapeSelection::Single(C));
        // C shape at B: offset 11, roots at 12 and 14
        assert_eq!(high.display_range(15).unwrap(), FretRange { start: 10, end: 15 });
    }

    #[test]
    fn test_fret_range_rejects_inverted_bounds() {
        assert!(matches!(
            FretRange::new(5, 3),
            Err(CagedError::InvalidConfiguration(_))
        ));
        assert!(FretRange::new(3, 3).unwrap().contains(3));
        assert_eq!(optimal_display_range(std::iter::empty(), 12).unwrap(), FretRange { start: 0, end: 12 });
    }

    #[test]
    fn test_cells_cover_grid() {
        let v = view(PitchClass::D, ChordQuality::Minor, ShapeSelection::All);
        let cells = v.cells(15).unwrap();
        assert_eq!(cells.len(), 6 * 16);
        assert!(cells.iter().any(|c| c.is_root));
        assert!(v.cells(30).is_err());
    }

    #[test]
    fn test_selection_parsing() {
        assert_eq!("all".parse::<ShapeSelection>().unwrap(), ShapeSelection::All);
        assert_eq!("G".parse::<ShapeSelection>().unwrap(), ShapeSelection::Single(G));
        assert!("Q".parse::<ShapeSelection>().is_err());
    }
}

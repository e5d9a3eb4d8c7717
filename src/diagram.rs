//! Plain-text fretboard diagrams.
//!
//! One line per string, high e at the top. The nut column (fret 0) is
//! closed with `||`, fretted columns with `|`.
//!
//! ```text
//!     0    1   2   3
//! e  o ||---|---|---|
//! B    ||-R-|---|---|
//! ```

use caged_engine::fretboard::{show_note_name, CellInfo, ChordView, FretRange, Overlays, ShapeSelection};
use caged_engine::mode_pattern::ModeView;
use caged_engine::position::{sounding_pitch, ChordVoicing};
use caged_engine::tuning::{string_label, STRING_COUNT};
use caged_engine::Result;

/// What to print in an in-mode cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModeLabels {
    #[default]
    Degrees,
    Notes,
}

fn header(range: FretRange) -> String {
    let mut line = String::from("  ");
    for fret in range.frets() {
        if fret == 0 {
            line.push_str(&format!("{:^3}  ", fret));
        } else {
            line.push_str(&format!("{:^3} ", fret));
        }
    }
    line.trim_end().to_string()
}

fn push_cell(line: &mut String, fret: u8, label: &str) {
    if fret == 0 {
        line.push_str(&format!("{:^3}||", label));
    } else {
        line.push_str(&format!("{:-^3}|", label));
    }
}

fn chord_label(view: &ChordView, cell: &CellInfo, overlays: Overlays, names: bool) -> Result<String> {
    if cell.fret == 0 && view.is_muted_string(cell.string)? {
        return Ok("x".to_string());
    }
    let label = if cell.is_chord_tone {
        if names {
            cell.note
        } else if cell.is_root {
            "R"
        } else if cell.fret == 0 {
            "o"
        } else {
            "*"
        }
    } else if show_note_name(cell, overlays) {
        if overlays.show_scale && cell.is_scale_tone && !names {
            "."
        } else {
            cell.note
        }
    } else {
        ""
    };
    Ok(label.to_string())
}

/// Render a chord view over `range`.
///
/// Chord tones print as `R` (root), `o` (open) or `*`; with `names` they
/// print their note name instead. Scale tones print as `.` while the scale
/// overlay is on.
pub fn render_chord(view: &ChordView, range: FretRange, overlays: Overlays, names: bool) -> Result<String> {
    let mut out = header(range);
    out.push('\n');
    for string in 0..STRING_COUNT {
        let mut line = format!("{} ", string_label(string)?);
        for fret in range.frets() {
            let cell = view.cell(string, fret as i32)?;
            let label = chord_label(view, &cell, overlays, names)?;
            push_cell(&mut line, fret, &label);
        }
        out.push_str(&line);
        out.push('\n');
    }
    Ok(out)
}

/// Title line such as "C (all shapes)" or "F#m (E shape)".
pub fn chord_title(view: &ChordView) -> String {
    let shapes = match view.selection() {
        ShapeSelection::All => "all shapes".to_string(),
        ShapeSelection::Single(letter) => format!("{} shape", letter),
    };
    format!("{}{} ({})", view.root(), view.quality().suffix(), shapes)
}

/// One voicing as its position and the notes it sounds, low E first.
///
/// A voicing that does not fit inside `range` is flagged, since part of it
/// is missing from the diagram.
pub fn voicing_summary(voicing: &ChordVoicing, range: FretRange) -> String {
    let notes: Vec<&str> = (0..STRING_COUNT)
        .rev()
        .map(|s| sounding_pitch(voicing, s).map_or("x", |pc| pc.name()))
        .collect();
    let mut line = format!("{} shape at fret {}: {}", voicing.shape, voicing.offset, notes.join(" "));
    if let Some((lo, hi)) = voicing.fret_span() {
        if !range.contains(lo) || !range.contains(hi) {
            line.push_str(&format!(" (frets {}-{}, partly off the diagram)", lo, hi));
        }
    }
    line
}

/// Render a mode view over `range`, labeling each in-mode cell with its
/// degree ("R", "b3", ...) or its note name.
pub fn render_mode(view: &ModeView, range: FretRange, labels: ModeLabels) -> Result<String> {
    let mut out = header(range);
    out.push('\n');
    for string in 0..STRING_COUNT {
        let mut line = format!("{} ", string_label(string)?);
        for fret in range.frets() {
            let label = match view.position_at(string, fret as i32)? {
                Some(p) => match labels {
                    ModeLabels::Degrees => p.interval_label(),
                    ModeLabels::Notes => p.note,
                },
                None => "",
            };
            push_cell(&mut line, fret, label);
        }
        out.push_str(&line);
        out.push('\n');
    }
    Ok(out)
}

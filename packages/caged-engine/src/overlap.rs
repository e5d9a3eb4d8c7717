//! # Overlap Styles
//!
//! In the all-shapes view several shapes can land on the same cell. This
//! module turns the set of shapes on a cell into a display style:
//! one shape gives a solid color, two give a hard 50/50 split, three or more
//! give equal bands.
//!
//! Bands are always laid out in CAGED order, never in the order the caller
//! discovered the shapes, so a given set always renders the same way.

use serde::Serialize;

use crate::shapes::{shape, CagedLetter, ChordQuality};

/// Display style for one occupied cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum CellStyle {
    Solid { color: &'static str },
    Split { left: &'static str, right: &'static str },
    Banded { colors: Vec<&'static str> },
}

impl CellStyle {
    /// CSS `background` value with hard color stops.
    pub fn to_css(&self) -> String {
        match self {
            CellStyle::Solid { color } => color.to_string(),
            CellStyle::Split { left, right } => {
                format!("linear-gradient(90deg, {} 50%, {} 50%)", left, right)
            }
            CellStyle::Banded { colors } => {
                let width = 100.0 / colors.len() as f64;
                let stops: Vec<String> = colors
                    .iter()
                    .enumerate()
                    .map(|(i, c)| {
                        format!("{} {:.2}% {:.2}%", c, width * i as f64, width * (i + 1) as f64)
                    })
                    .collect();
                format!("linear-gradient(90deg, {})", stops.join(", "))
            }
        }
    }

    pub fn band_count(&self) -> usize {
        match self {
            CellStyle::Solid { .. } => 1,
            CellStyle::Split { .. } => 2,
            CellStyle::Banded { colors } => colors.len(),
        }
    }
}

/// Sort into CAGED order and drop duplicates.
pub fn caged_order(shapes: &[CagedLetter]) -> Vec<CagedLetter> {
    let mut ordered = shapes.to_vec();
    ordered.sort_unstable();
    ordered.dedup();
    ordered
}

/// Style for the shapes occupying one cell; `None` when the cell is empty.
///
/// ```
/// use caged_engine::{resolve_style, CagedLetter, CellStyle, ChordQuality};
///
/// let a = resolve_style(&[CagedLetter::A, CagedLetter::C], ChordQuality::Major);
/// let b = resolve_style(&[CagedLetter::C, CagedLetter::A], ChordQuality::Major);
/// assert_eq!(a, b);
/// assert!(matches!(a, Some(CellStyle::Split { left: "#ef4444", .. })));
/// ```
pub fn resolve_style(shapes: &[CagedLetter], quality: ChordQuality) -> Option<CellStyle> {
    let colors: Vec<&'static str> = caged_order(shapes)
        .into_iter()
        .map(|letter| shape(letter, quality).color)
        .collect();
    match colors.len() {
        0 => None,
        1 => Some(CellStyle::Solid { color: colors[0] }),
        2 => Some(CellStyle::Split {
            left: colors[0],
            right: colors[1],
        }),
        _ => Some(CellStyle::Banded { colors }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CagedLetter::*;

    #[test]
    fn test_empty_cell_has_no_style() {
        assert_eq!(resolve_style(&[], ChordQuality::Major), None);
    }

    #[test]
    fn test_single_shape_is_solid() {
        assert_eq!(
            resolve_style(&[E], ChordQuality::Major),
            Some(CellStyle::Solid { color: "#22c55e" })
        );
    }

    #[test]
    fn test_split_follows_caged_order() {
        let style = resolve_style(&[D, G], ChordQuality::Minor).unwrap();
        assert_eq!(
            style,
            CellStyle::Split {
                left: "#eab308",
                right: "#3b82f6"
            }
        );
        assert_eq!(
            style.to_css(),
            "linear-gradient(90deg, #eab308 50%, #3b82f6 50%)"
        );
    }

    #[test]
    fn test_three_way_bands_are_order_stable() {
        let orders = [[E, C, A], [A, E, C], [C, A, E]];
        let styles: Vec<CellStyle> = orders
            .iter()
            .map(|o| resolve_style(o, ChordQuality::Major).unwrap())
            .collect();
        assert!(styles.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(
            styles[0],
            CellStyle::Banded {
                colors: vec!["#ef4444", "#f97316", "#22c55e"]
            }
        );
        assert_eq!(styles[0].band_count(), 3);
        assert_eq!(
            styles[0].to_css(),
            "linear-gradient(90deg, #ef4444 0.00% 33.33%, #f97316 33.33% 66.67%, #22c55e 66.67% 100.00%)"
        );
    }

    #[test]
    fn test_duplicates_collapse() {
        assert_eq!(
            resolve_style(&[G, G], ChordQuality::Major),
            Some(CellStyle::Solid { color: "#eab308" })
        );
    }
}

//! Integration tests for the CAGED engine
//!
//! Exercises the public API end to end: chord views, mode patterns, overlap
//! styling and quiz generation.

use caged_engine::quiz::{generate_questions, FixedSequence, QuizConfig, QuizPreferences, QuizSession};
use caged_engine::{
    api, calculate_mode_pattern, natural_sequence, note_to_number, number_to_note, realize_shape,
    resolve_offset, resolve_style, CagedError, CagedLetter, CellStyle, ChordQuality, ChordView,
    ModeId, PitchClass, ShapeSelection, STANDARD_TUNING,
};
use rand::{rngs::StdRng, SeedableRng};
use std::collections::{BTreeSet, HashMap};

#[test]
fn test_pitch_round_trip() {
    for p in 0..12 {
        assert_eq!(note_to_number(number_to_note(p)).unwrap().value() as i32, p);
    }
}

#[test]
fn test_open_c_shape_scenario() {
    let view = api::chord_view("C", "major", "C").unwrap();
    assert_eq!(view.voicings()[0].offset, 0);
    assert!(view.shows_open_string(0).unwrap());
    assert!(view.shows_open_string(2).unwrap());
    assert!(!view.shows_chord_tone_at(0, 0).unwrap());
}

#[test]
fn test_a_major_with_c_shape_scenario() {
    let offset = resolve_offset(PitchClass::A, CagedLetter::C.pitch_class());
    assert_eq!(offset, 9);
    let view = ChordView::new(PitchClass::A, ChordQuality::Major, ShapeSelection::Single(CagedLetter::C));
    // Former open strings become the barre at fret 9
    assert!(view.shows_chord_tone_at(0, 9).unwrap());
    assert!(view.shows_chord_tone_at(2, 9).unwrap());
    assert!(view.shows_chord_tone_at(4, 12).unwrap());
    assert!(view.is_muted_string(5).unwrap());
}

#[test]
fn test_root_recovery_for_every_shape_and_root() {
    for quality in [ChordQuality::Major, ChordQuality::Minor] {
        for letter in CagedLetter::ALL {
            for r in 0..12 {
                let root = PitchClass::new(r);
                let voicing = realize_shape(letter, quality, root);
                assert!(voicing.offset <= 11);
                for (string, fret) in voicing.root_cells() {
                    assert_eq!(STANDARD_TUNING[string].transpose(fret as i32), root);
                }
                assert!(!voicing.root_cells().is_empty());
            }
        }
    }
}

#[test]
fn test_d_dorian_scenario() {
    let positions = calculate_mode_pattern(ModeId::Dorian, PitchClass::D, 15).unwrap();
    let pcs: BTreeSet<u8> = positions
        .iter()
        .map(|p| note_to_number(p.note).unwrap().value())
        .collect();
    assert_eq!(pcs, BTreeSet::from([0, 2, 4, 5, 7, 9, 11]));
    // Raised 6th: B is in, Bb is not
    assert!(positions.iter().any(|p| p.note == "B" && p.interval_from_root == 9));
    assert!(positions.iter().all(|p| p.note != "A#"));
}

#[test]
fn test_c_ionian_one_octave() {
    // Low E string, frets 8..=19 is exactly one octave starting at C
    let positions = calculate_mode_pattern(ModeId::Ionian, PitchClass::C, 19).unwrap();
    let octave: Vec<&str> = positions
        .iter()
        .filter(|p| p.string == 5 && (8..=19).contains(&p.fret))
        .map(|p| p.note)
        .collect();
    assert_eq!(octave, vec!["C", "D", "E", "F", "G", "A", "B"]);
}

#[test]
fn test_overlap_is_order_stable_across_views() {
    let view = ChordView::new(PitchClass::C, ChordQuality::Major, ShapeSelection::All);
    let from_view = view.style_at(4, 3).unwrap();
    let forward = resolve_style(&[CagedLetter::C, CagedLetter::A], ChordQuality::Major);
    let backward = resolve_style(&[CagedLetter::A, CagedLetter::C], ChordQuality::Major);
    assert_eq!(from_view, forward);
    assert_eq!(forward, backward);
    assert_eq!(
        forward,
        Some(CellStyle::Split {
            left: "#ef4444",
            right: "#f97316"
        })
    );
}

#[test]
fn test_all_shapes_cover_the_neck() {
    // Every string gets a chord tone from at least one shape, and the
    // treble strings see several positions along the neck.
    let view = ChordView::new(PitchClass::G, ChordQuality::Major, ShapeSelection::All);
    for string in 0..6 {
        let hits = (0..=15)
            .filter(|&f| !view.shapes_at(string, f).unwrap().is_empty())
            .count();
        let minimum = if string <= 3 { 3 } else { 1 };
        assert!(hits >= minimum, "string {} has only {} chord tones", string, hits);
    }
}

#[test]
fn test_natural_sequences() {
    use CagedLetter::*;
    let expected: HashMap<CagedLetter, [CagedLetter; 5]> = HashMap::from([
        (C, [C, A, G, E, D]),
        (A, [A, G, E, D, C]),
        (G, [G, E, D, C, A]),
        (E, [E, D, C, A, G]),
        (D, [D, C, A, G, E]),
    ]);
    for (root, seq) in expected {
        assert_eq!(natural_sequence(root), seq);
    }
}

#[test]
fn test_quiz_thousand_questions() {
    let config = QuizConfig {
        question_count: 1000,
        ..QuizConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(42);
    let questions = generate_questions(&config, &mut rng).unwrap();
    assert_eq!(questions.len(), 1000);
    let mut counts: HashMap<CagedLetter, usize> = HashMap::new();
    for q in &questions {
        assert!(q.choices.contains(&q.correct_answer));
        *counts.entry(q.root_chord).or_default() += 1;
    }
    assert_eq!(counts.values().sum::<usize>(), 1000);
    assert!(counts.len() > 1);
}

#[test]
fn test_quiz_zero_count_scenario() {
    let prefs = QuizPreferences::from_json(r#"{"quizMode":true,"questionCount":0}"#).unwrap();
    assert!(matches!(prefs.validate(), Err(CagedError::InvalidConfiguration(_))));

    let config = QuizConfig {
        question_count: 0,
        ..QuizConfig::default()
    };
    let result = generate_questions(&config, &mut FixedSequence::new(vec![1, 2, 3]));
    assert!(matches!(result, Err(CagedError::InvalidConfiguration(_))));
}

#[test]
fn test_quiz_session_from_preferences() {
    let prefs = QuizPreferences::from_yaml(
        "quizMode: true\nquestionCount: 4\nallowedChords: [E]\nallowedShapes: [C, A]\n",
    )
    .unwrap();
    let config = prefs.validate().unwrap();
    let mut session = QuizSession::start(&config, &mut StdRng::seed_from_u64(9)).unwrap();
    while let Some(q) = session.current_question() {
        assert_eq!(q.root_chord, CagedLetter::E);
        let expected_position = if q.shape_used == CagedLetter::C { 4 } else { 7 };
        assert_eq!(q.position, expected_position);
        session.submit(CagedLetter::E).unwrap();
    }
    assert_eq!(session.summary().percentage, 100);
    assert_eq!(session.submit(CagedLetter::E), Err(CagedError::QuizFinished));
}

use caged_engine::quiz::{generate_questions, validate_answer, QuizPreferences, QuizQuestion};
use caged_engine::{
    api, natural_sequence, resolve_style, CagedError, CagedLetter, CellInfo, CellStyle,
    ChordQuality, ChordVoicing, FretRange, ModeDefinition, ModePosition,
};
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct EngineError {
    kind: &'static str,
    message: String,
}

fn error_to_js(e: CagedError) -> JsValue {
    let payload = EngineError {
        kind: e.kind(),
        message: e.to_string(),
    };
    let json = serde_json::to_string(&payload).unwrap_or_else(|_| e.to_string());
    JsValue::from_str(&json)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CagedError> {
    serde_json::to_string(value)
        .map_err(|e| CagedError::InvalidConfiguration(format!("cannot encode result: {}", e)))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChordGrid {
    chord: String,
    voicings: Vec<ChordVoicing>,
    display_range: FretRange,
    cells: Vec<CellInfo>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ModeGrid {
    mode: &'static ModeDefinition,
    root: &'static str,
    display_range: FretRange,
    positions: Vec<ModePosition>,
}

fn chord_grid_json(root: &str, quality: &str, shape: &str, max_fret: u8) -> Result<String, CagedError> {
    let view = api::chord_view(root, quality, shape)?;
    let grid = ChordGrid {
        chord: format!("{}{}", view.root(), view.quality().suffix()),
        voicings: view.voicings().to_vec(),
        display_range: view.display_range(max_fret)?,
        cells: view.cells(max_fret)?,
    };
    to_json(&grid)
}

fn mode_pattern_json(mode: &str, root: &str, max_fret: u8) -> Result<String, CagedError> {
    let view = api::mode_view(mode, root, max_fret)?;
    let grid = ModeGrid {
        mode: view.mode().definition(),
        root: view.root().name(),
        display_range: view.display_range()?,
        positions: view.positions().to_vec(),
    };
    to_json(&grid)
}

fn generate_quiz_json(preferences: &str, seed: u32) -> Result<String, CagedError> {
    let config = QuizPreferences::from_json(preferences)?.validate()?;
    let mut rng = StdRng::seed_from_u64(seed as u64);
    to_json(&generate_questions(&config, &mut rng)?)
}

fn validate_preferences_json(preferences: &str) -> Result<String, CagedError> {
    to_json(&QuizPreferences::from_json(preferences)?.validate()?)
}

fn check_answer_json(question: &str, selected: &str) -> Result<bool, CagedError> {
    let question: QuizQuestion = serde_json::from_str(question)
        .map_err(|e| CagedError::InvalidConfiguration(format!("malformed question: {}", e)))?;
    let selected: CagedLetter = selected.parse()?;
    Ok(validate_answer(&question, selected))
}

fn cell_style_css(shapes: &str, quality: &str) -> Result<String, CagedError> {
    let quality: ChordQuality = quality.parse()?;
    let letters = shapes
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| c.to_string().parse::<CagedLetter>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(resolve_style(&letters, quality)
        .map(|style: CellStyle| style.to_css())
        .unwrap_or_default())
}

/// Every cell of a chord view as JSON, plus its voicings and framing range
#[wasm_bindgen]
pub fn chord_grid(root: &str, quality: &str, shape: &str, max_fret: u8) -> Result<String, JsValue> {
    chord_grid_json(root, quality, shape, max_fret).map_err(error_to_js)
}

/// In-mode positions of a mode rooted on `root`, as JSON
#[wasm_bindgen]
pub fn mode_pattern(mode: &str, root: &str, max_fret: u8) -> Result<String, JsValue> {
    mode_pattern_json(mode, root, max_fret).map_err(error_to_js)
}

/// Generate quiz questions from persisted preferences
#[wasm_bindgen]
pub fn generate_quiz(preferences: &str, seed: u32) -> Result<String, JsValue> {
    generate_quiz_json(preferences, seed).map_err(error_to_js)
}

/// Validate persisted preferences, returning the normalized quiz config
#[wasm_bindgen]
pub fn validate_preferences(preferences: &str) -> Result<String, JsValue> {
    validate_preferences_json(preferences).map_err(error_to_js)
}

#[wasm_bindgen]
pub fn check_answer(question: &str, selected: &str) -> Result<bool, JsValue> {
    check_answer_json(question, selected).map_err(error_to_js)
}

#[wasm_bindgen]
pub fn note_name_at(string: usize, fret: i32) -> Result<String, JsValue> {
    caged_engine::note_name_at(string, fret)
        .map(str::to_string)
        .map_err(error_to_js)
}

/// CSS background for a cell shared by `shapes` (e.g. "CA" or "C,A,G")
#[wasm_bindgen]
pub fn cell_style(shapes: &str, quality: &str) -> Result<String, JsValue> {
    cell_style_css(shapes, quality).map_err(error_to_js)
}

/// CAGED order starting from `root`, as a JSON array
#[wasm_bindgen]
pub fn shape_sequence(root: &str) -> Result<String, JsValue> {
    root.parse::<CagedLetter>()
        .and_then(|letter| to_json(&natural_sequence(letter)))
        .map_err(error_to_js)
}

use crate::errors::ParseError;
use crate::grid::Grid;
use crate::log::init_logger;
use crate::numbering::generate_entries;
use crate::puzzle::Puzzle;
use crate::store::StoreError;
use crate::validation::{validate_puzzle, ValidationError};
use crate::view::to_public_view;
use crate::word_list::{WordList, WordListError};
use wasm_bindgen::prelude::*;

use serde_wasm_bindgen::to_value;

/// Structured error information for JavaScript consumers
#[derive(serde::Serialize)]
struct WasmError {
    /// Error code (e.g., "E003", "V001")
    code: String,
    /// Display message
    message: String,
    /// Short description of error type
    description: String,
    /// Detailed explanation
    details: String,
    /// Optional helpful suggestion
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<String>,
}

// Every crate error type exposes the same code/description/details/help quartet
macro_rules! impl_from_coded_error {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for WasmError {
                fn from(e: $ty) -> Self {
                    WasmError {
                        code: e.code().to_string(),
                        message: e.to_string(),
                        description: e.description().to_string(),
                        details: e.details().to_string(),
                        help: e.help().map(ToString::to_string),
                    }
                }
            }
        )+
    };
}

impl_from_coded_error!(ParseError, ValidationError, StoreError, WordListError);

impl WasmError {
    fn bad_json(e: &serde_json::Error) -> Self {
        WasmError {
            code: "WASM001".to_string(),
            message: format!("puzzle JSON could not be read: {e}"),
            description: "Invalid puzzle JSON".to_string(),
            details: "The input must be a JSON object with at least id, rows and cols fields.".to_string(),
            help: Some("Check the JSON against the puzzle format, e.g. {\"id\":\"p1\",\"rows\":3,\"cols\":3,\"grid\":{...}}".to_string()),
        }
    }

    fn serialization(e: &serde_wasm_bindgen::Error) -> Self {
        WasmError {
            code: "WASM002".to_string(),
            message: format!("serialization failed: {e}"),
            description: "Failed to serialize result".to_string(),
            details: "The result could not be converted to JavaScript format.".to_string(),
            help: Some("This is an internal error. Please report this issue.".to_string()),
        }
    }

    fn bad_word_list(e: &serde_wasm_bindgen::Error) -> Self {
        WasmError {
            code: "WASM003".to_string(),
            message: format!("word_list must be string[]: {e}"),
            description: "Invalid word-list format".to_string(),
            details: "The word_list parameter must be a JavaScript array of strings.".to_string(),
            help: Some("Pass the array returned by parse_word_list, e.g. ['react', 'crate']".to_string()),
        }
    }
}

impl From<WasmError> for JsValue {
    fn from(e: WasmError) -> Self {
        let mut msg = format!("Error {}: {}", e.code, e.message);

        if !e.details.is_empty() {
            msg.push_str(&format!("\n\n{}", e.details));
        }

        if let Some(help) = e.help {
            msg.push_str(&format!("\n\nSuggestion: {help}"));
        }

        js_sys::Error::new(&msg).into()
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    to_value(value).map_err(|e| WasmError::serialization(&e).into())
}

fn read_puzzle(json: &str, derive: bool) -> Result<Puzzle, WasmError> {
    let puzzle: Puzzle = serde_json::from_str(json).map_err(|e| WasmError::bad_json(&e))?;
    Ok(if derive { puzzle.with_derived_entries() } else { puzzle })
}

/// Initialize cruciverb logging with the specified debug setting.
///
/// This function must be called from JavaScript after the WASM module loads.
#[wasm_bindgen]
pub fn initialize(debug_enabled: bool) {
    console_error_panic_hook::set_once();
    init_logger(debug_enabled);

    log::info!("WASM module initialized");
    if !debug_enabled {
        log::info!("Debug logging disabled");
    }
}

#[derive(serde::Serialize)]
struct WasmValidationReport {
    valid: bool,
    problems: Vec<String>,
}

/// JS entry: (puzzle_json: string, derive: boolean) -> { valid, problems: string[] }
///
/// An invalid puzzle is a normal result, not an error; only unreadable JSON throws.
#[wasm_bindgen]
pub fn validate_puzzle_json(puzzle_json: &str, derive: bool) -> Result<JsValue, JsValue> {
    let puzzle = read_puzzle(puzzle_json, derive)?;
    let problems = validate_puzzle(&puzzle).err().map(|e| e.messages()).unwrap_or_default();
    to_js(&WasmValidationReport { valid: problems.is_empty(), problems })
}

/// JS entry: (diagram: string) -> Entry[] numbered from a text grid diagram
#[wasm_bindgen]
pub fn generate_entries_from_diagram(diagram: &str) -> Result<JsValue, JsValue> {
    let grid: Grid = diagram.parse().map_err(|e: Box<ParseError>| WasmError::from(*e))?;
    to_js(&generate_entries(&grid))
}

/// JS entry: (puzzle_json: string, derive: boolean) -> answer-free puzzle
///
/// Throws with code V001 if the puzzle is invalid.
#[wasm_bindgen]
pub fn public_view_json(puzzle_json: &str, derive: bool) -> Result<JsValue, JsValue> {
    let puzzle = read_puzzle(puzzle_json, derive)?;
    validate_puzzle(&puzzle).map_err(WasmError::from)?;
    to_js(&to_public_view(&puzzle))
}

/// Parse a newline-separated word list (`word` or `word;score` per line).
///
/// Returns the surviving normalized words as a `string[]`.
#[wasm_bindgen]
pub fn parse_word_list(text: &str, min_score: i32) -> Result<JsValue, JsValue> {
    let word_list = WordList::parse_from_str(text, min_score);
    to_js(&word_list.words())
}

fn word_list_from_js(word_list: JsValue) -> Result<WordList, WasmError> {
    let words: Vec<String> = serde_wasm_bindgen::from_value(word_list).map_err(|e| WasmError::bad_word_list(&e))?;
    Ok(WordList::parse_from_str(&words.join("\n"), i32::MIN))
}

/// JS entry: (letters: string, word_list: string[], len?: number) -> string[]
#[wasm_bindgen]
pub fn find_anagrams(letters: &str, word_list: JsValue, len: Option<usize>) -> Result<JsValue, JsValue> {
    let found = word_list_from_js(word_list)?.anagrams(letters, len).map_err(WasmError::from)?;
    to_js(&found)
}

/// JS entry: (pattern: string, word_list: string[], len?: number) -> string[]
#[wasm_bindgen]
pub fn find_pattern_matches(pattern: &str, word_list: JsValue, len: Option<usize>) -> Result<JsValue, JsValue> {
    let found = word_list_from_js(word_list)?.pattern_match(pattern, len).map_err(WasmError::from)?;
    to_js(&found)
}

/// Generate a debug report users can paste into an issue.
#[wasm_bindgen]
pub fn get_debug_info(puzzle_id: &str, error_message: &str, rows: usize, cols: usize) -> String {
    use std::fmt::Write;
    let mut report = String::new();

    // NB: writing to a String never fails
    let _ = writeln!(&mut report, "=== CRUCIVERB DEBUG REPORT ===");
    let _ = writeln!(&mut report, "Version: {} ({})", env!("CARGO_PKG_VERSION"), env!("GIT_HASH"));
    let _ = writeln!(
        &mut report,
        "Generated: {}",
        js_sys::Date::new_0().to_iso_string().as_string().unwrap_or_else(|| "unknown".to_string())
    );
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Error");
    let _ = writeln!(&mut report, "{error_message}");
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Puzzle");
    let _ = writeln!(&mut report, "Id: {puzzle_id}");
    let _ = writeln!(&mut report, "Size: {rows}x{cols}");
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "## Environment");
    if let Some(window) = web_sys::window() {
        if let Ok(user_agent) = window.navigator().user_agent() {
            let _ = writeln!(&mut report, "User Agent: {user_agent}");
        }
    }
    let _ = writeln!(&mut report);

    let _ = writeln!(&mut report, "=== END DEBUG REPORT ===");

    report
}

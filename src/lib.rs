// Library API shared by the CLI and WASM builds
pub mod entry;
pub mod enumeration;
pub mod errors;
pub mod grid;
pub mod log;
pub mod numbering;
pub mod puzzle;
pub mod store;
pub mod validation;
pub mod view;
pub mod word_list;

// Compile the wasm glue only when targeting wasm32.
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use entry::{Direction, Entry};
pub use enumeration::{normalized_answer_len, parse_enum, Enumeration};
pub use errors::ParseError;
pub use grid::{Cell, CellRef, Grid};
pub use numbering::generate_entries;
pub use puzzle::{Clue, Puzzle, PuzzleType};
pub use validation::{validate_puzzle, Problem, ValidationError};
pub use view::{to_public_view, PuzzlePublic};

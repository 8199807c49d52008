use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};

use cruciverb::errors::ParseError;
use cruciverb::grid::Grid;
use cruciverb::numbering::generate_entries;
use cruciverb::puzzle::{Puzzle, PuzzleType};
use cruciverb::store::{IngestMode, PuzzleStore, StoreError};
use cruciverb::validation::{validate_puzzle, ValidationError};
use cruciverb::word_list::{WordList, WordListError};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Crossword grid numbering and structural validation
#[derive(Parser, Debug)]
#[command(author, version = VERSION, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a puzzle for structural problems and list every one found
    Validate(PuzzleArgs),
    /// Print the entries derived from a puzzle's grid
    Number(PuzzleArgs),
    /// Print the answer-free JSON view of a valid puzzle
    Public(PuzzleArgs),
    /// List exact anagrams of some letters
    Anagram {
        /// Letters to rearrange (spaces and punctuation ignored)
        letters: String,
        /// Required answer length
        #[arg(short, long)]
        len: Option<usize>,
        #[command(flatten)]
        words: WordListArgs,
    },
    /// List words matching a pattern such as "re?c?" ('?' or '.' = any letter)
    Pattern {
        pattern: String,
        /// Answer length (defaults to the pattern length)
        #[arg(short, long)]
        len: Option<usize>,
        #[command(flatten)]
        words: WordListArgs,
    },
}

#[derive(Args, Debug)]
struct PuzzleArgs {
    /// Puzzle JSON file, or a text grid diagram with --diagram
    path: PathBuf,

    /// Read the file as a grid diagram ('#' block, '.' open, letters = solutions)
    #[arg(short, long)]
    diagram: bool,

    /// Replace supplied entries with the ones derived from the grid
    #[arg(long)]
    derive: bool,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct WordListArgs {
    /// Path to the word list file (word or word;score per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")
    )]
    word_list: PathBuf,

    /// Minimum score filter (unscored words are always kept)
    #[arg(short = 'm', long, default_value_t = 0)]
    min_score: i32,
}

/// Entry point of the cruciverb CLI.
///
/// Delegates to [`try_main`], printing any error with its code and help text
/// before exiting with code 1.
fn main() -> ExitCode {
    cruciverb::log::init_logger(cruciverb::log::debug_requested());

    if let Err(e) = try_main() {
        eprintln!("Error: {}", detailed(e.as_ref()));
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

// Detailed display for our error types, plain display for anything else.
fn detailed(e: &(dyn Error + 'static)) -> String {
    if let Some(err) = e.downcast_ref::<ValidationError>() {
        err.display_detailed()
    } else if let Some(err) = e.downcast_ref::<ParseError>() {
        err.display_detailed()
    } else if let Some(err) = e.downcast_ref::<StoreError>() {
        err.display_detailed()
    } else if let Some(err) = e.downcast_ref::<WordListError>() {
        err.display_detailed()
    } else {
        e.to_string()
    }
}

fn try_main() -> Result<(), Box<dyn Error>> {
    match Cli::parse().command {
        Command::Validate(args) => validate(&args),
        Command::Number(args) => number(&args),
        Command::Public(args) => public(&args),
        Command::Anagram { letters, len, words } => {
            let word_list = WordList::load_from_path(&words.word_list, words.min_score)?;
            print_words(&word_list.anagrams(&letters, len)?);
            Ok(())
        }
        Command::Pattern { pattern, len, words } => {
            let word_list = WordList::load_from_path(&words.word_list, words.min_score)?;
            print_words(&word_list.pattern_match(&pattern, len)?);
            Ok(())
        }
    }
}

/// Read a puzzle from JSON, or build a grid-only puzzle from a diagram.
fn load_puzzle(args: &PuzzleArgs) -> Result<Puzzle, Box<dyn Error>> {
    let text = std::fs::read_to_string(&args.path)
        .map_err(|e| format!("failed to read puzzle from '{}': {e}", args.path.display()))?;

    let puzzle = if args.diagram {
        let grid: Grid = text.parse().map_err(|e: Box<ParseError>| *e)?;
        Puzzle::from_grid(file_stem(&args.path), "", PuzzleType::Quick, grid)
    } else {
        serde_json::from_str(&text)?
    };

    Ok(if args.derive { puzzle.with_derived_entries() } else { puzzle })
}

fn file_stem(path: &Path) -> String {
    path.file_stem().map_or_else(|| "puzzle".to_string(), |s| s.to_string_lossy().into_owned())
}

fn validate(args: &PuzzleArgs) -> Result<(), Box<dyn Error>> {
    let puzzle = load_puzzle(args)?;
    let t_check = Instant::now();
    let result = validate_puzzle(&puzzle);
    let check_secs = t_check.elapsed().as_secs_f64();

    if args.json {
        let problems = result.as_ref().err().map(ValidationError::messages).unwrap_or_default();
        let report = serde_json::json!({ "id": puzzle.id, "valid": result.is_ok(), "problems": problems });
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    result?;
    if !args.json {
        println!(
            "✓ puzzle {:?} is valid ({} entries, {} clues)",
            puzzle.id,
            puzzle.entries.len(),
            puzzle.clues.len()
        );
    }
    eprintln!("Checked in {check_secs:.3}s.");
    Ok(())
}

fn number(args: &PuzzleArgs) -> Result<(), Box<dyn Error>> {
    let puzzle = load_puzzle(args)?;
    let entries = generate_entries(&puzzle.grid);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    for entry in &entries {
        let head = entry.cells.first().map(ToString::to_string).unwrap_or_default();
        println!("{:>5}  {:<6} {head:<9} ({})", entry.id.as_deref().unwrap_or("?"), entry.dir, entry.len());
    }
    eprintln!("{} entries.", entries.len());
    Ok(())
}

fn public(args: &PuzzleArgs) -> Result<(), Box<dyn Error>> {
    let puzzle = load_puzzle(args)?;
    let id = puzzle.id.clone();

    // go through the store so the view comes out of the same gate a server would use
    let store = PuzzleStore::new();
    store.insert(puzzle, IngestMode::AsSupplied)?;
    let view = store.get_public(&id)?;
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}

fn print_words(words: &[String]) {
    for w in words {
        println!("{}", w.to_ascii_uppercase());
    }
    eprintln!("{} found.", words.len());
}

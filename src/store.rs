//! `store`: in-memory puzzle storage.
//!
//! The store enforces the two boundary rules of the crate:
//! - a puzzle is only stored after it passes [`validate_puzzle`];
//! - a stored puzzle only leaves as its public view.
//!
//! There is no durability. Access is read-mostly and guarded by an `RwLock`,
//! so a `PuzzleStore` can be shared between threads behind an `Arc`.
//!
//! # Error Codes
//!
//! - S001: `NotFound` (No puzzle with that id)
//! - S002: `Invalid` (Puzzle failed validation and was not stored)

use crate::puzzle::Puzzle;
use crate::validation::{validate_puzzle, ValidationError};
use crate::view::{to_public_view, PuzzlePublic};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// How supplied entries are treated when a puzzle is ingested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IngestMode {
    /// Validate the entries exactly as supplied
    #[default]
    AsSupplied,
    /// Replace the entries with those derived from the grid, then validate
    DeriveEntries,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("puzzle not found: {id:?}")]
    NotFound { id: String },

    #[error("puzzle {id:?} rejected: {source}")]
    Invalid {
        id: String,
        #[source]
        source: ValidationError,
    },
}

impl StoreError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::NotFound { .. } => "S001",
            StoreError::Invalid { .. } => "S002",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            StoreError::NotFound { .. } => "No puzzle with that id",
            StoreError::Invalid { .. } => "Puzzle failed validation and was not stored",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            StoreError::NotFound { .. } => "The store holds no puzzle under the requested id. This is distinct from a puzzle that exists but is invalid: invalid puzzles are never stored.",
            StoreError::Invalid { .. } => "The puzzle was checked before storing and one or more structural problems were found (see V001). Nothing was stored.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            StoreError::NotFound { .. } => Some("Check the id, or ingest the puzzle first"),
            StoreError::Invalid { .. } => None, // ValidationError has its own help
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        match self {
            StoreError::Invalid { source, .. } => {
                format!("{}\n  caused by: {}", self.code(), source.display_detailed())
            }
            StoreError::NotFound { .. } => {
                crate::errors::format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
            }
        }
    }
}

/// Validated puzzles keyed by id.
#[derive(Debug, Default)]
pub struct PuzzleStore {
    puzzles: RwLock<HashMap<String, Arc<Puzzle>>>,
}

impl PuzzleStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store a puzzle, replacing any puzzle with the same id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Invalid`] if the puzzle (after entry derivation, for
    /// [`IngestMode::DeriveEntries`]) fails validation. Nothing is stored then.
    pub fn insert(&self, puzzle: Puzzle, mode: IngestMode) -> Result<(), StoreError> {
        let puzzle = match mode {
            IngestMode::AsSupplied => puzzle,
            IngestMode::DeriveEntries => puzzle.with_derived_entries(),
        };

        if let Err(source) = validate_puzzle(&puzzle) {
            log::warn!("rejected puzzle {:?}: {} problem(s)", puzzle.id, source.problems().len());
            return Err(StoreError::Invalid { id: puzzle.id, source });
        }

        let id = puzzle.id.clone();
        let replaced = self
            .puzzles
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id.clone(), Arc::new(puzzle))
            .is_some();
        log::info!("stored puzzle {id:?}{}", if replaced { " (replaced)" } else { "" });
        Ok(())
    }

    /// The public view of a stored puzzle.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no puzzle has that id.
    pub fn get_public(&self, id: &str) -> Result<PuzzlePublic, StoreError> {
        let puzzle = self
            .puzzles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })?;
        Ok(to_public_view(&puzzle))
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.puzzles.read().unwrap_or_else(PoisonError::into_inner).contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.puzzles.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stored ids, sorted
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .puzzles
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        ids.sort();
        ids
    }
}

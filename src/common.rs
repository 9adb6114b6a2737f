//! Common-password set
//!
//! Handles loading and querying the list of known-weak passwords and
//! dictionary words.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the default list location.
pub const COMMON_LIST_ENV: &str = "PWD_COMMON_LIST_PATH";

const DEFAULT_LIST_PATH: &str = "./assets/common-passwords.txt";

#[derive(Error, Debug)]
pub enum CommonSetError {
    #[error("Common-password list not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read common-password list: {0}")]
    Read(#[from] std::io::Error),
    #[error("Common-password list is empty")]
    EmptyFile,
}

/// A read-only set of common passwords and dictionary words.
///
/// Entries are normalised to lowercase at construction; lookups are
/// case-insensitive. Loaded once and shared by all scoring calls, the set is
/// never mutated afterwards, so it may be used from multiple threads freely.
#[derive(Debug, Clone, Default)]
pub struct CommonPasswordSet {
    words: HashSet<String>,
}

impl CommonPasswordSet {
    /// An empty set. Scoring degrades to heuristic-only checks.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a set from in-memory words, normalising to lowercase.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Returns the list file path.
    ///
    /// Priority:
    /// 1. Environment variable `PWD_COMMON_LIST_PATH`
    /// 2. Default path `./assets/common-passwords.txt`
    pub fn default_path() -> PathBuf {
        std::env::var(COMMON_LIST_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_LIST_PATH))
    }

    /// Loads the set from [`Self::default_path`].
    pub fn load_default() -> Result<Self, CommonSetError> {
        Self::load(Self::default_path())
    }

    /// Loads the set from a newline-delimited file.
    ///
    /// Lines are trimmed and lowercased; empty lines are skipped.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File is empty
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CommonSetError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Common-password list load FAILED: not found {:?}", path);
            return Err(CommonSetError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Common-password list load FAILED: empty file {:?}", path);
            return Err(CommonSetError::EmptyFile);
        }

        let set = Self::from_words(content.lines());

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Common-password list loaded: {} entries from {:?}",
            set.len(),
            path
        );

        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case-insensitive exact membership test.
    pub fn contains(&self, candidate: &str) -> bool {
        self.words.contains(&candidate.to_lowercase())
    }

    /// Finds a set entry contained inside the candidate, case-insensitively.
    ///
    /// When several entries match, the longest wins, ties broken
    /// alphabetically, so the result is deterministic for a given set.
    pub fn find_substring(&self, candidate: &str) -> Option<&str> {
        let lowered = candidate.to_lowercase();
        self.words
            .iter()
            .filter(|w| lowered.contains(w.as_str()))
            .map(String::as_str)
            .min_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)))
    }
}

//! Entropy-based password strength analysis
//!
//! Scores a password by estimating its entropy from the character classes it
//! draws on, running heuristic weakness checks, and matching it against a
//! list of common passwords and dictionary words. The output is a structured
//! [`ScoreResult`]; rendering it is the caller's business.
//!
//! Scoring is a pure function of the password and the common-password set:
//! no I/O, no shared state, safe to call from multiple threads.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_COMMON_LIST_PATH`: Custom path to the common-password list
//!   (default: `./assets/common-passwords.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_entropy::{score, CommonPasswordSet};
//! use secrecy::SecretString;
//!
//! // Load the common-password list once at startup
//! let common = CommonPasswordSet::load_default().expect("Failed to load common-password list");
//!
//! let password = SecretString::new("Tr0ub4dor&3".to_string().into());
//! let result = score(&password, &common);
//!
//! println!("Entropy: {:.1} bits", result.entropy_bits);
//! println!("Strength: {:?}", result.strength());
//! for weakness in &result.weaknesses {
//!     println!(" - {}", weakness.message);
//! }
//! ```

// Internal modules
mod checks;
mod common;
mod scorer;
mod types;

// Public API
pub use checks::MIN_LENGTH;
pub use common::{CommonPasswordSet, CommonSetError, COMMON_LIST_ENV};
pub use scorer::{entropy_bits, score};
pub use types::{
    CharacterClassProfile, ScoreResult, Strength, Weakness, WeaknessKind,
    MODERATE_THRESHOLD_BITS, STRONG_THRESHOLD_BITS,
};

//! Heuristic weakness checks
//!
//! Each check inspects a specific aspect of the password and reports
//! zero or more findings.

mod common_list;
mod length;
mod pattern;
mod variety;

pub use common_list::common_list_check;
pub use length::{length_check, MIN_LENGTH};
pub use pattern::pattern_check;
pub use variety::variety_check;

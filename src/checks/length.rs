//! Length check - enforces the minimum password length.

use crate::types::{Weakness, WeaknessKind};

/// Passwords shorter than this are flagged as too short.
pub const MIN_LENGTH: usize = 8;

/// Checks if the password meets minimum length requirements.
///
/// # Returns
/// - `Some(weakness)` if password is too short
/// - `None` if password has sufficient length
pub fn length_check(password: &str) -> Option<Weakness> {
    if password.chars().count() < MIN_LENGTH {
        return Some(Weakness::new(
            WeaknessKind::TooShort,
            format!("Too short (less than {} characters)", MIN_LENGTH),
        ));
    }
    None
}

//! Common-list check - matches the password against known-weak entries.

use crate::common::CommonPasswordSet;
use crate::types::{Weakness, WeaknessKind};

/// Checks the password against the common-password set.
///
/// An exact match (case-insensitive) takes precedence; otherwise any set
/// entry appearing inside the password is reported as a dictionary word.
/// Either finding forces a weak classification regardless of entropy.
pub fn common_list_check(password: &str, common_set: &CommonPasswordSet) -> Option<Weakness> {
    if common_set.contains(password) {
        return Some(Weakness::new(
            WeaknessKind::CommonPassword,
            "Found in the list of common passwords",
        ));
    }
    if let Some(word) = common_set.find_substring(password) {
        return Some(Weakness::new(
            WeaknessKind::DictionaryWord(word.to_string()),
            format!("Contains common dictionary word '{}'", word),
        ));
    }
    None
}

//! Variety check - missing character classes and low distinct-character count.

use std::collections::HashSet;

use crate::types::{CharacterClassProfile, Weakness, WeaknessKind};

/// Passwords with fewer distinct characters than this are flagged.
const MIN_DISTINCT: usize = 5;

/// Checks if the password draws on all four character classes and uses
/// enough distinct characters.
///
/// Produces one finding per missing class, plus a low-variety finding
/// when too few distinct characters are used.
pub fn variety_check(password: &str, profile: &CharacterClassProfile) -> Vec<Weakness> {
    let mut findings = Vec::new();

    if !profile.has_uppercase {
        findings.push(Weakness::new(
            WeaknessKind::MissingUppercase,
            "Missing uppercase letters",
        ));
    }
    if !profile.has_lowercase {
        findings.push(Weakness::new(
            WeaknessKind::MissingLowercase,
            "Missing lowercase letters",
        ));
    }
    if !profile.has_digit {
        findings.push(Weakness::new(WeaknessKind::MissingDigit, "Missing digits"));
    }
    if !profile.has_special {
        findings.push(Weakness::new(
            WeaknessKind::MissingSpecial,
            "Missing special characters",
        ));
    }

    let distinct: HashSet<char> = password.chars().collect();
    if !password.is_empty() && distinct.len() < MIN_DISTINCT {
        findings.push(Weakness::new(
            WeaknessKind::LowVariety,
            "Low character variety",
        ));
    }

    findings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(password: &str) -> Vec<WeaknessKind> {
        let profile = CharacterClassProfile::of(password);
        variety_check(password, &profile)
            .into_iter()
            .map(|w| w.kind)
            .collect()
    }

    #[test]
    fn test_variety_check_missing_uppercase() {
        assert!(kinds("lowercase123!").contains(&WeaknessKind::MissingUppercase));
    }

    #[test]
    fn test_variety_check_missing_lowercase() {
        assert!(kinds("UPPERCASE123!").contains(&WeaknessKind::MissingLowercase));
    }

    #[test]
    fn test_variety_check_missing_digit() {
        assert!(kinds("NoNumbersHere!").contains(&WeaknessKind::MissingDigit));
    }

    #[test]
    fn test_variety_check_missing_special() {
        assert!(kinds("NoSpecial123").contains(&WeaknessKind::MissingSpecial));
    }

    #[test]
    fn test_variety_check_all_classes_present() {
        assert!(kinds("HasAll123!@#").is_empty());
    }

    #[test]
    fn test_variety_check_low_distinct_characters() {
        assert!(kinds("AbAb1!1!").contains(&WeaknessKind::LowVariety));
    }

    #[test]
    fn test_variety_check_empty_password_reports_all_classes() {
        let found = kinds("");
        assert_eq!(found.len(), 4);
        assert!(!found.contains(&WeaknessKind::LowVariety));
    }

    #[test]
    fn test_variety_check_order_is_fixed() {
        assert_eq!(
            kinds(""),
            vec![
                WeaknessKind::MissingUppercase,
                WeaknessKind::MissingLowercase,
                WeaknessKind::MissingDigit,
                WeaknessKind::MissingSpecial,
            ]
        );
    }
}

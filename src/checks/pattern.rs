//! Pattern check - detects repeated and sequential character runs.

use crate::types::{Weakness, WeaknessKind};

/// Runs of this length or longer are flagged.
const RUN_LENGTH: usize = 3;

/// Analyzes the password for repeated and sequential character runs.
///
/// Both findings can be reported for the same password; each is reported
/// at most once however many runs occur.
pub fn pattern_check(password: &str) -> Vec<Weakness> {
    let chars: Vec<char> = password.chars().collect();
    let mut findings = Vec::new();

    if has_repeated_run(&chars) {
        findings.push(Weakness::new(
            WeaknessKind::RepeatedCharacters,
            "Contains repeated characters (3 or more in a row)",
        ));
    }
    if has_sequential_run(&chars) {
        findings.push(Weakness::new(
            WeaknessKind::SequentialCharacters,
            "Contains sequential characters (e.g., abc, 123)",
        ));
    }

    findings
}

/// 3+ identical consecutive characters, e.g. "aaa".
fn has_repeated_run(chars: &[char]) -> bool {
    chars
        .windows(RUN_LENGTH)
        .any(|w| w.iter().all(|&c| c == w[0]))
}

/// 3+ consecutive code points ascending or descending by one,
/// case-insensitive, e.g. "abc", "CBA" or "321".
fn has_sequential_run(chars: &[char]) -> bool {
    let codes: Vec<i64> = chars
        .iter()
        .map(|c| c.to_ascii_lowercase() as i64)
        .collect();
    codes.windows(RUN_LENGTH).any(|w| {
        w.windows(2).all(|p| p[1] == p[0] + 1) || w.windows(2).all(|p| p[1] == p[0] - 1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(password: &str) -> Vec<WeaknessKind> {
        pattern_check(password).into_iter().map(|w| w.kind).collect()
    }

    #[test]
    fn test_pattern_check_repeated_chars() {
        assert_eq!(kinds("xxaaaxx"), vec![WeaknessKind::RepeatedCharacters]);
    }

    #[test]
    fn test_pattern_check_sequential_digits() {
        assert_eq!(kinds("pwd123pwd"), vec![WeaknessKind::SequentialCharacters]);
    }

    #[test]
    fn test_pattern_check_sequential_letters_descending() {
        assert_eq!(kinds("xxcbaxx"), vec![WeaknessKind::SequentialCharacters]);
    }

    #[test]
    fn test_pattern_check_sequential_is_case_insensitive() {
        assert_eq!(kinds("aBcXyZ9"), vec![WeaknessKind::SequentialCharacters]);
    }

    #[test]
    fn test_pattern_check_both_findings() {
        assert_eq!(
            kinds("aaa123"),
            vec![
                WeaknessKind::RepeatedCharacters,
                WeaknessKind::SequentialCharacters,
            ]
        );
    }

    #[test]
    fn test_pattern_check_two_in_a_row_is_fine() {
        assert!(kinds("aabbcc--").is_empty());
    }

    #[test]
    fn test_pattern_check_clean_password() {
        assert!(kinds("Tr0ub4dor&3").is_empty());
    }

    #[test]
    fn test_pattern_check_too_short_for_a_run() {
        assert!(kinds("ab").is_empty());
        assert!(kinds("").is_empty());
    }
}

//! Strength scorer - entropy estimation plus heuristic checks.

use secrecy::{ExposeSecret, SecretString};

use crate::checks::{common_list_check, length_check, pattern_check, variety_check};
use crate::common::CommonPasswordSet;
use crate::types::{CharacterClassProfile, ScoreResult, Weakness};

/// Scores a password against the common-password set.
///
/// Pure and deterministic: identical inputs always produce an identical
/// [`ScoreResult`]. Total over all string inputs including the empty
/// string, which yields zero entropy and a too-short finding.
///
/// # Arguments
/// * `password` - The password to score
/// * `common_set` - Pre-loaded set of common passwords and dictionary words
pub fn score(password: &SecretString, common_set: &CommonPasswordSet) -> ScoreResult {
    let pwd = password.expose_secret();
    let profile = CharacterClassProfile::of(pwd);
    let entropy = entropy_bits(pwd, &profile);

    // Checks run in a fixed order so findings come out deterministic:
    // common-list match first, then length, variety, patterns.
    let mut weaknesses: Vec<Weakness> = Vec::new();
    weaknesses.extend(common_list_check(pwd, common_set));
    weaknesses.extend(length_check(pwd));
    weaknesses.extend(variety_check(pwd, &profile));
    weaknesses.extend(pattern_check(pwd));

    let tips = tips_for(&weaknesses);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        entropy_bits = entropy,
        findings = weaknesses.len(),
        "password scored"
    );

    ScoreResult {
        entropy_bits: entropy,
        profile,
        weaknesses,
        tips,
    }
}

/// Estimates password entropy in bits.
///
/// Every character class present contributes its alphabet size to the
/// search pool; the estimate is `length x log2(pool)`. This keeps the
/// estimate monotonic both in length and in class diversity. An empty
/// pool (empty password) gives 0.0.
pub fn entropy_bits(password: &str, profile: &CharacterClassProfile) -> f64 {
    let pool = profile.pool_size();
    if pool == 0 {
        return 0.0;
    }
    password.chars().count() as f64 * f64::from(pool).log2()
}

/// One tip per finding, collapsing duplicates while preserving order.
fn tips_for(weaknesses: &[Weakness]) -> Vec<String> {
    let mut tips: Vec<String> = Vec::with_capacity(weaknesses.len());
    for weakness in weaknesses {
        let tip = weakness.kind.tip();
        if !tips.iter().any(|t| t == tip) {
            tips.push(tip.to_string());
        }
    }
    tips
}

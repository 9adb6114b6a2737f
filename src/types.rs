//! Core types produced and consumed by the scorer.

/// Alphabet sizes contributed by each character class to the entropy pool.
/// Special covers the printable ASCII symbols.
const LOWERCASE_POOL: u32 = 26;
const UPPERCASE_POOL: u32 = 26;
const DIGIT_POOL: u32 = 10;
const SPECIAL_POOL: u32 = 33;

/// Which character classes a password draws on.
///
/// Computed once per scoring call and immutable afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterClassProfile {
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_digit: bool,
    pub has_special: bool,
}

impl CharacterClassProfile {
    /// Derives the profile from a password.
    pub fn of(password: &str) -> Self {
        Self {
            has_uppercase: password.chars().any(|c| c.is_uppercase()),
            has_lowercase: password.chars().any(|c| c.is_lowercase()),
            has_digit: password.chars().any(|c| c.is_ascii_digit()),
            has_special: password.chars().any(|c| !c.is_alphanumeric()),
        }
    }

    /// Size of the alphabet an attacker would have to search per position,
    /// summed over the classes present. Zero for an empty password.
    pub fn pool_size(&self) -> u32 {
        let mut pool = 0;
        if self.has_lowercase {
            pool += LOWERCASE_POOL;
        }
        if self.has_uppercase {
            pool += UPPERCASE_POOL;
        }
        if self.has_digit {
            pool += DIGIT_POOL;
        }
        if self.has_special {
            pool += SPECIAL_POOL;
        }
        pool
    }
}

/// The reason a weakness finding was raised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeaknessKind {
    /// Case-insensitive exact match against the common-password set.
    CommonPassword,
    /// A set entry appears inside the password; carries the matched word.
    DictionaryWord(String),
    TooShort,
    MissingUppercase,
    MissingLowercase,
    MissingDigit,
    MissingSpecial,
    LowVariety,
    RepeatedCharacters,
    SequentialCharacters,
}

impl WeaknessKind {
    /// True for kinds that force a [`Strength::Weak`] classification
    /// regardless of entropy.
    pub fn is_common_list_match(&self) -> bool {
        matches!(self, Self::CommonPassword | Self::DictionaryWord(_))
    }

    /// The improvement tip paired with this kind of weakness.
    pub fn tip(&self) -> &'static str {
        match self {
            Self::CommonPassword => {
                "Avoid common passwords that are easy to guess or found in leaks"
            }
            Self::DictionaryWord(_) => "Mix unrelated words or add symbols and digits",
            Self::TooShort => "Use at least 12 characters",
            Self::MissingUppercase => "Add uppercase letters",
            Self::MissingLowercase => "Add lowercase letters",
            Self::MissingDigit => "Add digits",
            Self::MissingSpecial => "Add symbols such as !@#$%",
            Self::LowVariety => "Use a wider mix of different characters",
            Self::RepeatedCharacters => {
                "Avoid repeating the same character several times in a row"
            }
            Self::SequentialCharacters => "Avoid sequences like abc or 123",
        }
    }
}

/// A single detected weakness with a human-readable explanation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Weakness {
    pub kind: WeaknessKind,
    pub message: String,
}

impl Weakness {
    pub fn new(kind: WeaknessKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Overall classification derived from the entropy estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

/// Entropy thresholds (in bits) for the strength tiers.
pub const MODERATE_THRESHOLD_BITS: f64 = 28.0;
pub const STRONG_THRESHOLD_BITS: f64 = 60.0;

impl Strength {
    /// Classifies an entropy estimate, ignoring any findings.
    pub fn from_entropy(bits: f64) -> Self {
        if bits < MODERATE_THRESHOLD_BITS {
            Self::Weak
        } else if bits < STRONG_THRESHOLD_BITS {
            Self::Moderate
        } else {
            Self::Strong
        }
    }
}

/// The scorer's output: entropy estimate, findings and paired tips.
///
/// Created fresh per call and owned by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreResult {
    /// Entropy estimate in bits.
    pub entropy_bits: f64,
    /// Character classes present in the password.
    pub profile: CharacterClassProfile,
    /// Detected weaknesses, in a fixed order.
    pub weaknesses: Vec<Weakness>,
    /// One improvement tip per weakness kind, duplicates collapsed.
    pub tips: Vec<String>,
}

impl ScoreResult {
    /// Overall classification. A common-list match (exact or dictionary
    /// substring) always yields [`Strength::Weak`], whatever the entropy.
    pub fn strength(&self) -> Strength {
        if self.weaknesses.iter().any(|w| w.kind.is_common_list_match()) {
            return Strength::Weak;
        }
        Strength::from_entropy(self.entropy_bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_of_mixed_password() {
        let profile = CharacterClassProfile::of("Ab1!");
        assert!(profile.has_uppercase);
        assert!(profile.has_lowercase);
        assert!(profile.has_digit);
        assert!(profile.has_special);
        assert_eq!(profile.pool_size(), 95);
    }

    #[test]
    fn test_profile_of_empty_password() {
        let profile = CharacterClassProfile::of("");
        assert_eq!(profile, CharacterClassProfile::default());
        assert_eq!(profile.pool_size(), 0);
    }

    #[test]
    fn test_pool_grows_with_each_class() {
        let lower = CharacterClassProfile::of("abc");
        let lower_digit = CharacterClassProfile::of("abc1");
        assert!(lower_digit.pool_size() > lower.pool_size());
    }

    #[test]
    fn test_strength_thresholds() {
        assert_eq!(Strength::from_entropy(0.0), Strength::Weak);
        assert_eq!(Strength::from_entropy(27.9), Strength::Weak);
        assert_eq!(Strength::from_entropy(28.0), Strength::Moderate);
        assert_eq!(Strength::from_entropy(59.9), Strength::Moderate);
        assert_eq!(Strength::from_entropy(60.0), Strength::Strong);
    }

    #[test]
    fn test_common_list_match_overrides_strength() {
        let result = ScoreResult {
            entropy_bits: 90.0,
            profile: CharacterClassProfile::default(),
            weaknesses: vec![Weakness::new(
                WeaknessKind::CommonPassword,
                "Found in the list of common passwords",
            )],
            tips: vec![],
        };
        assert_eq!(result.strength(), Strength::Weak);
    }

    #[test]
    fn test_every_kind_has_a_tip() {
        let kinds = [
            WeaknessKind::CommonPassword,
            WeaknessKind::DictionaryWord("word".to_string()),
            WeaknessKind::TooShort,
            WeaknessKind::MissingUppercase,
            WeaknessKind::MissingLowercase,
            WeaknessKind::MissingDigit,
            WeaknessKind::MissingSpecial,
            WeaknessKind::LowVariety,
            WeaknessKind::RepeatedCharacters,
            WeaknessKind::SequentialCharacters,
        ];
        for kind in kinds {
            assert!(!kind.tip().is_empty());
        }
    }
}

//! Keyword evasion.
//!
//! Naive WAF rules match keywords literally (`UNION`, `SELECT`). SQL lexers
//! treat keywords case-insensitively and read `/**/` as whitespace, so both
//! mutations below defeat such rules without changing what the statement
//! means.

use tracing::trace;

use crate::config::COMMENT_SPACE;
use crate::random::Entropy;

/// Which keyword mutations to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Evasion {
    /// Flip the case of random characters.
    pub case: bool,
    /// Split the keyword with an inline comment.
    pub comment: bool,
}

impl Evasion {
    /// Returns whether any mutation is enabled.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.case || self.comment
    }

    /// Applies the enabled mutations to `keyword`, case flips first.
    ///
    /// Empty keywords and symbolic tokens (`*`, `=`, `<=`) are returned
    /// unchanged.
    #[must_use]
    pub fn apply(&self, keyword: &str, entropy: &Entropy) -> String {
        if !self.is_enabled() || !is_word(keyword) {
            return keyword.to_string();
        }

        let mut mutated = keyword.to_string();
        if self.case {
            mutated = flip_case(&mutated, entropy);
        }
        if self.comment {
            mutated = insert_comment(&mutated, entropy);
        }

        trace!(keyword, mutated = %mutated, "mutated keyword");
        mutated
    }
}

fn is_word(token: &str) -> bool {
    token
        .chars()
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_')
}

/// Performs between one and `len` single-character case flips at random
/// positions. Positions may repeat, so a flip can be undone.
#[must_use]
pub fn flip_case(keyword: &str, entropy: &Entropy) -> String {
    let mut chars: Vec<char> = keyword.chars().collect();
    if chars.is_empty() {
        return String::new();
    }

    let flips = entropy.between(1, chars.len());
    for _ in 0..flips {
        let i = entropy.below(chars.len());
        chars[i] = swap_case(chars[i]);
    }
    chars.into_iter().collect()
}

/// Inserts `/**/` at a random interior offset in `[1, max(1, len - 2)]`.
///
/// Keywords shorter than two characters are returned unchanged.
#[must_use]
pub fn insert_comment(keyword: &str, entropy: &Entropy) -> String {
    let len = keyword.chars().count();
    if len < 2 {
        return keyword.to_string();
    }

    let offset = entropy.between(1, len.saturating_sub(2).max(1));
    let split = keyword
        .char_indices()
        .nth(offset)
        .map_or(keyword.len(), |(i, _)| i);

    let mut mutated = String::with_capacity(keyword.len() + COMMENT_SPACE.len());
    mutated.push_str(&keyword[..split]);
    mutated.push_str(COMMENT_SPACE);
    mutated.push_str(&keyword[split..]);
    mutated
}

/// Flips the case of every character independently with even odds.
#[must_use]
pub fn random_case(keyword: &str, entropy: &Entropy) -> String {
    keyword
        .chars()
        .map(|c| if entropy.coin() { swap_case(c) } else { c })
        .collect()
}

fn swap_case(c: char) -> char {
    if c.is_ascii_uppercase() {
        c.to_ascii_lowercase()
    } else if c.is_ascii_lowercase() {
        c.to_ascii_uppercase()
    } else {
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flip_case_preserves_letters() {
        let entropy = Entropy::seeded(1);
        for _ in 0..32 {
            let mutated = flip_case("union", &entropy);
            assert_eq!(mutated.to_uppercase(), "UNION");
        }
    }

    #[test]
    fn test_insert_comment_interior() {
        let entropy = Entropy::seeded(2);
        for _ in 0..32 {
            let mutated = insert_comment("SELECT", &entropy);
            assert!(!mutated.starts_with(COMMENT_SPACE));
            assert!(!mutated.ends_with(COMMENT_SPACE));
            assert_eq!(mutated.replace(COMMENT_SPACE, ""), "SELECT");
        }
    }

    #[test]
    fn test_insert_comment_two_chars() {
        let entropy = Entropy::seeded(5);
        assert_eq!(insert_comment("OR", &entropy), "O/**/R");
        assert_eq!(insert_comment("X", &entropy), "X");
    }

    #[test]
    fn test_disabled_passthrough() {
        let entropy = Entropy::seeded(3);
        assert_eq!(Evasion::default().apply("select", &entropy), "select");
    }

    #[test]
    fn test_symbols_untouched() {
        let entropy = Entropy::seeded(4);
        let evasion = Evasion {
            case: true,
            comment: true,
        };
        assert_eq!(evasion.apply("*", &entropy), "*");
        assert_eq!(evasion.apply("<=", &entropy), "<=");
        assert_eq!(evasion.apply("", &entropy), "");
    }

    #[test]
    fn test_composed() {
        let entropy = Entropy::seeded(9);
        let evasion = Evasion {
            case: true,
            comment: true,
        };
        for _ in 0..32 {
            let mutated = evasion.apply("UNION", &entropy);
            assert!(mutated.contains(COMMENT_SPACE));
            assert_eq!(mutated.replace(COMMENT_SPACE, "").to_uppercase(), "UNION");
        }
    }

    #[test]
    fn test_random_case() {
        let entropy = Entropy::seeded(6);
        assert_eq!(random_case("select", &entropy).to_lowercase(), "select");
    }
}

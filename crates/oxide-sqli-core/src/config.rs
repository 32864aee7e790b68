//! Rendering configuration.
//!
//! A [`Config`] is built once and then only read. Every enumerated option
//! parses through [`FromStr`], so an unknown value fails while the
//! configuration is being built rather than when SQL is rendered.
//!
//! ```rust
//! use oxide_sqli_core::{Config, KeywordCase, Parens};
//!
//! let config = Config::default()
//!     .with_case("upper".parse().unwrap())
//!     .with_parens(Parens::Less);
//!
//! assert_eq!(config.case(), KeywordCase::Upper);
//! assert!("sideways".parse::<KeywordCase>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::error::{ConfigError, Result};
use crate::random::Entropy;

/// The default token separator.
pub const DEFAULT_SPACE: &str = " ";

/// An inline comment, lexed by SQL engines as whitespace.
pub const COMMENT_SPACE: &str = "/**/";

/// Controls the casing of keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum KeywordCase {
    /// Keywords are emitted as written.
    #[default]
    None,
    /// Keywords are lower-cased.
    Lower,
    /// Keywords are upper-cased.
    Upper,
    /// Every keyword character is independently upper- or lower-cased.
    Random,
}

impl KeywordCase {
    /// Returns the option name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Lower => "lower",
            Self::Upper => "upper",
            Self::Random => "random",
        }
    }
}

impl FromStr for KeywordCase {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(Self::None),
            "lower" => Ok(Self::Lower),
            "upper" => Ok(Self::Upper),
            "random" => Ok(Self::Random),
            other => Err(ConfigError::InvalidCase(other.to_string())),
        }
    }
}

impl TryFrom<String> for KeywordCase {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// The character used to quote string literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum QuoteStyle {
    /// `'text'`
    #[default]
    Single,
    /// `"text"`
    Double,
    /// `` `text` ``
    Backtick,
}

impl QuoteStyle {
    /// Returns the quotation character.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Self::Single => '\'',
            Self::Double => '"',
            Self::Backtick => '`',
        }
    }

    /// Returns the option name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Double => "double",
            Self::Backtick => "backtick",
        }
    }
}

impl FromStr for QuoteStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "single" => Ok(Self::Single),
            "double" => Ok(Self::Double),
            "backtick" | "tick" => Ok(Self::Backtick),
            other => Err(ConfigError::InvalidQuote(other.to_string())),
        }
    }
}

impl TryFrom<String> for QuoteStyle {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// How eagerly lists are wrapped in parenthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum Parens {
    /// Every list is parenthesized.
    #[default]
    More,
    /// Lists of two or more elements are left bare.
    Less,
}

impl Parens {
    /// Returns the option name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::More => "more",
            Self::Less => "less",
        }
    }
}

impl FromStr for Parens {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "more" => Ok(Self::More),
            "less" => Ok(Self::Less),
            other => Err(ConfigError::InvalidParens(other.to_string())),
        }
    }
}

impl TryFrom<String> for Parens {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

macro_rules! impl_display_via_as_str {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

impl_display_via_as_str!(KeywordCase, QuoteStyle, Parens);

/// Style options shared by the formatter, the emitter and injections.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    case: KeywordCase,
    quote: QuoteStyle,
    hex_escape: bool,
    parens: Parens,
    #[serde(deserialize_with = "deserialize_space")]
    space: String,
    case_evasion: bool,
    comment_evasion: bool,
    #[serde(skip)]
    entropy: Entropy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            case: KeywordCase::default(),
            quote: QuoteStyle::default(),
            hex_escape: false,
            parens: Parens::default(),
            space: String::from(DEFAULT_SPACE),
            case_evasion: false,
            comment_evasion: false,
            entropy: Entropy::default(),
        }
    }
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// Missing fields take their defaults. `space` may be a string, or a
    /// boolean where `true` means a plain space and `false` an inline
    /// comment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed documents, unknown fields
    /// and unrecognized option values.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the keyword case policy.
    #[must_use]
    pub fn with_case(mut self, case: KeywordCase) -> Self {
        self.case = case;
        self
    }

    /// Sets the string quoting style.
    #[must_use]
    pub fn with_quote(mut self, quote: QuoteStyle) -> Self {
        self.quote = quote;
        self
    }

    /// Enables or disables hex-escaping of every string.
    #[must_use]
    pub fn with_hex_escape(mut self, hex_escape: bool) -> Self {
        self.hex_escape = hex_escape;
        self
    }

    /// Sets the list parenthesis preference.
    #[must_use]
    pub fn with_parens(mut self, parens: Parens) -> Self {
        self.parens = parens;
        self
    }

    /// Sets the token separator.
    #[must_use]
    pub fn with_space(mut self, space: impl Into<String>) -> Self {
        self.space = space.into();
        self
    }

    /// Separates tokens with `/**/` instead of a space.
    #[must_use]
    pub fn with_comment_spaces(self) -> Self {
        self.with_space(COMMENT_SPACE)
    }

    /// Enables random case flips inside keywords.
    #[must_use]
    pub fn with_case_evasion(mut self, enabled: bool) -> Self {
        self.case_evasion = enabled;
        self
    }

    /// Enables `/**/` insertion inside keywords.
    #[must_use]
    pub fn with_comment_evasion(mut self, enabled: bool) -> Self {
        self.comment_evasion = enabled;
        self
    }

    /// Replaces the random source.
    #[must_use]
    pub fn with_entropy(mut self, entropy: Entropy) -> Self {
        self.entropy = entropy;
        self
    }

    /// Returns the keyword case policy.
    #[must_use]
    pub const fn case(&self) -> KeywordCase {
        self.case
    }

    /// Returns the string quoting style.
    #[must_use]
    pub const fn quote(&self) -> QuoteStyle {
        self.quote
    }

    /// Returns whether strings are hex-escaped.
    #[must_use]
    pub const fn hex_escape(&self) -> bool {
        self.hex_escape
    }

    /// Returns the list parenthesis preference.
    #[must_use]
    pub const fn parens(&self) -> Parens {
        self.parens
    }

    /// Returns the token separator.
    #[must_use]
    pub fn space(&self) -> &str {
        &self.space
    }

    /// Returns whether case evasion is enabled.
    #[must_use]
    pub const fn case_evasion(&self) -> bool {
        self.case_evasion
    }

    /// Returns whether comment evasion is enabled.
    #[must_use]
    pub const fn comment_evasion(&self) -> bool {
        self.comment_evasion
    }

    /// Returns the random source.
    #[must_use]
    pub const fn entropy(&self) -> &Entropy {
        &self.entropy
    }

    /// Returns whether rendering under this configuration may vary between
    /// calls.
    #[must_use]
    pub const fn is_random(&self) -> bool {
        matches!(self.case, KeywordCase::Random) || self.case_evasion || self.comment_evasion
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SpaceSetting {
    Flag(bool),
    Text(String),
}

fn deserialize_space<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match SpaceSetting::deserialize(deserializer)? {
        SpaceSetting::Flag(true) => String::from(DEFAULT_SPACE),
        SpaceSetting::Flag(false) => String::from(COMMENT_SPACE),
        SpaceSetting::Text(text) => text,
    })
}

//! Token formatting.
//!
//! The [`Formatter`] turns primitives into SQL tokens under a [`Config`]. It
//! knows nothing about expression trees; the [`Emitter`](crate::Emitter)
//! walks trees and calls into it.

use std::fmt::Write as _;

use crate::ast::Literal;
use crate::config::{Config, KeywordCase, Parens};
use crate::evasion::{self, Evasion};

/// Keywords spelled with symbols.
const ALIASES: &[(&str, &str)] = &[
    ("all", "*"),
    ("eq", "="),
    ("neq", "!="),
    ("lt", "<"),
    ("le", "<="),
    ("gt", ">"),
    ("ge", ">="),
];

/// Values that know how to render themselves through a [`Formatter`].
pub trait Formattable {
    /// Renders the value.
    fn format(&self, formatter: &Formatter<'_>) -> String;
}

/// Encodes primitives into SQL tokens.
#[derive(Debug, Clone, Copy)]
pub struct Formatter<'a> {
    config: &'a Config,
}

impl<'a> Formatter<'a> {
    /// Creates a formatter for `config`.
    #[must_use]
    pub const fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &'a Config {
        self.config
    }

    /// Encodes a keyword.
    ///
    /// The alias table is consulted first (`all` → `*`), then the case
    /// policy, then the evasion policy. Multi-word keywords are encoded word
    /// by word and joined with the configured space.
    #[must_use]
    pub fn keyword(&self, name: &str) -> String {
        let name = ALIASES
            .iter()
            .find_map(|(alias, symbol)| (*alias == name).then_some(*symbol))
            .unwrap_or(name);

        if name.contains(char::is_whitespace) {
            let words: Vec<String> = name.split_whitespace().map(|w| self.word(w)).collect();
            self.join(&words)
        } else {
            self.word(name)
        }
    }

    fn word(&self, word: &str) -> String {
        let cased = match self.config.case() {
            KeywordCase::None => word.to_string(),
            KeywordCase::Lower => word.to_lowercase(),
            KeywordCase::Upper => word.to_uppercase(),
            KeywordCase::Random => evasion::random_case(word, self.config.entropy()),
        };

        let policy = Evasion {
            case: self.config.case_evasion(),
            comment: self.config.comment_evasion(),
        };
        policy.apply(&cased, self.config.entropy())
    }

    /// Encodes a NULL keyword.
    #[must_use]
    pub fn null(&self) -> String {
        self.keyword("null")
    }

    /// Encodes a boolean keyword.
    #[must_use]
    pub fn boolean(&self, value: bool) -> String {
        self.keyword(if value { "true" } else { "false" })
    }

    /// Encodes an integer.
    #[must_use]
    pub fn integer(&self, value: i64) -> String {
        value.to_string()
    }

    /// Encodes a float. Whole numbers keep a trailing `.0`; NaN and the
    /// infinities have no SQL literal and encode as NULL.
    #[must_use]
    pub fn float(&self, value: f64) -> String {
        if !value.is_finite() {
            return self.null();
        }
        let text = value.to_string();
        if !text.contains(['.', 'e', 'E']) {
            format!("{text}.0")
        } else {
            text
        }
    }

    /// Encodes a string literal.
    ///
    /// Under `hex_escape` the text becomes `HEX(0x...)`; otherwise it is
    /// wrapped in the configured quote with inner quotes doubled.
    #[must_use]
    pub fn string(&self, text: &str) -> String {
        if self.config.hex_escape() && !text.is_empty() {
            let mut hex = String::with_capacity(2 + text.len() * 2);
            hex.push_str("0x");
            for byte in text.bytes() {
                let _ = write!(hex, "{byte:02x}");
            }
            return format!("{}{}", self.keyword("HEX"), self.parens(&hex));
        }

        let quote = self.config.quote().as_char();
        let mut escaped = String::with_capacity(text.len() + 2);
        escaped.push(quote);
        for c in text.chars() {
            if c == quote {
                escaped.push(quote);
            }
            escaped.push(c);
        }
        escaped.push(quote);
        escaped
    }

    /// Wraps a value in parenthesis.
    #[must_use]
    pub fn parens(&self, value: &str) -> String {
        format!("({value})")
    }

    /// Joins tokens with the configured space.
    #[must_use]
    pub fn join<S: AsRef<str>>(&self, tokens: &[S]) -> String {
        let mut joined = String::new();
        for (i, token) in tokens.iter().enumerate() {
            if i > 0 {
                joined.push_str(self.config.space());
            }
            joined.push_str(token.as_ref());
        }
        joined
    }

    /// Comma-joins tokens into a list.
    ///
    /// Empty lists are always parenthesized. Under [`Parens::More`] every
    /// list is; under [`Parens::Less`] only singletons are.
    #[must_use]
    pub fn join_list<S: AsRef<str>>(&self, tokens: &[S]) -> String {
        let value = tokens
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(",");

        match self.config.parens() {
            Parens::Less if tokens.len() > 1 => value,
            _ => self.parens(&value),
        }
    }

    /// Encodes a list of values.
    #[must_use]
    pub fn list<T: Formattable>(&self, values: &[T]) -> String {
        let tokens: Vec<String> = values.iter().map(|v| v.format(self)).collect();
        self.join_list(&tokens)
    }

    /// Encodes `name=value` pairs as a list.
    #[must_use]
    pub fn map<T: Formattable>(&self, entries: &[(String, T)]) -> String {
        let tokens: Vec<String> = entries
            .iter()
            .map(|(name, value)| format!("{}={}", self.keyword(name), value.format(self)))
            .collect();
        self.join_list(&tokens)
    }

    /// Encodes a function call. Arguments are always parenthesized.
    #[must_use]
    pub fn function<S: AsRef<str>>(&self, name: &str, args: &[S]) -> String {
        let args = args
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<&str>>()
            .join(",");
        format!("{}{}", self.keyword(name), self.parens(&args))
    }

    /// Encodes a literal.
    #[must_use]
    pub fn format(&self, literal: &Literal) -> String {
        match literal {
            Literal::Null => self.null(),
            Literal::Boolean(b) => self.boolean(*b),
            Literal::Integer(i) => self.integer(*i),
            Literal::Float(f) => self.float(*f),
            Literal::Text(s) => self.string(s),
            Literal::Keyword(k) => self.keyword(k),
        }
    }

    /// Encodes several literals and joins them with the configured space.
    #[must_use]
    pub fn format_elements(&self, literals: &[Literal]) -> String {
        let tokens: Vec<String> = literals.iter().map(|l| self.format(l)).collect();
        self.join(&tokens)
    }
}

impl Formattable for Literal {
    fn format(&self, formatter: &Formatter<'_>) -> String {
        formatter.format(self)
    }
}

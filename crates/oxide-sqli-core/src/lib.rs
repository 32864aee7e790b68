//! # oxide-sqli-core
//!
//! Programmatic SQL construction and SQL-injection payload crafting for
//! security testing.
//!
//! This crate provides:
//! - An immutable expression/statement AST with fluent operator builders
//! - A configurable formatter and emitter (keyword case, quoting, hex
//!   escaping, parenthesis and separator preferences)
//! - Keyword evasion (random case flips, inline-comment insertion)
//! - [`Injection`] payloads that balance quotes against the host query or
//!   comment out its remainder
//!
//! ## Building SQL
//!
//! ```rust
//! use oxide_sqli_core::{col, Clauses, Config, Statement};
//!
//! let sql = Statement::select([col("id"), col("name")])
//!     .from_table("users")
//!     .where_(col("id").eq(1))
//!     .to_sql(&Config::default());
//!
//! assert_eq!(sql, "SELECT id,name FROM users WHERE id=1");
//! ```
//!
//! ## Crafting injections
//!
//! ```rust
//! use oxide_sqli_core::{Config, EscapeContext, Expr, Injection, InjectionOptions};
//!
//! let sqli = Injection::new(EscapeContext::Integer).or(Expr::int(1).eq(1));
//!
//! assert_eq!(
//!     sqli.to_sql(&Config::default(), InjectionOptions::terminated()),
//!     "1 OR 1=1;--"
//! );
//! ```
//!
//! ## Evading keyword filters
//!
//! ```rust
//! use oxide_sqli_core::{render, Config, Entropy, Expr};
//!
//! let config = Config::default()
//!     .with_comment_evasion(true)
//!     .with_entropy(Entropy::seeded(42));
//!
//! let sql = render(&Expr::int(1).or(Expr::int(1).eq(1)), &config);
//! assert!(sql.contains("/**/"));
//! assert_eq!(sql.replace("/**/", ""), "1 OR 1=1");
//! ```

pub mod ast;
pub mod config;
pub mod emitter;
pub mod error;
pub mod evasion;
pub mod formatter;
pub mod functions;
pub mod injection;
pub mod random;

pub use ast::{
    col, BinaryOp, Clause, Clauses, Expr, FunctionCall, Literal, PatternOp, Program, Statement,
    Statements, UnaryOp,
};
pub use config::{Config, KeywordCase, Parens, QuoteStyle};
pub use emitter::{render, Emitter};
pub use error::{ConfigError, Result};
pub use evasion::Evasion;
pub use formatter::{Formattable, Formatter};
pub use injection::{EscapeContext, Injection, InjectionOptions};
pub use random::Entropy;

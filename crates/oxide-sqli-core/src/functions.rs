//! SQL function helpers.
//!
//! Shorthands for the functions that come up when probing a database
//! through an injection. Each one is a plain [`Expr::function`] call; any
//! other function is available through that constructor directly.

use crate::ast::Expr;

macro_rules! unary_functions {
    ($($(#[$meta:meta])* $fn_name:ident => $sql:literal),* $(,)?) => {
        $(
            $(#[$meta])*
            #[must_use]
            pub fn $fn_name(arg: impl Into<Expr>) -> Expr {
                Expr::function($sql, [arg.into()])
            }
        )*
    };
}

macro_rules! nullary_functions {
    ($($(#[$meta:meta])* $fn_name:ident => $sql:literal),* $(,)?) => {
        $(
            $(#[$meta])*
            #[must_use]
            pub fn $fn_name() -> Expr {
                Expr::function($sql, Vec::<Expr>::new())
            }
        )*
    };
}

unary_functions! {
    /// `COUNT(expr)`
    count => "COUNT",
    /// `MAX(expr)`
    max => "MAX",
    /// `MIN(expr)`
    min => "MIN",
    /// `SUM(expr)`
    sum => "SUM",
    /// `AVG(expr)`
    avg => "AVG",
    /// `ASCII(expr)`
    ascii => "ASCII",
    /// `CHAR(expr)`
    char => "CHAR",
    /// `LENGTH(expr)`
    length => "LENGTH",
    /// `LOWER(expr)`
    lower => "LOWER",
    /// `UPPER(expr)`
    upper => "UPPER",
    /// `HEX(expr)`
    hex => "HEX",
    /// `UNHEX(expr)`
    unhex => "UNHEX",
    /// `MD5(expr)`
    md5 => "MD5",
    /// `SHA1(expr)`
    sha1 => "SHA1",
    /// `SLEEP(seconds)`
    sleep => "SLEEP",
    /// `LOAD_FILE(path)`
    load_file => "LOAD_FILE",
    /// `GROUP_CONCAT(expr)`
    group_concat => "GROUP_CONCAT",
}

nullary_functions! {
    /// `VERSION()`
    version => "VERSION",
    /// `DATABASE()`
    database => "DATABASE",
    /// `USER()`
    user => "USER",
    /// `RANDOM()`
    random => "RANDOM",
}

/// `COUNT(*)`
#[must_use]
pub fn count_all() -> Expr {
    count(Expr::keyword("all"))
}

/// `SUBSTR(expr,start,length)`
#[must_use]
pub fn substr(expr: impl Into<Expr>, start: i64, length: i64) -> Expr {
    Expr::function("SUBSTR", [expr.into(), Expr::int(start), Expr::int(length)])
}

/// `CONCAT(args...)`
#[must_use]
pub fn concat<I>(args: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Expr>,
{
    Expr::function("CONCAT", args)
}

/// `BENCHMARK(count,expr)`
#[must_use]
pub fn benchmark(count: i64, expr: impl Into<Expr>) -> Expr {
    Expr::function("BENCHMARK", [Expr::int(count), expr.into()])
}

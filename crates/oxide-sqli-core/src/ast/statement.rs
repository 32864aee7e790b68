//! Clauses, statements and programs.
//!
//! A [`Clause`] is a keyword followed by operands (`LIMIT 100`), a
//! [`Statement`] is a leading keyword, its operands and an ordered list of
//! clauses (`SELECT id FROM users WHERE id=1`), and a [`Program`] is an
//! ordered list of statements joined with `"; "`.
//!
//! The [`Clauses`] and [`Statements`] traits provide the fluent helpers
//! shared by statements, programs and injections.

use super::expression::Expr;
use crate::config::Config;
use crate::emitter::Emitter;

/// A keyword-prefixed operand group.
#[derive(Debug, Clone, PartialEq)]
pub struct Clause {
    keyword: String,
    operands: Vec<Expr>,
}

impl Clause {
    /// Creates a clause.
    #[must_use]
    pub fn new<I>(keyword: impl Into<String>, operands: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        Self {
            keyword: keyword.into(),
            operands: operands.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a clause with no operands.
    #[must_use]
    pub fn bare(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            operands: vec![],
        }
    }

    /// Returns the clause keyword.
    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Returns the clause operands.
    #[must_use]
    pub fn operands(&self) -> &[Expr] {
        &self.operands
    }
}

/// A SQL statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    keyword: String,
    operands: Vec<Expr>,
    clauses: Vec<Clause>,
}

impl Statement {
    /// Creates an arbitrary statement.
    #[must_use]
    pub fn new<I>(keyword: impl Into<String>, operands: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        Self {
            keyword: keyword.into(),
            operands: operands.into_iter().map(Into::into).collect(),
            clauses: vec![],
        }
    }

    /// Creates a statement with no operands.
    #[must_use]
    pub fn bare(keyword: impl Into<String>) -> Self {
        Self::new(keyword, Vec::<Expr>::new())
    }

    /// `SELECT <columns>`
    #[must_use]
    pub fn select<I>(columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        Self::new("SELECT", columns)
    }

    /// `INSERT`, to be followed by [`Clauses::into_table`] and
    /// [`Clauses::values`].
    #[must_use]
    pub fn insert() -> Self {
        Self::bare("INSERT")
    }

    /// `UPDATE <table>`
    #[must_use]
    pub fn update(table: &str) -> Self {
        Self::new("UPDATE", [Expr::ident(table)])
    }

    /// `DELETE FROM <table>`
    #[must_use]
    pub fn delete(table: &str) -> Self {
        Self::new("DELETE FROM", [Expr::ident(table)])
    }

    /// `DROP TABLE <table>`
    #[must_use]
    pub fn drop_table(table: &str) -> Self {
        Self::new("DROP TABLE", [Expr::ident(table)])
    }

    /// Returns the statement keyword.
    #[must_use]
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// Returns the statement operands.
    #[must_use]
    pub fn operands(&self) -> &[Expr] {
        &self.operands
    }

    /// Renders the statement.
    #[must_use]
    pub fn to_sql(&self, config: &Config) -> String {
        Emitter::new(config).emit_statement(self)
    }
}

/// An ordered, append-only sequence of statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    statements: Vec<Statement>,
}

impl Program {
    /// Creates an empty program.
    #[must_use]
    pub const fn new() -> Self {
        Self { statements: vec![] }
    }

    /// Appends a statement in place.
    pub fn push(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    /// Returns whether the program has no statements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Renders the program, statements separated by `"; "`.
    #[must_use]
    pub fn to_sql(&self, config: &Config) -> String {
        Emitter::new(config).emit_program(&self.statements)
    }
}

/// Fluent clause helpers.
///
/// Every helper appends one clause and hands the receiver back.
pub trait Clauses: Sized {
    /// Returns the clauses appended so far.
    fn clauses(&self) -> &[Clause];

    /// Returns the clause list for appending.
    fn clauses_mut(&mut self) -> &mut Vec<Clause>;

    /// Appends an arbitrary clause.
    #[must_use]
    fn clause(mut self, clause: Clause) -> Self {
        self.clauses_mut().push(clause);
        self
    }

    /// `FROM <table>`
    #[must_use]
    fn from(self, table: impl Into<Expr>) -> Self {
        self.clause(Clause::new("FROM", [table]))
    }

    /// `FROM <table>` for a table name.
    #[must_use]
    fn from_table(self, table: &str) -> Self {
        self.from(Expr::ident(table))
    }

    /// `INTO <table>`
    #[must_use]
    fn into_table(self, table: &str) -> Self {
        self.clause(Clause::new("INTO", [Expr::ident(table)]))
    }

    /// `WHERE <condition>`
    #[must_use]
    fn where_(self, condition: impl Into<Expr>) -> Self {
        self.clause(Clause::new("WHERE", [condition]))
    }

    /// `VALUES <values>`
    #[must_use]
    fn values<I>(self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        self.clause(Clause::new("VALUES", [Expr::list(values)]))
    }

    /// `DEFAULT VALUES`
    #[must_use]
    fn default_values(self) -> Self {
        self.clause(Clause::bare("DEFAULT VALUES"))
    }

    /// `SET name=value,...`
    #[must_use]
    fn set<I, K, V>(self, assignments: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Expr>,
    {
        let operands: Vec<Expr> = assignments
            .into_iter()
            .map(|(name, value)| Expr::ident(name).eq(value))
            .collect();
        self.clause(Clause::new("SET", operands))
    }

    /// `GROUP BY <columns>`
    #[must_use]
    fn group_by<I>(self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        self.clause(Clause::new("GROUP BY", columns))
    }

    /// `HAVING <condition>`
    #[must_use]
    fn having(self, condition: impl Into<Expr>) -> Self {
        self.clause(Clause::new("HAVING", [condition]))
    }

    /// `ORDER BY <columns>`
    #[must_use]
    fn order_by<I>(self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        self.clause(Clause::new("ORDER BY", columns))
    }

    /// `LIMIT <count>`
    #[must_use]
    fn limit(self, count: impl Into<Expr>) -> Self {
        self.clause(Clause::new("LIMIT", [count]))
    }

    /// `OFFSET <count>`
    #[must_use]
    fn offset(self, count: impl Into<Expr>) -> Self {
        self.clause(Clause::new("OFFSET", [count]))
    }

    /// `TOP <count>`
    #[must_use]
    fn top(self, count: impl Into<Expr>) -> Self {
        self.clause(Clause::new("TOP", [count]))
    }

    /// `UNION <statement>`
    #[must_use]
    fn union(self, statement: Statement) -> Self {
        self.clause(Clause::new("UNION", [statement]))
    }

    /// `UNION ALL <statement>`
    #[must_use]
    fn union_all(self, statement: Statement) -> Self {
        self.clause(Clause::new("UNION ALL", [statement]))
    }

    /// `INTERSECT <statement>`
    #[must_use]
    fn intersect(self, statement: Statement) -> Self {
        self.clause(Clause::new("INTERSECT", [statement]))
    }

    /// `EXCEPT <statement>`
    #[must_use]
    fn except(self, statement: Statement) -> Self {
        self.clause(Clause::new("EXCEPT", [statement]))
    }

    /// `JOIN <table>`
    #[must_use]
    fn join(self, table: &str) -> Self {
        self.clause(Clause::new("JOIN", [Expr::ident(table)]))
    }

    /// `INNER JOIN <table>`
    #[must_use]
    fn inner_join(self, table: &str) -> Self {
        self.clause(Clause::new("INNER JOIN", [Expr::ident(table)]))
    }

    /// `LEFT JOIN <table>`
    #[must_use]
    fn left_join(self, table: &str) -> Self {
        self.clause(Clause::new("LEFT JOIN", [Expr::ident(table)]))
    }

    /// `RIGHT JOIN <table>`
    #[must_use]
    fn right_join(self, table: &str) -> Self {
        self.clause(Clause::new("RIGHT JOIN", [Expr::ident(table)]))
    }

    /// `FULL JOIN <table>`
    #[must_use]
    fn full_join(self, table: &str) -> Self {
        self.clause(Clause::new("FULL JOIN", [Expr::ident(table)]))
    }

    /// `CROSS JOIN <table>`
    #[must_use]
    fn cross_join(self, table: &str) -> Self {
        self.clause(Clause::new("CROSS JOIN", [Expr::ident(table)]))
    }

    /// `ON <condition>`
    #[must_use]
    fn on(self, condition: impl Into<Expr>) -> Self {
        self.clause(Clause::new("ON", [condition]))
    }

    /// `INDEXED BY <index>`
    #[must_use]
    fn indexed_by(self, index: &str) -> Self {
        self.clause(Clause::new("INDEXED BY", [Expr::ident(index)]))
    }

    /// `NOT INDEXED`
    #[must_use]
    fn not_indexed(self) -> Self {
        self.clause(Clause::bare("NOT INDEXED"))
    }
}

impl Clauses for Statement {
    fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    fn clauses_mut(&mut self) -> &mut Vec<Clause> {
        &mut self.clauses
    }
}

/// Fluent statement helpers.
///
/// Every helper appends one statement and hands the receiver back.
pub trait Statements: Sized {
    /// Returns the statements appended so far.
    fn statements(&self) -> &[Statement];

    /// Returns the statement list for appending.
    fn statements_mut(&mut self) -> &mut Vec<Statement>;

    /// Appends a statement.
    #[must_use]
    fn statement(mut self, statement: Statement) -> Self {
        self.statements_mut().push(statement);
        self
    }

    /// Appends `SELECT <columns>`.
    #[must_use]
    fn select<I>(self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Expr>,
    {
        self.statement(Statement::select(columns))
    }

    /// Appends `DELETE FROM <table>`.
    #[must_use]
    fn delete(self, table: &str) -> Self {
        self.statement(Statement::delete(table))
    }

    /// Appends `DROP TABLE <table>`.
    #[must_use]
    fn drop_table(self, table: &str) -> Self {
        self.statement(Statement::drop_table(table))
    }
}

impl Statements for Program {
    fn statements(&self) -> &[Statement] {
        &self.statements
    }

    fn statements_mut(&mut self) -> &mut Vec<Statement> {
        &mut self.statements
    }
}

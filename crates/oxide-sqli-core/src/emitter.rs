//! SQL emission.
//!
//! The [`Emitter`] walks expression trees, clauses and statements and drives
//! a [`Formatter`] to produce SQL text.

use crate::ast::{BinaryOp, Clause, Clauses, Expr, PatternOp, Statement, UnaryOp};
use crate::config::Config;
use crate::formatter::{Formattable, Formatter};

/// Which side of a binary operator an operand sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

/// Renders trees into SQL.
#[derive(Debug, Clone, Copy)]
pub struct Emitter<'a> {
    formatter: Formatter<'a>,
}

impl<'a> Emitter<'a> {
    /// Creates an emitter for `config`.
    #[must_use]
    pub const fn new(config: &'a Config) -> Self {
        Self {
            formatter: Formatter::new(config),
        }
    }

    /// Creates an emitter around an existing formatter.
    #[must_use]
    pub const fn with_formatter(formatter: Formatter<'a>) -> Self {
        Self { formatter }
    }

    /// Returns the underlying formatter.
    #[must_use]
    pub const fn formatter(&self) -> &Formatter<'a> {
        &self.formatter
    }

    /// Renders an expression.
    #[must_use]
    pub fn emit(&self, expr: &Expr) -> String {
        let f = &self.formatter;
        match expr {
            Expr::Literal(literal) => f.format(literal),
            Expr::Identifier(name) => self.emit_identifier(name),
            Expr::List(items) => f.list(items),
            Expr::Map(entries) => f.map(entries),
            Expr::Function(call) => {
                let args: Vec<String> = call.args.iter().map(|a| self.emit(a)).collect();
                f.function(&call.name, &args)
            }
            Expr::Unary { op, operand } => self.emit_unary(*op, operand),
            Expr::Binary { left, op, right } => {
                let left = self.emit_operand(left, op.precedence(), Side::Left);
                self.emit_binary(left, *op, right)
            }
            Expr::Pattern {
                op,
                left,
                pattern,
                escape,
            } => self.emit_pattern(*op, left, pattern, escape.as_deref()),
            Expr::Paren(inner) => f.parens(&self.emit(inner)),
            Expr::Statement(statement) => self.emit_statement(statement),
            Expr::Raw(sql) => sql.clone(),
        }
    }

    /// Dotted identifiers are encoded segment by segment.
    fn emit_identifier(&self, name: &str) -> String {
        name.split('.')
            .map(|segment| self.formatter.keyword(segment))
            .collect::<Vec<String>>()
            .join(".")
    }

    /// Renders an operator. Word operators go through the keyword policy;
    /// symbolic ones are emitted as-is.
    fn emit_operator(&self, op: &str, symbolic: bool) -> String {
        if symbolic {
            op.to_string()
        } else {
            self.formatter.keyword(op)
        }
    }

    /// Renders an operand of an operator with precedence `parent`.
    ///
    /// Only operator nodes binding looser than the parent are wrapped (on
    /// the right side, equal precedence is wrapped too, preserving the tree
    /// shape). Literals, identifiers and calls are never wrapped.
    fn emit_operand(&self, operand: &Expr, parent: u8, side: Side) -> String {
        let sql = self.emit(operand);
        let wrap = operand.precedence().is_some_and(|p| match side {
            Side::Left => p < parent,
            Side::Right => p <= parent,
        });
        if wrap {
            self.formatter.parens(&sql)
        } else {
            sql
        }
    }

    /// Renders `left op right` from an already-rendered left side.
    pub(crate) fn emit_binary(&self, left: String, op: BinaryOp, right: &Expr) -> String {
        let right = match (op, right) {
            (BinaryOp::In, Expr::List(items)) => {
                let items: Vec<String> = items.iter().map(|i| self.emit(i)).collect();
                self.formatter.parens(&items.join(","))
            }
            _ => self.emit_operand(right, op.precedence(), Side::Right),
        };

        if op.is_symbolic() {
            let right = self.separate(op.as_str(), right);
            format!("{left}{}{right}", op.as_str())
        } else {
            let op = self.emit_operator(op.as_str(), false);
            self.formatter.join(&[left, op, right])
        }
    }

    fn emit_unary(&self, op: UnaryOp, operand: &Expr) -> String {
        let operand_sql = self.emit(operand);
        let operand_sql = if operand.precedence().is_some_and(|p| p < op.precedence()) {
            self.formatter.parens(&operand_sql)
        } else {
            operand_sql
        };

        let op_sql = self.emit_operator(op.as_str(), op.is_symbolic());
        if op.is_symbolic() {
            let operand_sql = self.separate(&op_sql, operand_sql);
            format!("{op_sql}{operand_sql}")
        } else {
            self.formatter.join(&[op_sql, operand_sql])
        }
    }

    /// Parenthesizes an operand glued to a symbolic operator when the pair
    /// would otherwise read as a `--` line comment (`a-(-1)`).
    fn separate(&self, op: &str, operand: String) -> String {
        if op.ends_with('-') && operand.starts_with('-') {
            self.formatter.parens(&operand)
        } else {
            operand
        }
    }

    fn emit_pattern(
        &self,
        op: PatternOp,
        left: &Expr,
        pattern: &Expr,
        escape: Option<&Expr>,
    ) -> String {
        let mut tokens = vec![
            self.emit_operand(left, op.precedence(), Side::Left),
            self.emit_operator(op.as_str(), false),
            self.emit_operand(pattern, op.precedence(), Side::Right),
        ];
        if let Some(escape) = escape {
            tokens.push(self.formatter.keyword("ESCAPE"));
            tokens.push(self.emit_operand(escape, op.precedence(), Side::Right));
        }
        self.formatter.join(&tokens)
    }

    /// Comma-joins clause or statement operands.
    fn emit_operands(&self, operands: &[Expr]) -> String {
        operands
            .iter()
            .map(|operand| self.emit(operand))
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Renders `KEYWORD operands`, or the bare keyword without operands.
    #[must_use]
    pub fn emit_clause(&self, clause: &Clause) -> String {
        self.emit_keyword_with_operands(clause.keyword(), clause.operands())
    }

    /// Renders clauses separated by the configured space.
    #[must_use]
    pub fn emit_clauses(&self, clauses: &[Clause]) -> String {
        let rendered: Vec<String> = clauses.iter().map(|c| self.emit_clause(c)).collect();
        self.formatter.join(&rendered)
    }

    /// Renders a statement: keyword, operands, then its clauses.
    #[must_use]
    pub fn emit_statement(&self, statement: &Statement) -> String {
        let head = self.emit_keyword_with_operands(statement.keyword(), statement.operands());
        if statement.clauses().is_empty() {
            head
        } else {
            self.formatter
                .join(&[head, self.emit_clauses(statement.clauses())])
        }
    }

    /// Renders statements separated by `"; "`.
    #[must_use]
    pub fn emit_program(&self, statements: &[Statement]) -> String {
        statements
            .iter()
            .map(|s| self.emit_statement(s))
            .collect::<Vec<String>>()
            .join("; ")
    }

    fn emit_keyword_with_operands(&self, keyword: &str, operands: &[Expr]) -> String {
        let keyword = self.formatter.keyword(keyword);
        if operands.is_empty() {
            keyword
        } else {
            self.formatter.join(&[keyword, self.emit_operands(operands)])
        }
    }
}

impl Formattable for Expr {
    fn format(&self, formatter: &Formatter<'_>) -> String {
        Emitter::with_formatter(*formatter).emit(self)
    }
}

/// Renders an expression under `config`.
#[must_use]
pub fn render(expr: &Expr, config: &Config) -> String {
    Emitter::new(config).emit(expr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::col;
    use crate::config::{KeywordCase, Parens};

    fn sql(expr: &Expr) -> String {
        render(expr, &Config::default())
    }

    #[test]
    fn test_symbolic_operators_are_glued() {
        assert_eq!(sql(&Expr::int(1).eq(1)), "1=1");
        assert_eq!(sql(&col("a").different(col("b"))), "a<>b");
        assert_eq!(sql(&col("price").mul(2)), "price*2");
    }

    #[test]
    fn test_word_operators_use_space() {
        assert_eq!(sql(&col("name").is_null()), "name IS null");
        assert_eq!(sql(&col("name").not_null()), "name IS NOT null");
        let config = Config::default().with_comment_spaces();
        assert_eq!(
            render(&Expr::int(1).or(Expr::int(1).eq(1)), &config),
            "1/**/OR/**/1=1"
        );
    }

    #[test]
    fn test_precedence_parenthesization() {
        let expr = col("a").eq(1).or(col("b").eq(2)).and(col("c").eq(3));
        assert_eq!(sql(&expr), "(a=1 OR b=2) AND c=3");

        let expr = col("a").eq(1).and(col("b").eq(2)).or(col("c").eq(3));
        assert_eq!(sql(&expr), "a=1 AND b=2 OR c=3");

        let expr = col("x").sub(col("y").sub(1));
        assert_eq!(sql(&expr), "x-(y-1)");
    }

    #[test]
    fn test_in_list_always_parenthesized() {
        let config = Config::default().with_parens(Parens::Less);
        let expr = col("id").in_list([1, 2, 3]);
        assert_eq!(render(&expr, &config), "id IN (1,2,3)");
        assert_eq!(sql(&col("id").not_in([1, 2])), "NOT id IN (1,2)");
    }

    #[test]
    fn test_unary() {
        assert_eq!(sql(&col("a").or(col("b")).not()), "NOT (a OR b)");
        assert_eq!(sql(&col("a").add(1).neg()), "-(a+1)");
        let exists = Expr::subquery(Statement::select([1])).exists();
        assert_eq!(sql(&exists), "EXISTS (SELECT 1)");
    }

    #[test]
    fn test_minus_never_forms_line_comment() {
        assert_eq!(sql(&col("a").sub(-1)), "a-(-1)");
        assert_eq!(sql(&Expr::int(-1).neg()), "-(-1)");
        assert_eq!(sql(&Expr::int(5).sub(Expr::int(3).neg())), "5-(-3)");
        assert_eq!(sql(&col("a").add(-1)), "a+-1");
    }

    #[test]
    fn test_patterns() {
        assert_eq!(sql(&col("name").like("a%")), "name LIKE 'a%'");
        assert_eq!(
            sql(&col("name").like_escape("a\\%", "\\")),
            "name LIKE 'a\\%' ESCAPE '\\'"
        );
        assert_eq!(sql(&col("path").glob("*.rs")), "path GLOB '*.rs'");
    }

    #[test]
    fn test_functions() {
        let expr = Expr::function("ascii", [Expr::function("substr", [col("name"), 1.into(), 1.into()])]);
        assert_eq!(sql(&expr), "ascii(substr(name,1,1))");
    }

    #[test]
    fn test_identifiers_follow_case() {
        let config = Config::default().with_case(KeywordCase::Upper);
        assert_eq!(render(&col("users.id"), &config), "USERS.ID");
    }

    #[test]
    fn test_lists_and_maps() {
        assert_eq!(sql(&Expr::list([1, 2, 3])), "(1,2,3)");
        assert_eq!(sql(&Expr::list(Vec::<Expr>::new())), "()");
        assert_eq!(sql(&Expr::map([("count", 5)])), "(count=5)");
    }

    #[test]
    fn test_clauses() {
        let e = |c: &Clause| Emitter::new(&Config::default()).emit_clause(c);
        assert_eq!(e(&Clause::new("LIMIT", [100])), "LIMIT 100");
        assert_eq!(e(&Clause::bare("DEFAULT VALUES")), "DEFAULT VALUES");
    }

    #[test]
    fn test_raw_passthrough() {
        assert_eq!(sql(&Expr::raw("@@version")), "@@version");
    }
}

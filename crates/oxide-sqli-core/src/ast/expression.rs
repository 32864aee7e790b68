//! Expression AST types.
//!
//! Nodes are immutable. Operators consume their receiver and return a new
//! node that shares its operands through reference counting, so cloning an
//! expression is shallow and never copies a subtree.

use std::rc::Rc;

use super::statement::Statement;

/// A literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    /// NULL literal.
    Null,
    /// Boolean literal.
    Boolean(bool),
    /// Integer literal.
    Integer(i64),
    /// Float literal.
    Float(f64),
    /// String literal.
    Text(String),
    /// A bare keyword, rendered through the keyword policy (e.g. `all` → `*`).
    Keyword(String),
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    // Comparison
    Eq,
    NotEq,
    Different,
    NullSafeEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Is,
    IsNot,
    In,

    // Logical
    And,
    Or,

    // Naming and conversion
    As,
    Cast,

    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,

    // String
    Concat,

    // Bitwise
    BitAnd,
    BitOr,
    LeftShift,
    RightShift,
}

impl BinaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Different => "<>",
            Self::NullSafeEq => "<=>",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Is => "IS",
            Self::IsNot => "IS NOT",
            Self::In => "IN",
            Self::And => "AND",
            Self::Or => "OR",
            Self::As => "AS",
            Self::Cast => "CAST",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Concat => "||",
            Self::BitAnd => "&",
            Self::BitOr => "|",
            Self::LeftShift => "<<",
            Self::RightShift => ">>",
        }
    }

    /// Returns the precedence of the operator (higher = binds tighter).
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::As | Self::Cast => 0,
            Self::Or => 1,
            Self::And => 2,
            Self::Eq
            | Self::NotEq
            | Self::Different
            | Self::NullSafeEq
            | Self::Is
            | Self::IsNot
            | Self::In => 4,
            Self::Lt | Self::LtEq | Self::Gt | Self::GtEq => 5,
            Self::BitAnd | Self::BitOr | Self::LeftShift | Self::RightShift => 6,
            Self::Add | Self::Sub => 7,
            Self::Mul | Self::Div | Self::Mod => 8,
            Self::Concat => 9,
        }
    }

    /// Returns whether the operator is spelled with symbols rather than
    /// words. Symbolic operators are glued to their operands (`1=1`).
    #[must_use]
    pub fn is_symbolic(&self) -> bool {
        !self.as_str().starts_with(|c: char| c.is_ascii_alphabetic())
    }
}

/// Pattern-matching operators, which take an optional `ESCAPE` operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternOp {
    Like,
    Glob,
    Regexp,
    Match,
}

impl PatternOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "LIKE",
            Self::Glob => "GLOB",
            Self::Regexp => "REGEXP",
            Self::Match => "MATCH",
        }
    }

    /// Pattern operators bind like equality.
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        4
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// Logical NOT
    Not,
    /// EXISTS
    Exists,
    /// Negation (-)
    Neg,
    /// Identity (+)
    Pos,
    /// Bitwise NOT (~)
    BitNot,
}

impl UnaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Not => "NOT",
            Self::Exists => "EXISTS",
            Self::Neg => "-",
            Self::Pos => "+",
            Self::BitNot => "~",
        }
    }

    /// Returns the precedence of the operator (higher = binds tighter).
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Not => 3,
            Self::Exists | Self::Neg | Self::Pos | Self::BitNot => 10,
        }
    }

    /// Returns whether the operator is spelled with symbols.
    #[must_use]
    pub const fn is_symbolic(&self) -> bool {
        matches!(self, Self::Neg | Self::Pos | Self::BitNot)
    }
}

/// A function call expression.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionCall {
    /// The function name.
    pub name: String,
    /// The arguments.
    pub args: Vec<Expr>,
}

/// An SQL expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A column, table or alias name, optionally dotted (`users.id`).
    Identifier(String),

    /// An ordered list of expressions.
    List(Vec<Expr>),

    /// `name=value` pairs.
    Map(Vec<(String, Expr)>),

    /// A function call.
    Function(FunctionCall),

    /// A unary expression.
    Unary {
        /// Operator.
        op: UnaryOp,
        /// Operand.
        operand: Rc<Expr>,
    },

    /// A binary expression.
    Binary {
        /// Left operand.
        left: Rc<Expr>,
        /// Operator.
        op: BinaryOp,
        /// Right operand.
        right: Rc<Expr>,
    },

    /// A pattern match (`LIKE`, `GLOB`, ...).
    Pattern {
        /// Operator.
        op: PatternOp,
        /// The matched expression.
        left: Rc<Expr>,
        /// The pattern.
        pattern: Rc<Expr>,
        /// The escape character (optional).
        escape: Option<Rc<Expr>>,
    },

    /// Parenthesized expression.
    Paren(Rc<Expr>),

    /// An embedded statement, rendered bare (see [`Expr::subquery`]).
    Statement(Rc<Statement>),

    /// Pre-rendered SQL, emitted verbatim.
    Raw(String),
}

/// Creates an identifier reference.
#[must_use]
pub fn col(name: &str) -> Expr {
    Expr::ident(name)
}

#[allow(clippy::should_implement_trait)]
impl Expr {
    /// Creates a NULL literal.
    #[must_use]
    pub const fn null() -> Self {
        Self::Literal(Literal::Null)
    }

    /// Creates a new boolean literal.
    #[must_use]
    pub const fn boolean(value: bool) -> Self {
        Self::Literal(Literal::Boolean(value))
    }

    /// Creates a new integer literal.
    #[must_use]
    pub const fn int(value: i64) -> Self {
        Self::Literal(Literal::Integer(value))
    }

    /// Creates a new float literal.
    #[must_use]
    pub const fn float(value: f64) -> Self {
        Self::Literal(Literal::Float(value))
    }

    /// Creates a new string literal.
    ///
    /// Accepts anything printable, so `Expr::string(1)` is the text `'1'`.
    #[must_use]
    pub fn string(value: impl ToString) -> Self {
        Self::Literal(Literal::Text(value.to_string()))
    }

    /// Creates a keyword literal.
    #[must_use]
    pub fn keyword(name: impl Into<String>) -> Self {
        Self::Literal(Literal::Keyword(name.into()))
    }

    /// Creates an identifier reference.
    #[must_use]
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Identifier(name.into())
    }

    /// Creates a list of expressions.
    #[must_use]
    pub fn list<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Creates a `name=value` map.
    #[must_use]
    pub fn map<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Self>,
    {
        Self::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Creates a function call.
    #[must_use]
    pub fn function<I>(name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        Self::Function(FunctionCall {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        })
    }

    /// Creates a raw SQL fragment.
    ///
    /// **Warning**: the text is emitted verbatim, untouched by the keyword
    /// and quoting policies.
    #[must_use]
    pub fn raw(sql: impl Into<String>) -> Self {
        Self::Raw(sql.into())
    }

    /// Wraps a statement in parenthesis, for use as a sub-query.
    #[must_use]
    pub fn subquery(statement: Statement) -> Self {
        Self::Statement(Rc::new(statement)).paren()
    }

    /// Wraps the expression in parenthesis.
    #[must_use]
    pub fn paren(self) -> Self {
        Self::Paren(Rc::new(self))
    }

    /// Creates a binary expression.
    #[must_use]
    pub fn binary(self, op: BinaryOp, right: impl Into<Self>) -> Self {
        Self::Binary {
            left: Rc::new(self),
            op,
            right: Rc::new(right.into()),
        }
    }

    /// Creates a pattern-matching expression.
    #[must_use]
    pub fn pattern(self, op: PatternOp, pattern: impl Into<Self>, escape: Option<Self>) -> Self {
        Self::Pattern {
            op,
            left: Rc::new(self),
            pattern: Rc::new(pattern.into()),
            escape: escape.map(Rc::new),
        }
    }

    /// Creates a unary expression.
    #[must_use]
    pub fn unary(self, op: UnaryOp) -> Self {
        Self::Unary {
            op,
            operand: Rc::new(self),
        }
    }

    /// Creates an equality (`=`) expression.
    #[must_use]
    pub fn eq(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Eq, right)
    }

    /// Creates an inequality (`!=`) expression.
    #[must_use]
    pub fn not_eq(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::NotEq, right)
    }

    /// Creates an inequality (`<>`) expression.
    #[must_use]
    pub fn different(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Different, right)
    }

    /// Creates a NULL-safe equality (`<=>`) expression.
    #[must_use]
    pub fn null_safe_eq(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::NullSafeEq, right)
    }

    /// Creates a greater-than expression.
    #[must_use]
    pub fn gt(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Gt, right)
    }

    /// Creates a greater-than-or-equal expression.
    #[must_use]
    pub fn gt_eq(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::GtEq, right)
    }

    /// Creates a less-than expression.
    #[must_use]
    pub fn lt(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Lt, right)
    }

    /// Creates a less-than-or-equal expression.
    #[must_use]
    pub fn lt_eq(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::LtEq, right)
    }

    /// Creates an `IS` expression.
    #[must_use]
    pub fn is(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Is, right)
    }

    /// Creates an `IS NOT` expression.
    #[must_use]
    pub fn is_not(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::IsNot, right)
    }

    /// Creates an `IS null` expression.
    #[must_use]
    pub fn is_null(self) -> Self {
        self.is(Self::null())
    }

    /// Creates an `IS NOT null` expression.
    #[must_use]
    pub fn not_null(self) -> Self {
        self.is_not(Self::null())
    }

    /// Creates an `AS` expression.
    #[must_use]
    pub fn alias(self, name: impl Into<String>) -> Self {
        self.binary(BinaryOp::As, Self::ident(name))
    }

    /// Creates a `CAST` expression.
    #[must_use]
    pub fn cast(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Cast, right)
    }

    /// Creates an AND expression.
    #[must_use]
    pub fn and(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::And, right)
    }

    /// Creates an OR expression.
    #[must_use]
    pub fn or(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Or, right)
    }

    /// Creates an addition.
    #[must_use]
    pub fn add(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Add, right)
    }

    /// Creates a subtraction.
    #[must_use]
    pub fn sub(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Sub, right)
    }

    /// Creates a multiplication.
    #[must_use]
    pub fn mul(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Mul, right)
    }

    /// Creates a division.
    #[must_use]
    pub fn div(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Div, right)
    }

    /// Creates a modulo.
    #[must_use]
    pub fn rem(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Mod, right)
    }

    /// Creates a string concatenation (`||`).
    #[must_use]
    pub fn concat(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::Concat, right)
    }

    /// Creates a bitwise AND.
    #[must_use]
    pub fn bit_and(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::BitAnd, right)
    }

    /// Creates a bitwise OR.
    #[must_use]
    pub fn bit_or(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::BitOr, right)
    }

    /// Creates a left shift.
    #[must_use]
    pub fn shl(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::LeftShift, right)
    }

    /// Creates a right shift.
    #[must_use]
    pub fn shr(self, right: impl Into<Self>) -> Self {
        self.binary(BinaryOp::RightShift, right)
    }

    /// Creates an `IN (...)` expression.
    #[must_use]
    pub fn in_list<I>(self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        self.binary(BinaryOp::In, Self::list(values))
    }

    /// Creates an `IN (SELECT ...)` expression.
    #[must_use]
    pub fn in_select(self, statement: Statement) -> Self {
        self.binary(BinaryOp::In, Self::subquery(statement))
    }

    /// Creates a negated `IN (...)` expression.
    #[must_use]
    pub fn not_in<I>(self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        self.in_list(values).not()
    }

    /// Creates a LIKE expression.
    #[must_use]
    pub fn like(self, pattern: impl Into<Self>) -> Self {
        self.pattern(PatternOp::Like, pattern, None)
    }

    /// Creates a LIKE expression with an ESCAPE character.
    #[must_use]
    pub fn like_escape(self, pattern: impl Into<Self>, escape: impl Into<Self>) -> Self {
        self.pattern(PatternOp::Like, pattern, Some(escape.into()))
    }

    /// Creates a GLOB expression.
    #[must_use]
    pub fn glob(self, pattern: impl Into<Self>) -> Self {
        self.pattern(PatternOp::Glob, pattern, None)
    }

    /// Creates a REGEXP expression.
    #[must_use]
    pub fn regexp(self, pattern: impl Into<Self>) -> Self {
        self.pattern(PatternOp::Regexp, pattern, None)
    }

    /// Creates a MATCH expression.
    #[must_use]
    pub fn matches(self, pattern: impl Into<Self>) -> Self {
        self.pattern(PatternOp::Match, pattern, None)
    }

    /// Negates the expression with NOT.
    #[must_use]
    pub fn not(self) -> Self {
        self.unary(UnaryOp::Not)
    }

    /// Creates an EXISTS expression.
    #[must_use]
    pub fn exists(self) -> Self {
        self.unary(UnaryOp::Exists)
    }

    /// Arithmetic negation.
    #[must_use]
    pub fn neg(self) -> Self {
        self.unary(UnaryOp::Neg)
    }

    /// Bitwise NOT.
    #[must_use]
    pub fn bit_not(self) -> Self {
        self.unary(UnaryOp::BitNot)
    }

    /// Returns the precedence of the node's top-level operator, if any.
    #[must_use]
    pub const fn precedence(&self) -> Option<u8> {
        match self {
            Self::Binary { op, .. } => Some(op.precedence()),
            Self::Pattern { op, .. } => Some(op.precedence()),
            Self::Unary { op, .. } => Some(op.precedence()),
            _ => None,
        }
    }
}

impl From<Literal> for Expr {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

impl From<Statement> for Expr {
    fn from(statement: Statement) -> Self {
        Self::Statement(Rc::new(statement))
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Self::boolean(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Expr {
                fn from(value: $ty) -> Self {
                    Self::int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::float(value)
    }
}

impl From<f32> for Expr {
    fn from(value: f32) -> Self {
        Self::float(f64::from(value))
    }
}

impl From<&str> for Expr {
    fn from(value: &str) -> Self {
        Self::string(value)
    }
}

impl From<String> for Expr {
    fn from(value: String) -> Self {
        Self::Literal(Literal::Text(value))
    }
}

impl<T: Into<Self>> From<Option<T>> for Expr {
    fn from(value: Option<T>) -> Self {
        value.map_or_else(Self::null, Into::into)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Expr {
    fn from(values: Vec<T>) -> Self {
        Self::list(values)
    }
}

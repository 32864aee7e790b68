//! Keyword evasion through the full rendering pipeline.

mod common;
use common::*;

use oxide_sqli_core::config::COMMENT_SPACE;
use oxide_sqli_core::{
    col, Clauses, EscapeContext, Injection, InjectionOptions, KeywordCase, Statement,
};

#[test]
fn comment_evasion_splits_two_letter_keyword() {
    let config = seeded(1).with_comment_evasion(true);
    let payload = Injection::new(EscapeContext::Integer).or(tautology());
    assert_eq!(
        payload.to_sql(&config, InjectionOptions::terminated()),
        "1 O/**/R 1=1;--"
    );
}

#[test]
fn comment_evasion_preserves_meaning() {
    let config = seeded(2).with_comment_evasion(true);
    let stmt = Statement::select([col("password")])
        .from_table("users")
        .union(Statement::select([col("secret")]).from_table("vault"));
    for _ in 0..16 {
        let sql = stmt.to_sql(&config);
        assert!(sql.contains(COMMENT_SPACE));
        assert_eq!(
            sql.replace(COMMENT_SPACE, ""),
            "SELECT password FROM users UNION SELECT secret FROM vault"
        );
    }
}

#[test]
fn case_evasion_preserves_letters() {
    let config = seeded(3).with_case_evasion(true);
    let payload = Injection::new(EscapeContext::Integer)
        .union(Statement::select([1, 2]))
        .terminate(true);
    for _ in 0..16 {
        let sql = payload.to_sql(&config, InjectionOptions::default());
        assert_eq!(sql.to_uppercase(), "1 UNION SELECT 1,2;--");
    }
}

#[test]
fn combined_evasion_on_upper_case() {
    let config = seeded(4)
        .with_case(KeywordCase::Upper)
        .with_case_evasion(true)
        .with_comment_evasion(true);
    let payload = Injection::new(EscapeContext::Integer).and(tautology());
    let sql = payload.to_sql(&config, InjectionOptions::default());
    assert!(sql.contains(COMMENT_SPACE));
    assert_eq!(sql.replace(COMMENT_SPACE, "").to_uppercase(), "1 AND 1=1");
}

#[test]
fn symbols_are_never_mutated() {
    let config = seeded(5).with_comment_evasion(true).with_case_evasion(true);
    let stmt = Statement::select([oxide_sqli_core::Expr::keyword("all")]);
    for _ in 0..16 {
        let sql = stmt.to_sql(&config);
        assert!(sql.ends_with(" *"));
    }
}

#[test]
fn same_seed_same_payload() {
    let payload = Injection::new(EscapeContext::String)
        .or(tautology())
        .order_by([col("username")]);
    let render = |seed| {
        let config = seeded(seed)
            .with_case_evasion(true)
            .with_comment_evasion(true);
        payload.to_sql(&config, InjectionOptions::default())
    };
    assert_eq!(render(99), render(99));
}

#![allow(dead_code)]

use oxide_sqli_core::{Config, Entropy, Expr, Injection, InjectionOptions};

/// Default configuration.
pub fn config() -> Config {
    Config::default()
}

/// A configuration whose random choices are reproducible.
pub fn seeded(seed: u64) -> Config {
    Config::default().with_entropy(Entropy::seeded(seed))
}

/// Renders an expression with the default configuration.
pub fn sql(expr: &Expr) -> String {
    oxide_sqli_core::render(expr, &config())
}

/// Renders an injection with the default configuration.
pub fn sqli(injection: &Injection) -> String {
    injection.to_sql(&config(), InjectionOptions::default())
}

/// Renders an injection terminated with `;--`.
pub fn sqli_terminated(injection: &Injection) -> String {
    injection.to_sql(&config(), InjectionOptions::terminated())
}

/// `1=1`
pub fn tautology() -> Expr {
    Expr::int(1).eq(1)
}

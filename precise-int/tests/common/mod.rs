//! Shared helpers for the precise-int integration tests

#![allow(dead_code)]

use precise_int::ProxyQuery;

/// Query double counting parameter binds, with a fixed unique id
#[derive(Debug, Default)]
pub struct CountingQuery {
    pub unique_id: u64,
    pub clauses: Vec<String>,
    pub binds: Vec<(String, i64)>,
}

impl ProxyQuery for CountingQuery {
    fn unique_parameter_id(&mut self) -> u64 {
        self.unique_id
    }

    fn and_where(&mut self, clause: String) {
        self.clauses.push(clause);
    }

    fn or_where(&mut self, clause: String) {
        self.clauses.push(clause);
    }

    fn set_parameter(&mut self, name: &str, value: i64) {
        self.binds.push((name.to_string(), value));
    }
}

/// Formats `cents` as a decimal string with exactly two fractional digits
pub fn cents_to_text(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

/// Input/expected pairs for the literal normalization cases
pub fn literal_cases() -> Vec<(&'static str, i64)> {
    vec![
        ("12.34", 1234),
        ("-25.75", -2575),
        ("0.00", 0),
        ("123", 12300),
        ("0.01", 1),
        ("999999.99", 99999999),
        ("-123.45", -12345),
    ]
}

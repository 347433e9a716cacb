/// Query capability the filter writes its predicate into.
///
/// Implemented by the host's query builder; [`WhereClauseBuilder`] is an
/// in-memory implementation that renders the collected conditions as text.
pub trait ProxyQuery {
    /// Returns an id not yet used for any parameter of this query.
    fn unique_parameter_id(&mut self) -> u64;
    fn and_where(&mut self, clause: String);
    fn or_where(&mut self, clause: String);
    fn set_parameter(&mut self, name: &str, value: i64);
}

/// Collects WHERE conditions and named integer parameters
#[derive(Debug, Default, Clone, PartialEq)]
pub struct WhereClauseBuilder {
    and_clauses: Vec<String>,
    or_clauses: Vec<String>,
    parameters: Vec<(String, i64)>,
    next_id: u64,
}

impl WhereClauseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts parameter ids at `start_id`, useful when combining with other
    /// query parts that already use lower ids.
    pub fn with_start_id(start_id: u64) -> Self {
        Self {
            next_id: start_id,
            ..Self::default()
        }
    }

    pub fn parameters(&self) -> &[(String, i64)] {
        &self.parameters
    }

    pub fn parameter(&self, name: &str) -> Option<i64> {
        self.parameters
            .iter()
            .find(|(param, _)| param == name)
            .map(|(_, value)| *value)
    }

    pub fn is_empty(&self) -> bool {
        self.and_clauses.is_empty() && self.or_clauses.is_empty()
    }

    /// Joins AND conditions with ` AND `; OR conditions form one
    /// parenthesized group that is ANDed with the rest.
    pub fn to_sql(&self) -> String {
        let mut parts = self.and_clauses.clone();
        match self.or_clauses.len() {
            0 => {}
            1 => parts.push(self.or_clauses[0].clone()),
            _ => parts.push(format!("({})", self.or_clauses.join(" OR "))),
        }
        parts.join(" AND ")
    }
}

impl ProxyQuery for WhereClauseBuilder {
    fn unique_parameter_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn and_where(&mut self, clause: String) {
        self.and_clauses.push(clause);
    }

    fn or_where(&mut self, clause: String) {
        self.or_clauses.push(clause);
    }

    fn set_parameter(&mut self, name: &str, value: i64) {
        match self.parameters.iter_mut().find(|(param, _)| param == name) {
            Some(existing) => existing.1 = value,
            None => self.parameters.push((name.to_string(), value)),
        }
    }
}

//! Parameterized SQL statements
//!
//! A [`Statement`] is SQL text plus the ordered values for its `$n`
//! placeholders. [`StatementBuilder`] writes each placeholder in the same
//! call that records its value, so the Nth placeholder always binds the Nth
//! parameter no matter which optional clauses were appended.

use std::fmt;

/// A value bound to a positional placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Int(i32),
    BigInt(i64),
    Float(f64),
    Text(String),
}

impl From<i32> for SqlValue {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        Self::BigInt(v)
    }
}

impl From<f64> for SqlValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for SqlValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::BigInt(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "'{}'", v.replace('\'', "''")),
        }
    }
}

/// SQL text with its ordered parameter list
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    sql: String,
    params: Vec<SqlValue>,
}

impl Statement {
    /// Statement with fixed SQL text; bind values in placeholder order.
    pub fn new(sql: impl Into<String>) -> Self {
        Self {
            sql: sql.into(),
            params: Vec::new(),
        }
    }

    pub fn bind(mut self, value: impl Into<SqlValue>) -> Self {
        self.params.push(value.into());
        self
    }

    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn params(&self) -> &[SqlValue] {
        &self.params
    }

    /// Placeholder indices in the order they appear in the SQL text.
    pub fn placeholders(&self) -> Vec<usize> {
        let mut found = Vec::new();
        let mut chars = self.sql.char_indices().peekable();

        while let Some((_, c)) = chars.next() {
            if c != '$' {
                continue;
            }
            let mut digits = String::new();
            while let Some(&(_, d)) = chars.peek() {
                if !d.is_ascii_digit() {
                    break;
                }
                digits.push(d);
                chars.next();
            }
            if let Ok(index) = digits.parse() {
                found.push(index);
            }
        }

        found
    }
}

/// Incremental builder for statements with optional clauses
#[derive(Debug, Default)]
pub struct StatementBuilder {
    sql: String,
    params: Vec<SqlValue>,
}

impl StatementBuilder {
    pub fn new(init: impl Into<String>) -> Self {
        Self {
            sql: init.into(),
            params: Vec::new(),
        }
    }

    /// Append raw SQL text. Never pass caller-supplied values here.
    pub fn push(&mut self, sql: &str) -> &mut Self {
        self.sql.push_str(sql);
        self
    }

    /// Record a parameter and write its placeholder at the current position.
    pub fn push_bind(&mut self, value: impl Into<SqlValue>) -> &mut Self {
        self.params.push(value.into());
        self.sql.push_str(&format!("${}", self.params.len()));
        self
    }

    /// Append `<keyword> a AND b AND c` for each `(fragment, value)` pair,
    /// where each fragment is followed by its placeholder. Nothing is
    /// written when `predicates` is empty.
    pub fn push_predicates<I>(&mut self, keyword: &str, predicates: I) -> &mut Self
    where
        I: IntoIterator<Item = (&'static str, SqlValue)>,
    {
        for (i, (fragment, value)) in predicates.into_iter().enumerate() {
            self.push(if i == 0 { keyword } else { " AND " });
            self.push(fragment);
            self.push_bind(value);
        }
        self
    }

    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    pub fn build(self) -> Statement {
        Statement {
            sql: self.sql,
            params: self.params,
        }
    }
}

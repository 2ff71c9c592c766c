//! Qualifier types

use crate::error::{Error, Result};
use crate::types::JsonValue;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Comparison operator of a qualifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    NotEq,
    Gt,
    GtEq,
    Lt,
    LtEq,
}

impl Operator {
    /// Operator symbol
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::Lt => "<",
            Self::LtEq => "<=",
        }
    }

    /// Parse an operator symbol
    pub fn parse(symbol: &str) -> Result<Self> {
        match symbol {
            "=" => Ok(Self::Eq),
            "!=" | "<>" => Ok(Self::NotEq),
            ">" => Ok(Self::Gt),
            ">=" => Ok(Self::GtEq),
            "<" => Ok(Self::Lt),
            "<=" => Ok(Self::LtEq),
            other => Err(Error::invalid_qual(format!("unknown operator '{other}'"))),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

static QUAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z_][A-Za-z0-9_]*)\s*(>=|<=|!=|<>|=|>|<)\s*(.*?)\s*$").unwrap()
});

/// A single predicate: `column op value`
#[derive(Debug, Clone, PartialEq)]
pub struct Qual {
    pub column: String,
    pub operator: Operator,
    pub value: JsonValue,
}

impl Qual {
    /// Create a new qualifier
    pub fn new(column: impl Into<String>, operator: Operator, value: impl Into<JsonValue>) -> Self {
        Self {
            column: column.into(),
            operator,
            value: value.into(),
        }
    }

    /// Create an equality qualifier
    pub fn eq(column: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        Self::new(column, Operator::Eq, value)
    }

    /// Parse `column<op>value`, e.g. `date>=2024-01-01T00:00:00Z`.
    ///
    /// Canonical integer and boolean literals become JSON numbers and
    /// booleans; surrounding single or double quotes are stripped from
    /// strings.
    pub fn parse(expr: &str) -> Result<Self> {
        let caps = QUAL_REGEX
            .captures(expr)
            .ok_or_else(|| Error::invalid_qual(format!("expected <column><op><value>, got '{expr}'")))?;

        let column = &caps[1];
        let operator = Operator::parse(&caps[2])?;
        let raw = &caps[3];
        if raw.is_empty() {
            return Err(Error::invalid_qual(format!("missing value in '{expr}'")));
        }

        Ok(Self::new(column, operator, parse_literal(raw)))
    }

    /// Value rendered as a string (numbers and booleans included)
    pub fn value_string(&self) -> Option<String> {
        match &self.value {
            JsonValue::String(s) => Some(s.clone()),
            JsonValue::Number(n) => Some(n.to_string()),
            JsonValue::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

fn parse_literal(raw: &str) -> JsonValue {
    let quoted = raw.len() >= 2
        && ((raw.starts_with('\'') && raw.ends_with('\''))
            || (raw.starts_with('"') && raw.ends_with('"')));
    if quoted {
        return JsonValue::String(raw[1..raw.len() - 1].to_string());
    }

    // Only canonical integers become numbers; `007` or `+42` stay text.
    if let Ok(n) = raw.parse::<i64>() {
        if n.to_string() == raw {
            return JsonValue::from(n);
        }
    }

    match raw {
        "true" => JsonValue::Bool(true),
        "false" => JsonValue::Bool(false),
        _ => JsonValue::String(raw.to_string()),
    }
}

impl fmt::Display for Qual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value_string() {
            Some(v) => write!(f, "{}{}{}", self.column, self.operator, v),
            None => write!(f, "{}{}{}", self.column, self.operator, self.value),
        }
    }
}

/// Predicates attached to one query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QualSet {
    quals: Vec<Qual>,
}

impl QualSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a qualifier
    #[must_use]
    pub fn with(mut self, qual: Qual) -> Self {
        self.quals.push(qual);
        self
    }

    /// Add a qualifier in place
    pub fn push(&mut self, qual: Qual) {
        self.quals.push(qual);
    }

    /// Parse every expression into a set
    pub fn parse_all<I, S>(exprs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let quals = exprs
            .into_iter()
            .map(|e| Qual::parse(e.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { quals })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Qual> {
        self.quals.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.quals.is_empty()
    }

    pub fn len(&self) -> usize {
        self.quals.len()
    }

    /// Qualifiers on one column
    pub fn for_column<'s, 'c>(&'s self, column: &'c str) -> impl Iterator<Item = &'s Qual> + 'c
    where
        's: 'c,
    {
        self.quals.iter().filter(move |q| q.column == column)
    }

    /// Value of the first equality qualifier on `column`
    pub fn equals(&self, column: &str) -> Option<&JsonValue> {
        self.first_equal(column).map(|q| &q.value)
    }

    /// Equality value on `column` rendered as a string
    pub fn equals_string(&self, column: &str) -> Option<String> {
        self.first_equal(column).and_then(Qual::value_string)
    }

    fn first_equal(&self, column: &str) -> Option<&Qual> {
        self.quals
            .iter()
            .find(|q| q.column == column && q.operator == Operator::Eq)
    }

    /// Whether every column has an equality qualifier
    pub fn has_equals_for(&self, columns: &[&str]) -> bool {
        !columns.is_empty() && columns.iter().all(|c| self.equals(c).is_some())
    }
}

impl FromIterator<Qual> for QualSet {
    fn from_iter<I: IntoIterator<Item = Qual>>(iter: I) -> Self {
        Self {
            quals: iter.into_iter().collect(),
        }
    }
}

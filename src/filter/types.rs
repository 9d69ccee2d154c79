use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A value bound to a positional parameter (`$1`, `$2`, ...)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SqlParam {
    Text(String),
    Int(i32),
    Decimal(Decimal),
    Bool(bool),
    /// NULL for an integer column
    NullInt,
    /// NULL for a numeric column
    NullDecimal,
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        SqlParam::Text(value)
    }
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        SqlParam::Text(value.to_string())
    }
}

impl From<i32> for SqlParam {
    fn from(value: i32) -> Self {
        SqlParam::Int(value)
    }
}

impl From<Decimal> for SqlParam {
    fn from(value: Decimal) -> Self {
        SqlParam::Decimal(value)
    }
}

impl From<Option<i32>> for SqlParam {
    fn from(value: Option<i32>) -> Self {
        value.map_or(SqlParam::NullInt, SqlParam::Int)
    }
}

impl From<Option<Decimal>> for SqlParam {
    fn from(value: Option<Decimal>) -> Self {
        value.map_or(SqlParam::NullDecimal, SqlParam::Decimal)
    }
}

impl From<bool> for SqlParam {
    fn from(value: bool) -> Self {
        SqlParam::Bool(value)
    }
}

/// Parameterized SQL snippet and the values for its placeholders, in
/// placeholder order. Never executed on its own.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SqlFragment {
    pub clause: String,
    pub params: Vec<SqlParam>,
}

impl SqlFragment {
    pub fn is_empty(&self) -> bool {
        self.clause.is_empty()
    }
}

/// Search filters accepted by `GET /jobs`.
///
/// Field order is the order predicates are emitted in.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobFilters {
    /// Case-insensitive substring of the job title
    pub title: Option<String>,
    pub min_salary: Option<i32>,
    /// `true` keeps only jobs with non-zero equity; `false` is no constraint
    pub has_equity: Option<bool>,
}

impl JobFilters {
    /// True when no filter key was supplied at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.min_salary.is_none() && self.has_equity.is_none()
    }
}

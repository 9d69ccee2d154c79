use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use std::borrow::Cow;
use validator::{Validate, ValidationError};

use crate::filter::SqlParam;

/// A job posting as stored in `jobs` and returned on the wire.
///
/// `equity` serializes as a decimal string (`"0.25"`), never a float.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    pub company_handle: String,
}

/// Body of `POST /jobs`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewJob {
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: String,
    #[validate(range(min = 0, message = "must be greater than or equal to 0"))]
    pub salary: Option<i32>,
    #[validate(custom(function = "validate_equity"))]
    pub equity: Option<Decimal>,
    #[validate(length(min = 1, message = "must not be empty"))]
    pub company_handle: String,
}

/// Body of `PATCH /jobs/:id`. Only these fields may change; `id` and
/// `companyHandle` are rejected at deserialization.
///
/// `salary` and `equity` distinguish an absent key (`None`, left alone) from
/// an explicit `null` (`Some(None)`, cleared). `title` may not be null.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateJobFields {
    #[serde(default, deserialize_with = "non_null")]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    #[validate(range(min = 0, message = "must be greater than or equal to 0"))]
    pub salary: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    #[validate(custom(function = "validate_equity"))]
    pub equity: Option<Option<Decimal>>,
}

impl UpdateJobFields {
    /// Present fields as `(column, value)` pairs, in declaration order
    pub fn into_entries(self) -> Vec<(&'static str, SqlParam)> {
        let mut entries = Vec::with_capacity(3);
        if let Some(title) = self.title {
            entries.push(("title", SqlParam::Text(title)));
        }
        if let Some(salary) = self.salary {
            entries.push(("salary", SqlParam::from(salary)));
        }
        if let Some(equity) = self.equity {
            entries.push(("equity", SqlParam::from(equity)));
        }
        entries
    }
}

fn validate_equity(equity: &Decimal) -> Result<(), ValidationError> {
    if *equity < Decimal::ZERO || *equity > Decimal::ONE {
        return Err(ValidationError::new("range").with_message(Cow::from("must be between 0 and 1")));
    }
    Ok(())
}

// Present keys always deserialize to `Some`, so `null` survives as `Some(None)`
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)?
        .map(Some)
        .ok_or_else(|| de::Error::custom("must not be null"))
}

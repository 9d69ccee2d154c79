use rust_decimal::Decimal;
use sqlx::{postgres::PgArguments, FromRow};

use crate::filter::SqlParam;

/// Bind a builder-produced parameter onto a typed query
pub fn bind_param_query_as<'q, O>(
    q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, PgArguments>,
    v: SqlParam,
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, PgArguments>
where
    O: for<'r> FromRow<'r, sqlx::postgres::PgRow>,
{
    match v {
        SqlParam::Text(s) => q.bind(s),
        SqlParam::Int(i) => q.bind(i),
        SqlParam::Decimal(d) => q.bind(d),
        SqlParam::Bool(b) => q.bind(b),
        SqlParam::NullInt => q.bind(None::<i32>),
        SqlParam::NullDecimal => q.bind(None::<Decimal>),
    }
}

/// Bind every parameter of a fragment, in placeholder order
pub fn bind_all<'q, O>(
    mut q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, PgArguments>,
    params: Vec<SqlParam>,
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, PgArguments>
where
    O: for<'r> FromRow<'r, sqlx::postgres::PgRow>,
{
    for p in params {
        q = bind_param_query_as(q, p);
    }
    q
}

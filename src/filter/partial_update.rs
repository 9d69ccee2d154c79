use super::column_map::ColumnMap;
use super::error::FilterError;
use super::types::{SqlFragment, SqlParam};

/// Build the `SET` clause of a partial update.
///
/// Each `(field, value)` entry becomes `"<column>"=$<n>`, numbered from 1 in
/// entry order, and `params` holds the values in that same order. Callers
/// append their own trailing parameters (e.g. the row id) at `params.len() + 1`.
///
/// Column names are not validated: fields must come from a fixed set known to
/// the caller, never from client-supplied keys.
///
/// ```text
/// [("firstName", "Aliya"), ("age", 32)]  with {firstName: "first_name"}
///   => clause: "first_name"=$1, "age"=$2
///      params: ["Aliya", 32]
/// ```
pub fn sql_for_partial_update<'f>(
    data: impl IntoIterator<Item = (&'f str, SqlParam)>,
    column_map: &ColumnMap,
) -> Result<SqlFragment, FilterError> {
    let mut columns = Vec::new();
    let mut params = Vec::new();

    for (field, value) in data {
        params.push(value);
        columns.push(format!(
            "{}=${}",
            quote_identifier(column_map.column_for(field)),
            params.len()
        ));
    }

    if columns.is_empty() {
        return Err(FilterError::NoData);
    }

    Ok(SqlFragment {
        clause: columns.join(", "),
        params,
    })
}

fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

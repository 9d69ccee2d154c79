use std::collections::HashMap;

/// Maps API-facing field names (`firstName`) to persisted column names
/// (`first_name`). Owned by the caller of the update builder.
#[derive(Debug, Clone, Default)]
pub struct ColumnMap {
    columns: HashMap<String, String>,
}

impl ColumnMap {
    /// A map with no entries: every field is its own column name
    pub fn identity() -> Self {
        Self::default()
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            columns: pairs
                .into_iter()
                .map(|(field, column)| (field.to_string(), column.to_string()))
                .collect(),
        }
    }

    /// Resolve the column for `field`, falling back to the field name itself
    pub fn column_for<'a>(&'a self, field: &'a str) -> &'a str {
        self.columns.get(field).map(String::as_str).unwrap_or(field)
    }
}

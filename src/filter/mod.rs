pub mod column_map;
pub mod error;
pub mod filter_where;
pub mod partial_update;
pub mod types;

pub use column_map::ColumnMap;
pub use error::FilterError;
pub use filter_where::JobFilterWhere;
pub use partial_update::sql_for_partial_update;
pub use types::*;

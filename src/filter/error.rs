use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum FilterError {
    #[error("No data")]
    NoData,

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),
}

pub mod manager;
pub mod models;
pub mod query_builder;
pub mod repository;
pub mod schema;

pub use manager::{DatabaseError, DatabaseManager};
pub use models::{Job, NewJob, UpdateJobFields};
pub use repository::JobRepository;

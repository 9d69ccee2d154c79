pub mod collection;
pub mod record;

// Re-export handler functions for use in routing
pub use collection::get as job_list;
pub use collection::post as job_create;

pub use record::delete as job_delete;
pub use record::get as job_get;
pub use record::patch as job_patch;

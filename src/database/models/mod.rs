pub mod job;

pub use job::{Job, NewJob, UpdateJobFields};

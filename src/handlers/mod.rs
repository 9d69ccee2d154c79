// handlers/mod.rs - HTTP handlers
//
// Access levels are applied in the router, not here:
//   anonymous  GET /jobs, GET /jobs/:id, GET /health
//   admin      POST /jobs, PATCH /jobs/:id, DELETE /jobs/:id
pub mod health;
pub mod jobs;

pub use health::{health, not_found};

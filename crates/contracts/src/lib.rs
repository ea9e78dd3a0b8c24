//! Wire contracts between the query engine frontend and its backend.

pub mod system;
pub mod usecases;

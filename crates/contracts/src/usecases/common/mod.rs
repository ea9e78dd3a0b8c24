//! Types shared by all use cases

pub mod error_body;
pub mod usecase_metadata;

pub use error_body::ErrorBody;
pub use usecase_metadata::UseCaseMetadata;

pub mod request;
pub mod response;
pub mod schema;

pub use request::ConnectRequest;
pub use response::ConnectResponse;
pub use schema::{ColumnInfo, DatabaseSchema, TableSchema};

use super::common::UseCaseMetadata;

pub struct ConnectDatabase;

impl UseCaseMetadata for ConnectDatabase {
    fn usecase_index() -> &'static str {
        "u601"
    }

    fn usecase_name() -> &'static str {
        "connect_database"
    }

    fn display_name() -> &'static str {
        "Database Connector"
    }

    fn description() -> &'static str {
        "Connect to a relational database and discover its schema"
    }
}

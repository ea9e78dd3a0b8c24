pub mod history;
pub mod request;
pub mod response;

pub use history::{HistoryEntry, HistoryResponse};
pub use request::QueryRequest;
pub use response::{QueryResponse, Row};

use super::common::UseCaseMetadata;

pub struct RunQuery;

impl UseCaseMetadata for RunQuery {
    fn usecase_index() -> &'static str {
        "u603"
    }

    fn usecase_name() -> &'static str {
        "run_query"
    }

    fn display_name() -> &'static str {
        "Natural Language Query"
    }

    fn description() -> &'static str {
        "Translate a question into SQL and run it"
    }
}

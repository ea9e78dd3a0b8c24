use serde::{Deserialize, Serialize};

use super::schema::DatabaseSchema;

/// Successful answer of `POST /api/ingest/database`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConnectResponse {
    #[serde(default)]
    pub ok: Option<bool>,
    #[serde(default)]
    pub schema: Option<DatabaseSchema>,
}

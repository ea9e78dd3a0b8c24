use contracts::usecases::u601_connect_database::{ConnectResponse, DatabaseSchema};

use crate::shared::api_utils::ApiError;
use crate::shared::components::StatusTone;
use crate::shared::state::{RequestSeq, Ticket};

pub const BLANK_WARNING: &str = "⚠️ Please enter a valid connection string.";
pub const CONNECTED: &str = "✅ Connection successful!";
pub const REJECTED_FALLBACK: &str = "Could not connect";
pub const UNREACHABLE: &str = "❌ Backend connection error";

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ConnectStatus {
    #[default]
    Idle,
    /// Blank connection string, nothing was sent
    Invalid,
    Connecting,
    Connected,
    /// Backend refused the connection string; carries its reason
    Rejected(String),
    /// No usable answer from the backend
    Unreachable,
}

/// State of the database connector panel
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConnectorState {
    pub status: ConnectStatus,
    /// Schema discovered by the latest successful attempt
    pub schema: Option<DatabaseSchema>,
    seq: RequestSeq,
}

impl ConnectorState {
    /// Starts an attempt. A blank string only raises the warning and issues
    /// no ticket; otherwise the previous schema is dropped.
    pub fn begin(mut self, connection_string: &str) -> (Self, Option<Ticket>) {
        if connection_string.trim().is_empty() {
            self.status = ConnectStatus::Invalid;
            return (self, None);
        }
        let ticket = self.seq.issue();
        self.status = ConnectStatus::Connecting;
        self.schema = None;
        (self, Some(ticket))
    }

    pub fn resolve(
        mut self,
        ticket: Ticket,
        outcome: Result<ConnectResponse, ApiError>,
    ) -> Self {
        if !self.seq.is_current(ticket) {
            log::debug!("connector: dropping stale response {}", ticket);
            return self;
        }
        match outcome {
            Ok(response) => {
                self.status = ConnectStatus::Connected;
                self.schema = Some(response.schema.unwrap_or_default());
            }
            Err(ApiError::Transport(_)) => {
                self.status = ConnectStatus::Unreachable;
            }
            Err(e) => {
                self.status = ConnectStatus::Rejected(e.user_message(REJECTED_FALLBACK));
            }
        }
        self
    }

    pub fn is_connecting(&self) -> bool {
        self.status == ConnectStatus::Connecting
    }

    pub fn status_text(&self) -> String {
        match &self.status {
            ConnectStatus::Idle | ConnectStatus::Connecting => String::new(),
            ConnectStatus::Invalid => BLANK_WARNING.to_string(),
            ConnectStatus::Connected => CONNECTED.to_string(),
            ConnectStatus::Rejected(reason) => format!("❌ Failed: {}", reason),
            ConnectStatus::Unreachable => UNREACHABLE.to_string(),
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self.status {
            ConnectStatus::Connected => StatusTone::Success,
            ConnectStatus::Rejected(_) | ConnectStatus::Unreachable => StatusTone::Error,
            _ => StatusTone::Neutral,
        }
    }
}

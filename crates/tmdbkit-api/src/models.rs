//! Value types passed to endpoints.

use serde::{Deserialize, Serialize};

/// An authenticated user session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Whether the session was created successfully.
    pub success: bool,
    /// Session identifier sent as `session_id`.
    pub session_id: String,
}

impl Session {
    /// Creates a session.
    #[must_use]
    pub fn new(success: bool, session_id: impl Into<String>) -> Self {
        Self {
            success,
            session_id: session_id.into(),
        }
    }
}

/// A guest session, as returned by `authentication/guest_session/new`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuestSession {
    /// Whether the session was created successfully.
    pub success: bool,
    /// Guest session identifier.
    pub guest_session_id: String,
    /// Expiry as reported by the API (e.g. `"2016-08-27 16:26:40 UTC"`).
    pub expires_at: String,
}

/// Sort order for account lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListSort {
    /// Oldest first.
    #[default]
    CreatedAtAscending,
    /// Newest first.
    CreatedAtDescending,
}

impl ListSort {
    /// Value of the `sort_by` query parameter.
    #[must_use]
    pub const fn as_query_value(self) -> &'static str {
        match self {
            Self::CreatedAtAscending => "created_at.asc",
            Self::CreatedAtDescending => "created_at.desc",
        }
    }
}

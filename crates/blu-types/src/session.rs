use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct QobuzUser {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub subscription: Option<String>,
}

/// What the browser knows about the current Qobuz session.
///
/// The token itself stays in its `HttpOnly` cookie; the browser only learns
/// that one is held. `user` is only filled in once the token has been
/// verified against the account registry.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionSnapshot {
    pub has_token: bool,
    pub user_id: Option<String>,
    pub user: Option<QobuzUser>,
}

impl SessionSnapshot {
    pub fn is_empty(&self) -> bool {
        !self.has_token && self.user_id.is_none() && self.user.is_none()
    }
}

/// Outcome of an access guard for one navigation attempt.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GuardOutcome {
    Allow,
    Redirect(String),
}

impl GuardOutcome {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardOutcome::Allow)
    }
}

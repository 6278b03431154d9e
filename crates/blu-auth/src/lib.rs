#![allow(non_snake_case)]

pub mod accounts;
pub mod cookies;
pub mod guard;
pub mod interceptor;
pub mod session;

use std::future::Future;

use blu_types::{QobuzUser, AUTH_TOKEN_HEADER, USER_ID_HEADER};
use http::{HeaderMap, HeaderName, HeaderValue};

pub use accounts::{Account, AccountRegistry};
pub use guard::{require_auth, require_no_auth};
pub use interceptor::{AuthHeaderLayer, AuthHeaders};
pub use session::RequestSession;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("token verification failed: {0}")]
    Verification(String),
}

/// Read access to the current Qobuz session.
///
/// Guards and the header interceptor only observe the session through this
/// trait; owning, persisting and refreshing it is up to the implementor.
pub trait AuthService {
    /// True once a token is held and its user has been verified.
    fn is_logged_in(&self) -> bool;

    /// The verified user, if any.
    fn user(&self) -> Option<QobuzUser>;

    fn auth_token(&self) -> Option<String>;

    /// True when a token is held, even one this side cannot read.
    fn has_token(&self) -> bool {
        self.auth_token().is_some()
    }

    fn user_id(&self) -> Option<String>;

    /// Checks the held token with the account backend. `Ok(false)` means the
    /// token was rejected; `Err` means the check itself could not complete.
    fn verify_token(&self) -> impl Future<Output = Result<bool, AuthError>> + Send;

    /// Headers to attach to provider API calls. Empty when no token is held.
    fn auth_headers(&self) -> HeaderMap;
}

/// Builds the provider header set for a token and optional user id.
pub fn build_auth_headers(authToken: Option<&str>, userId: Option<&str>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    let Some(token) = authToken else {
        return headers;
    };

    insert_header(&mut headers, AUTH_TOKEN_HEADER, token);
    if let Some(id) = userId {
        insert_header(&mut headers, USER_ID_HEADER, id);
    }
    headers
}

fn insert_header(headers: &mut HeaderMap, name: &str, value: &str) {
    let parsed = HeaderName::from_bytes(name.as_bytes())
        .map_err(|e| e.to_string())
        .and_then(|headerName| {
            HeaderValue::from_str(value)
                .map(|headerValue| (headerName, headerValue))
                .map_err(|e| e.to_string())
        });

    match parsed {
        Ok((headerName, headerValue)) => {
            headers.insert(headerName, headerValue);
        }
        Err(e) => tracing::warn!("dropping {name} header: {e}"),
    }
}

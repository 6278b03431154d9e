use std::sync::{Arc, OnceLock};

use blu_types::{QobuzUser, SessionSnapshot, AUTH_TOKEN_COOKIE, USER_ID_COOKIE};
use http::HeaderMap;

use crate::{build_auth_headers, cookies, AccountRegistry, AuthError, AuthService};

/// Session of a single HTTP request, read from its cookies.
///
/// Starts out unverified; a successful `verify_token` caches the account's
/// user so later `user()`/`is_logged_in()` calls on the same value see it.
#[derive(Clone, Debug)]
pub struct RequestSession {
    authToken: Option<String>,
    userId: Option<String>,
    verified: OnceLock<QobuzUser>,
    registry: Arc<AccountRegistry>,
}

impl RequestSession {
    pub fn new(authToken: Option<String>, userId: Option<String>, registry: Arc<AccountRegistry>) -> Self {
        Self {
            authToken,
            userId,
            verified: OnceLock::new(),
            registry,
        }
    }

    pub fn from_headers(headers: &HeaderMap, registry: Arc<AccountRegistry>) -> Self {
        let jar = cookies::cookie_jar(headers);
        Self::new(
            cookies::cookie_value(&jar, AUTH_TOKEN_COOKIE),
            cookies::cookie_value(&jar, USER_ID_COOKIE),
            registry,
        )
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            has_token: self.authToken.is_some(),
            user_id: self.userId.clone(),
            user: self.verified.get().cloned(),
        }
    }

    fn check(&self) -> Option<QobuzUser> {
        let (Some(userId), Some(token)) = (&self.userId, &self.authToken) else {
            return None;
        };
        let user = self.registry.verify(userId, token)?;
        Some(self.verified.get_or_init(|| user).clone())
    }
}

impl AuthService for RequestSession {
    fn is_logged_in(&self) -> bool {
        self.authToken.is_some() && self.verified.get().is_some()
    }

    fn user(&self) -> Option<QobuzUser> {
        self.verified.get().cloned()
    }

    fn auth_token(&self) -> Option<String> {
        self.authToken.clone()
    }

    fn user_id(&self) -> Option<String> {
        self.userId.clone()
    }

    fn verify_token(&self) -> impl std::future::Future<Output = Result<bool, AuthError>> + Send {
        std::future::ready(Ok(self.check().is_some()))
    }

    fn auth_headers(&self) -> HeaderMap {
        build_auth_headers(self.authToken.as_deref(), self.userId.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::test_registry;
    use http::{header, HeaderValue};

    fn session_for(cookie: &str) -> RequestSession {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(cookie).unwrap());
        RequestSession::from_headers(&headers, Arc::new(test_registry()))
    }

    #[test]
    fn reads_session_from_cookies() {
        let session = session_for("qobuz_user_id=1001; qobuz_auth_token=tok-1001");
        assert_eq!(session.user_id().as_deref(), Some("1001"));
        assert_eq!(session.auth_token().as_deref(), Some("tok-1001"));
        assert!(!session.is_logged_in());
        assert!(session.user().is_none());
        assert!(session.snapshot().has_token);
    }

    #[test]
    fn quoted_cookie_values_are_unwrapped() {
        let session = session_for("qobuz_user_id=\"1001\"; qobuz_auth_token=\"tok-1001\"");
        assert_eq!(session.user_id().as_deref(), Some("1001"));
        assert_eq!(session.auth_token().as_deref(), Some("tok-1001"));
    }

    #[test]
    fn missing_cookies_give_empty_session() {
        let session = RequestSession::from_headers(&HeaderMap::new(), Arc::new(test_registry()));
        assert!(session.snapshot().is_empty());
        assert!(session.auth_headers().is_empty());
    }

    #[tokio::test]
    async fn verification_caches_user() {
        let session = session_for("qobuz_user_id=1001; qobuz_auth_token=tok-1001");
        assert!(session.verify_token().await.unwrap());
        assert!(session.is_logged_in());
        assert_eq!(session.snapshot().user.unwrap().email, "listener@example.com");
    }

    #[tokio::test]
    async fn token_of_another_user_is_rejected() {
        let session = session_for("qobuz_user_id=1002; qobuz_auth_token=tok-1001");
        assert!(!session.verify_token().await.unwrap());
        assert!(!session.is_logged_in());
    }

    #[tokio::test]
    async fn guard_accepts_cookie_session() {
        let session = session_for("qobuz_user_id=1001; qobuz_auth_token=tok-1001");
        let outcome = crate::require_auth(&session, "/qobuz/browse").await;
        assert!(outcome.is_allowed());
        assert!(session.is_logged_in());
    }
}

//! Access guards for the Qobuz pages.
//!
//! Both guards only decide; the caller turns a [`GuardOutcome::Redirect`]
//! into whatever redirect its layer speaks (an HTTP 303 on the server, a
//! router navigation in the browser).

use blu_types::routes::{ADD_ACCOUNT_PARAM, BROWSE, LOGIN, RETURN_URL_PARAM};
use blu_types::GuardOutcome;
use tracing::{debug, warn};
use url::form_urlencoded;

use crate::AuthService;

/// Guards pages that need a Qobuz session.
///
/// A session with a verified user passes straight through. A session that
/// only holds a token and user id gets one verification round trip. Anything
/// else, including a failed or erroring verification, is sent to the login
/// page with `attemptedUrl` as the return target.
pub async fn require_auth<A: AuthService>(auth: &A, attemptedUrl: &str) -> GuardOutcome {
    if auth.user().is_some() && auth.is_logged_in() {
        return GuardOutcome::Allow;
    }

    if auth.has_token() && auth.user_id().is_some() {
        match auth.verify_token().await {
            Ok(true) => return GuardOutcome::Allow,
            Ok(false) => debug!("qobuz token rejected, redirecting {attemptedUrl} to login"),
            Err(e) => warn!("qobuz token verification failed for {attemptedUrl}: {e}"),
        }
    }

    GuardOutcome::Redirect(login_redirect(attemptedUrl))
}

/// Guards the login page itself. `query` is the raw query string, with or
/// without its leading `?`.
pub fn require_no_auth<A: AuthService>(auth: &A, query: &str) -> GuardOutcome {
    if has_query_param(query, ADD_ACCOUNT_PARAM) {
        return GuardOutcome::Allow;
    }

    if auth.is_logged_in() {
        return GuardOutcome::Redirect(BROWSE.to_string());
    }

    GuardOutcome::Allow
}

pub fn login_redirect(attemptedUrl: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair(RETURN_URL_PARAM, attemptedUrl)
        .finish();
    format!("{LOGIN}?{query}")
}

/// Joins a path and a raw query string back into the URL a user navigated to.
pub fn attempted_url(path: &str, query: &str) -> String {
    let query = query.trim_start_matches('?');
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{path}?{query}")
    }
}

pub fn has_query_param(query: &str, name: &str) -> bool {
    form_urlencoded::parse(query.trim_start_matches('?').as_bytes()).any(|(key, _)| key == name)
}

pub fn query_param(query: &str, name: &str) -> Option<String> {
    form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

/// Where to go after a successful login. Only same-origin paths are honoured.
pub fn safe_return_url(raw: Option<&str>) -> String {
    match raw {
        Some(url) if url.starts_with('/') && !url.starts_with("//") && !url.contains('\\') => {
            url.to_string()
        }
        _ => BROWSE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_auth_headers, AuthError};
    use blu_types::QobuzUser;
    use http::HeaderMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum Verify {
        Accept,
        Reject,
        Fail,
    }

    struct FakeAuth {
        loggedIn: bool,
        user: Option<QobuzUser>,
        token: Option<String>,
        cookieOnlyToken: bool,
        userId: Option<String>,
        verify: Verify,
        verifyCalls: AtomicUsize,
    }

    impl FakeAuth {
        fn anonymous() -> Self {
            Self {
                loggedIn: false,
                user: None,
                token: None,
                cookieOnlyToken: false,
                userId: None,
                verify: Verify::Accept,
                verifyCalls: AtomicUsize::new(0),
            }
        }

        fn unverified(verify: Verify) -> Self {
            Self {
                token: Some("tok-1".into()),
                userId: Some("1001".into()),
                verify,
                ..Self::anonymous()
            }
        }

        fn logged_in() -> Self {
            Self {
                loggedIn: true,
                user: Some(listener()),
                ..Self::unverified(Verify::Reject)
            }
        }

        fn calls(&self) -> usize {
            self.verifyCalls.load(Ordering::SeqCst)
        }
    }

    impl AuthService for FakeAuth {
        fn is_logged_in(&self) -> bool {
            self.loggedIn
        }

        fn user(&self) -> Option<QobuzUser> {
            self.user.clone()
        }

        fn auth_token(&self) -> Option<String> {
            self.token.clone()
        }

        fn has_token(&self) -> bool {
            self.token.is_some() || self.cookieOnlyToken
        }

        fn user_id(&self) -> Option<String> {
            self.userId.clone()
        }

        async fn verify_token(&self) -> Result<bool, AuthError> {
            self.verifyCalls.fetch_add(1, Ordering::SeqCst);
            match self.verify {
                Verify::Accept => Ok(true),
                Verify::Reject => Ok(false),
                Verify::Fail => Err(AuthError::Verification("backend unreachable".into())),
            }
        }

        fn auth_headers(&self) -> HeaderMap {
            build_auth_headers(self.token.as_deref(), self.userId.as_deref())
        }
    }

    fn listener() -> QobuzUser {
        QobuzUser {
            id: "1001".into(),
            email: "listener@example.com".into(),
            display_name: "Listener".into(),
            subscription: Some("Studio".into()),
        }
    }

    #[tokio::test]
    async fn verified_session_is_allowed_without_verification() {
        let auth = FakeAuth::logged_in();
        assert_eq!(require_auth(&auth, "/qobuz/browse").await, GuardOutcome::Allow);
        assert_eq!(auth.calls(), 0);
    }

    #[tokio::test]
    async fn unverified_session_follows_verification_result() {
        let accepted = FakeAuth::unverified(Verify::Accept);
        assert_eq!(require_auth(&accepted, "/qobuz/album/42").await, GuardOutcome::Allow);
        assert_eq!(accepted.calls(), 1);

        let rejected = FakeAuth::unverified(Verify::Reject);
        assert_eq!(
            require_auth(&rejected, "/qobuz/album/42").await,
            GuardOutcome::Redirect("/qobuz/login?returnUrl=%2Fqobuz%2Falbum%2F42".into())
        );
    }

    #[tokio::test]
    async fn verification_error_redirects_like_rejection() {
        let auth = FakeAuth::unverified(Verify::Fail);
        assert_eq!(
            require_auth(&auth, "/qobuz/search?q=bach").await,
            GuardOutcome::Redirect(login_redirect("/qobuz/search?q=bach"))
        );
        assert_eq!(auth.calls(), 1);
    }

    #[tokio::test]
    async fn anonymous_session_redirects_with_return_url() {
        let auth = FakeAuth::anonymous();
        let outcome = require_auth(&auth, "/qobuz/playlist/7").await;
        assert_eq!(
            outcome,
            GuardOutcome::Redirect("/qobuz/login?returnUrl=%2Fqobuz%2Fplaylist%2F7".into())
        );
        assert_eq!(auth.calls(), 0);
    }

    #[tokio::test]
    async fn token_without_user_id_is_not_verified() {
        let auth = FakeAuth {
            userId: None,
            ..FakeAuth::unverified(Verify::Accept)
        };
        assert!(!require_auth(&auth, "/qobuz/browse").await.is_allowed());
        assert_eq!(auth.calls(), 0);
    }

    #[tokio::test]
    async fn unreadable_token_is_still_verified() {
        let auth = FakeAuth {
            token: None,
            cookieOnlyToken: true,
            ..FakeAuth::unverified(Verify::Accept)
        };
        assert_eq!(require_auth(&auth, "/qobuz/browse").await, GuardOutcome::Allow);
        assert_eq!(auth.calls(), 1);
    }

    #[test]
    fn add_account_always_opens_login() {
        assert_eq!(require_no_auth(&FakeAuth::logged_in(), "?addAccount=true"), GuardOutcome::Allow);
        assert_eq!(require_no_auth(&FakeAuth::logged_in(), "addAccount"), GuardOutcome::Allow);
        assert_eq!(require_no_auth(&FakeAuth::anonymous(), "addAccount="), GuardOutcome::Allow);
    }

    #[test]
    fn logged_in_user_is_sent_to_browse() {
        assert_eq!(
            require_no_auth(&FakeAuth::logged_in(), ""),
            GuardOutcome::Redirect("/qobuz/browse".into())
        );
        assert_eq!(
            require_no_auth(&FakeAuth::logged_in(), "?returnUrl=%2Fqobuz"),
            GuardOutcome::Redirect("/qobuz/browse".into())
        );
    }

    #[test]
    fn anonymous_user_sees_login() {
        assert_eq!(require_no_auth(&FakeAuth::anonymous(), ""), GuardOutcome::Allow);
        assert_eq!(
            require_no_auth(&FakeAuth::unverified(Verify::Accept), ""),
            GuardOutcome::Allow
        );
    }

    #[test]
    fn reads_query_parameters() {
        let query = "?returnUrl=%2Fqobuz%2Falbum%2F42&addAccount";
        assert_eq!(query_param(query, "returnUrl").as_deref(), Some("/qobuz/album/42"));
        assert!(has_query_param(query, "addAccount"));
        assert!(!has_query_param(query, "addaccount"));
    }

    #[test]
    fn attempted_url_keeps_query() {
        assert_eq!(attempted_url("/qobuz/search", "?q=bach"), "/qobuz/search?q=bach");
        assert_eq!(attempted_url("/qobuz/browse", ""), "/qobuz/browse");
    }

    #[test]
    fn return_url_must_be_local() {
        assert_eq!(safe_return_url(Some("/qobuz/album/42")), "/qobuz/album/42");
        assert_eq!(safe_return_url(Some("//evil.example")), "/qobuz/browse");
        assert_eq!(safe_return_url(Some("https://evil.example")), "/qobuz/browse");
        assert_eq!(safe_return_url(Some("/\\evil.example")), "/qobuz/browse");
        assert_eq!(safe_return_url(Some("")), "/qobuz/browse");
        assert_eq!(safe_return_url(None), "/qobuz/browse");
    }
}

//! Browser-side Qobuz session and the server functions backing it.

use std::future::Future;

use blu_auth::{AuthError, AuthService};
use blu_types::{QobuzUser, SessionSnapshot};
use http::HeaderMap;
use leptos::prelude::*;

/// Reactive session shared through Leptos context.
///
/// Starts unloaded; the first guard to run pulls the cookie session from the
/// server. The user stays `None` until a guard verifies the token. The token
/// lives in an `HttpOnly` cookie, so the browser only tracks whether one is held.
#[derive(Clone, Copy)]
pub struct SessionContext {
    hasToken: RwSignal<bool>,
    userId: RwSignal<Option<String>>,
    user: RwSignal<Option<QobuzUser>>,
    loaded: RwSignal<bool>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            hasToken: RwSignal::new(false),
            userId: RwSignal::new(None),
            user: RwSignal::new(None),
            loaded: RwSignal::new(false),
        }
    }

    pub fn apply(&self, snapshot: SessionSnapshot) {
        self.hasToken.set(snapshot.has_token);
        self.userId.set(snapshot.user_id);
        self.user.set(snapshot.user);
        self.loaded.set(true);
    }

    pub fn clear(&self) {
        self.apply(SessionSnapshot::default());
    }

    /// Tracked read of the verified user, for views.
    pub fn current_user(&self) -> Option<QobuzUser> {
        self.user.get()
    }

    pub async fn ensure_loaded(self) -> Result<(), ServerFnError> {
        if self.loaded.get_untracked() {
            return Ok(());
        }
        let snapshot = get_session().await?;
        self.apply(snapshot);
        Ok(())
    }

    /// Folds a `verify_session` answer into the session. A missing user means
    /// the cookie session is gone, so everything is forgotten.
    fn settle_verification(
        self,
        result: Result<Option<QobuzUser>, ServerFnError>,
    ) -> Result<bool, AuthError> {
        match result {
            Ok(Some(user)) => {
                self.user.set(Some(user));
                Ok(true)
            }
            Ok(None) => {
                self.clear();
                Ok(false)
            }
            Err(e) => Err(AuthError::Verification(e.to_string())),
        }
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthService for SessionContext {
    fn is_logged_in(&self) -> bool {
        self.hasToken.get_untracked() && self.user.with_untracked(Option::is_some)
    }

    fn user(&self) -> Option<QobuzUser> {
        self.user.get_untracked()
    }

    fn auth_token(&self) -> Option<String> {
        None
    }

    fn has_token(&self) -> bool {
        self.hasToken.get_untracked()
    }

    fn user_id(&self) -> Option<String> {
        self.userId.get_untracked()
    }

    fn verify_token(&self) -> impl Future<Output = Result<bool, AuthError>> + Send {
        let session = *self;
        async move { session.settle_verification(verify_session().await) }
    }

    /// Always empty: browser requests carry the token as its cookie.
    fn auth_headers(&self) -> HeaderMap {
        HeaderMap::new()
    }
}

#[cfg(feature = "ssr")]
pub(crate) mod ssr {
    use std::sync::Arc;

    use blu_auth::{AccountRegistry, RequestSession};
    use blu_catalog::{CatalogClient, ClientError};
    use http::request::Parts;
    use leptos::prelude::*;

    pub fn accounts() -> Result<Arc<AccountRegistry>, ServerFnError> {
        use_context::<Arc<AccountRegistry>>()
            .ok_or_else(|| ServerFnError::new("account registry unavailable"))
    }

    pub fn request_session() -> Result<RequestSession, ServerFnError> {
        let accounts = accounts()?;
        let parts = use_context::<Parts>()
            .ok_or_else(|| ServerFnError::new("request context unavailable"))?;
        Ok(RequestSession::from_headers(&parts.headers, accounts))
    }

    pub fn catalog_client() -> Result<CatalogClient, ServerFnError> {
        use_context::<CatalogClient>()
            .ok_or_else(|| ServerFnError::new("catalog client unavailable"))
    }

    pub fn catalog_error(e: ClientError) -> ServerFnError {
        tracing::warn!("qobuz catalog request failed: {e}");
        ServerFnError::new(e.to_string())
    }

    pub fn set_cookies<C: std::fmt::Display>(cookies: [C; 2]) -> Result<(), ServerFnError> {
        use http::header::{HeaderValue, SET_COOKIE};
        use leptos_axum::ResponseOptions;

        let responseOptions = expect_context::<ResponseOptions>();
        for cookie in cookies {
            responseOptions.append_header(
                SET_COOKIE,
                HeaderValue::from_str(&cookie.to_string())
                    .map_err(|e| ServerFnError::new(format!("cookie error: {e}")))?,
            );
        }
        Ok(())
    }
}

/// Session as read from the request cookies, unverified.
#[server]
pub async fn get_session() -> Result<SessionSnapshot, ServerFnError> {
    Ok(ssr::request_session()?.snapshot())
}

/// Verifies the cookie session, returning its user when the token is valid.
#[server]
pub async fn verify_session() -> Result<Option<QobuzUser>, ServerFnError> {
    let session = ssr::request_session()?;
    let verified = session
        .verify_token()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;
    Ok(if verified { session.user() } else { None })
}

#[server]
pub async fn login(email: String, password: String) -> Result<SessionSnapshot, ServerFnError> {
    use blu_auth::cookies::session_cookies;

    let accounts = ssr::accounts()?;
    let account = accounts.login(&email, &password).map_err(|e| {
        tracing::info!("qobuz login rejected for {email}");
        ServerFnError::new(e.to_string())
    })?;

    ssr::set_cookies(session_cookies(account))?;
    tracing::info!(user_id = %account.user_id, "qobuz login");

    Ok(SessionSnapshot {
        has_token: true,
        user_id: Some(account.user_id.clone()),
        user: Some(account.user()),
    })
}

#[server]
pub async fn logout() -> Result<(), ServerFnError> {
    ssr::set_cookies(blu_auth::cookies::cleared_cookies())
}

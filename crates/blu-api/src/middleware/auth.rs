use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use blu_auth::guard::attempted_url;
use blu_auth::{require_auth, require_no_auth, AccountRegistry, AuthService, RequestSession};
use blu_catalog::CatalogStore;
use blu_types::{routes, GuardOutcome, AUTH_TOKEN_HEADER, USER_ID_HEADER};
use tracing::{debug, warn};

use crate::error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<AccountRegistry>,
    pub catalog: Arc<CatalogStore>,
}

/// Middleware for `/api/qobuz` routes: the `X-Auth-Token` header must belong
/// to a registered account, and `X-User-Id`, when sent, must name that account.
pub async fn require_api_auth(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let token = header_value(&request, AUTH_TOKEN_HEADER);
    let claimedUserId = header_value(&request, USER_ID_HEADER);

    let account = token
        .as_deref()
        .and_then(|t| state.accounts.find_by_token(t))
        .filter(|a| claimedUserId.as_deref().map_or(true, |id| id == a.user_id));

    let Some(account) = account else {
        debug!("rejecting {} without a valid qobuz token", request.uri().path());
        return ApiError::Unauthorized.into_response();
    };

    debug!(user_id = %account.user_id, "qobuz api request {}", request.uri().path());
    next.run(request).await
}

fn header_value(request: &Request<Body>, name: &str) -> Option<String> {
    request
        .headers()
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
}

/// Middleware for Qobuz page routes: runs the access guards against the
/// request's cookie session and answers guard redirects with a 303.
pub async fn require_page_auth(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();
    if !routes::is_qobuz_page(&path) {
        return next.run(request).await;
    }

    let query = request.uri().query().unwrap_or("").to_string();
    let session = RequestSession::from_headers(request.headers(), state.accounts.clone());

    let outcome = if path == routes::LOGIN {
        // A cookie session is unverified until checked; check it so a valid
        // one counts as logged in.
        if session.auth_token().is_some() {
            match session.verify_token().await {
                Ok(true) => {}
                Ok(false) => debug!("stale qobuz cookie session on login page"),
                Err(e) => warn!("qobuz token verification failed on login page: {e}"),
            }
        }
        require_no_auth(&session, &query)
    } else {
        require_auth(&session, &attempted_url(&path, &query)).await
    };

    match outcome {
        GuardOutcome::Allow => next.run(request).await,
        GuardOutcome::Redirect(target) => {
            debug!("page guard redirecting {path} to {target}");
            Redirect::to(&target).into_response()
        }
    }
}

#[cfg(test)]
pub(crate) fn test_state() -> AppState {
    AppState {
        accounts: Arc::new(AccountRegistry::new(vec![blu_auth::Account {
            user_id: "1001".into(),
            email: "listener@example.com".into(),
            password: "hunter2".into(),
            display_name: "Listener".into(),
            subscription: Some("Studio".into()),
            token: "tok-1001".into(),
        }])),
        catalog: Arc::new(CatalogStore::demo()),
    }
}

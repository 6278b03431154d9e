//! Tower middleware that attaches Qobuz auth headers to provider API calls.

use std::task::{Context, Poll};

use blu_types::{routes, AUTH_TOKEN_HEADER};
use http::Request;
use tower::{Layer, Service};
use tracing::trace;

use crate::AuthService;

#[derive(Clone)]
pub struct AuthHeaderLayer<A> {
    auth: A,
}

impl<A> AuthHeaderLayer<A> {
    pub fn new(auth: A) -> Self {
        Self { auth }
    }
}

impl<S, A: Clone> Layer<S> for AuthHeaderLayer<A> {
    type Service = AuthHeaders<S, A>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthHeaders {
            inner,
            auth: self.auth.clone(),
        }
    }
}

#[derive(Clone)]
pub struct AuthHeaders<S, A> {
    inner: S,
    auth: A,
}

impl<S, A, B> Service<Request<B>> for AuthHeaders<S, A>
where
    S: Service<Request<B>>,
    A: AuthService,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<B>) -> Self::Future {
        attach_auth_headers(&self.auth, &mut request);
        self.inner.call(request)
    }
}

/// Merges the session's auth headers into a provider API request.
///
/// Requests outside the provider namespace, requests made without a token and
/// requests that already carry `X-Auth-Token` are left untouched. Returns
/// whether anything was added.
pub fn attach_auth_headers<A: AuthService, B>(auth: &A, request: &mut Request<B>) -> bool {
    let path = request.uri().path();
    if !routes::is_provider_api(path) {
        return false;
    }

    if auth.auth_token().is_none() {
        trace!("no qobuz token for {path}, forwarding as is");
        return false;
    }

    if request.headers().contains_key(AUTH_TOKEN_HEADER) {
        return false;
    }

    let headers = auth.auth_headers();
    for (name, value) in &headers {
        request.headers_mut().insert(name.clone(), value.clone());
    }
    true
}

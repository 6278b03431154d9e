#![allow(non_snake_case)]

pub mod catalog;
pub mod routes;
pub mod session;

pub use catalog::*;
pub use session::*;

/// Header carrying the Qobuz user auth token on provider API calls.
pub const AUTH_TOKEN_HEADER: &str = "X-Auth-Token";
/// Header carrying the Qobuz user id alongside the token.
pub const USER_ID_HEADER: &str = "X-User-Id";

pub const AUTH_TOKEN_COOKIE: &str = "qobuz_auth_token";
pub const USER_ID_COOKIE: &str = "qobuz_user_id";

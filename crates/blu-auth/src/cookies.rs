use blu_types::{AUTH_TOKEN_COOKIE, USER_ID_COOKIE};
use cookie::time::Duration;
use cookie::{Cookie, CookieJar, SameSite};
use http::{header, HeaderMap};

use crate::Account;

const SESSION_MAX_AGE: Duration = Duration::weeks(1);

/// Collects every cookie sent in the request's `Cookie` headers.
pub fn cookie_jar(headers: &HeaderMap) -> CookieJar {
    let mut jar = CookieJar::new();
    let cookies = headers
        .get_all(header::COOKIE)
        .into_iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| Cookie::split_parse(value))
        .filter_map(Result::ok);

    for cookie in cookies {
        if jar.get(cookie.name()).is_none() {
            jar.add_original(cookie.into_owned());
        }
    }
    jar
}

/// Value of a named cookie with any surrounding quotes removed. Empty values
/// count as missing.
pub fn cookie_value(jar: &CookieJar, name: &str) -> Option<String> {
    jar.get(name)
        .map(Cookie::value_trimmed)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Cookies that store a signed-in account's session.
pub fn session_cookies(account: &Account) -> [Cookie<'static>; 2] {
    [
        session_cookie(USER_ID_COOKIE, account.user_id.clone(), SESSION_MAX_AGE),
        session_cookie(AUTH_TOKEN_COOKIE, account.token.clone(), SESSION_MAX_AGE),
    ]
}

/// Cookies that expire the session.
pub fn cleared_cookies() -> [Cookie<'static>; 2] {
    [
        session_cookie(USER_ID_COOKIE, String::new(), Duration::ZERO),
        session_cookie(AUTH_TOKEN_COOKIE, String::new(), Duration::ZERO),
    ]
}

fn session_cookie(name: &'static str, value: String, maxAge: Duration) -> Cookie<'static> {
    Cookie::build((name, value))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Strict)
        .path("/")
        .max_age(maxAge)
        .build()
}

//! Paths of the Qobuz section, shared by the router, the guards and the
//! server-side page middleware.

pub const ROOT: &str = "/qobuz";
pub const LOGIN: &str = "/qobuz/login";
pub const BROWSE: &str = "/qobuz/browse";
pub const SEARCH: &str = "/qobuz/search";

/// Query parameter carrying the page to return to after login.
pub const RETURN_URL_PARAM: &str = "returnUrl";
/// Query parameter that lets a logged-in user open the login page to add
/// another account.
pub const ADD_ACCOUNT_PARAM: &str = "addAccount";

/// Substrings identifying provider API calls that need auth headers.
pub const PROVIDER_API_PREFIXES: [&str; 2] = ["/Qobuz", "/api/qobuz"];

pub fn album(id: &str) -> String {
    format!("/qobuz/album/{id}")
}

pub fn playlist(id: &str) -> String {
    format!("/qobuz/playlist/{id}")
}

pub fn artist(id: &str) -> String {
    format!("/qobuz/artist/{id}")
}

pub fn discography(artistId: &str) -> String {
    format!("/qobuz/artist/{artistId}/discography")
}

/// True for the provider's own pages (everything under `/qobuz`).
pub fn is_qobuz_page(path: &str) -> bool {
    path == ROOT || path.starts_with("/qobuz/")
}

pub fn is_provider_api(path: &str) -> bool {
    PROVIDER_API_PREFIXES
        .iter()
        .any(|prefix| path.contains(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_api_matches_both_namespaces() {
        assert!(is_provider_api("/Qobuz/Album?id=1"));
        assert!(is_provider_api("/api/qobuz/album/1"));
        assert!(is_provider_api("/node/1/Qobuz/Search"));
        assert!(!is_provider_api("/Status"));
        assert!(!is_provider_api("/api/tidal/album/1"));
    }

    #[test]
    fn qobuz_pages_exclude_lookalike_prefixes() {
        assert!(is_qobuz_page("/qobuz"));
        assert!(is_qobuz_page("/qobuz/album/42"));
        assert!(!is_qobuz_page("/qobuzz"));
        assert!(!is_qobuz_page("/api/qobuz/album/42"));
    }

    #[test]
    fn builds_entity_paths() {
        assert_eq!(album("42"), "/qobuz/album/42");
        assert_eq!(discography("7"), "/qobuz/artist/7/discography");
    }
}

//! HTTP client for the `/api/qobuz` catalog endpoints.
//!
//! Every call goes through [`AuthHeaderLayer`], so the caller's session
//! decides which token the request carries.

use blu_auth::{AuthHeaderLayer, AuthService};
use blu_types::{Album, Artist, BrowseSections, Discography, Playlist, SearchResults};
use http::{header, Request, Response, StatusCode};
use serde::de::DeserializeOwned;
use tower::{Service, ServiceBuilder, ServiceExt};
use tracing::debug;
use url::{Position, Url};

use crate::HttpTransport;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("invalid request: {0}")]
    Request(#[from] http::Error),
    #[error("invalid catalog base url {0}")]
    BaseUrl(String),
    #[error("transport error: {0}")]
    Transport(BoxError),
    #[error("{path} returned {status}")]
    Status { status: StatusCode, path: String },
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ClientError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ClientError::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

#[derive(Clone, Debug)]
pub struct CatalogClient<T = HttpTransport> {
    baseUrl: String,
    transport: T,
}

impl CatalogClient<HttpTransport> {
    pub fn new(baseUrl: impl Into<String>) -> Self {
        Self::with_transport(baseUrl, HttpTransport::default())
    }
}

impl<T> CatalogClient<T>
where
    T: Service<Request<Vec<u8>>, Response = Response<Vec<u8>>> + Clone,
    T::Error: Into<BoxError>,
{
    pub fn with_transport(baseUrl: impl Into<String>, transport: T) -> Self {
        Self {
            baseUrl: baseUrl.into().trim_end_matches('/').to_string(),
            transport,
        }
    }

    pub async fn browse<A: AuthService + Clone>(&self, auth: &A) -> Result<BrowseSections, ClientError> {
        self.get_json(auth, self.endpoint(&["browse"])?).await
    }

    pub async fn album<A: AuthService + Clone>(&self, auth: &A, id: &str) -> Result<Album, ClientError> {
        self.get_json(auth, self.endpoint(&["album", id])?).await
    }

    pub async fn artist<A: AuthService + Clone>(&self, auth: &A, id: &str) -> Result<Artist, ClientError> {
        self.get_json(auth, self.endpoint(&["artist", id])?).await
    }

    pub async fn discography<A: AuthService + Clone>(
        &self,
        auth: &A,
        artistId: &str,
    ) -> Result<Discography, ClientError> {
        self.get_json(auth, self.endpoint(&["artist", artistId, "discography"])?)
            .await
    }

    pub async fn playlist<A: AuthService + Clone>(&self, auth: &A, id: &str) -> Result<Playlist, ClientError> {
        self.get_json(auth, self.endpoint(&["playlist", id])?).await
    }

    pub async fn search<A: AuthService + Clone>(
        &self,
        auth: &A,
        query: &str,
    ) -> Result<SearchResults, ClientError> {
        let mut url = self.endpoint(&["search"])?;
        url.query_pairs_mut().append_pair("q", query);
        self.get_json(auth, url).await
    }

    /// `/api/qobuz/<segments..>` under the base url. Each segment is
    /// percent-encoded as one path segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let invalid = || ClientError::BaseUrl(self.baseUrl.clone());
        let mut url = Url::parse(&self.baseUrl).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|()| invalid())?
            .pop_if_empty()
            .extend(["api", "qobuz"])
            .extend(segments);
        Ok(url)
    }

    async fn get_json<R, A>(&self, auth: &A, url: Url) -> Result<R, ClientError>
    where
        R: DeserializeOwned,
        A: AuthService + Clone,
    {
        let path = url[Position::BeforePath..].to_string();
        let request = Request::get(url.as_str())
            .header(header::ACCEPT, "application/json")
            .body(Vec::new())?;

        debug!("GET {path}");
        let response = ServiceBuilder::new()
            .layer(AuthHeaderLayer::new(auth.clone()))
            .service(self.transport.clone())
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Transport(e.into()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status { status, path });
        }

        serde_json::from_slice(response.body()).map_err(|source| ClientError::Decode { path, source })
    }
}

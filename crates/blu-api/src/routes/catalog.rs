use axum::{
    extract::{Path, Query, State},
    middleware,
    routing::get,
    Json, Router,
};
use blu_types::{Album, Artist, BrowseSections, Discography, Playlist, SearchResults};
use serde::Deserialize;

use crate::error::ApiError;
use crate::middleware::auth::{require_api_auth, AppState};

#[derive(Deserialize)]
struct SearchParams {
    #[serde(default)]
    q: String,
}

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/qobuz/browse", get(get_browse))
        .route("/api/qobuz/album/:id", get(get_album))
        .route("/api/qobuz/artist/:id", get(get_artist))
        .route("/api/qobuz/artist/:id/discography", get(get_discography))
        .route("/api/qobuz/playlist/:id", get(get_playlist))
        .route("/api/qobuz/search", get(search))
        .route_layer(middleware::from_fn_with_state(state, require_api_auth))
}

async fn get_browse(State(state): State<AppState>) -> Json<BrowseSections> {
    Json(state.catalog.browse())
}

async fn get_album(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Album>, ApiError> {
    state.catalog.album(&id).map(Json).ok_or(ApiError::NotFound("album"))
}

async fn get_artist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Artist>, ApiError> {
    state.catalog.artist(&id).map(Json).ok_or(ApiError::NotFound("artist"))
}

async fn get_discography(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Discography>, ApiError> {
    state
        .catalog
        .discography(&id)
        .map(Json)
        .ok_or(ApiError::NotFound("artist"))
}

async fn get_playlist(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Playlist>, ApiError> {
    state
        .catalog
        .playlist(&id)
        .map(Json)
        .ok_or(ApiError::NotFound("playlist"))
}

async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<SearchResults> {
    Json(state.catalog.search(&params.q))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::api_router;
    use crate::middleware::auth::{test_state, AppState};
    use axum::{
        body::{to_bytes, Body},
        http::{Request, Response as HttpResponse, StatusCode},
        response::Response,
    };
    use blu_auth::RequestSession;
    use blu_catalog::{CatalogClient, CatalogStore, ClientError};
    use blu_types::{Album, SearchResults};
    use tower::{Service, ServiceExt};

    async fn call(uri: &str, token: Option<&str>, userId: Option<&str>) -> Response {
        let mut builder = Request::get(uri);
        if let Some(token) = token {
            builder = builder.header("x-auth-token", token);
        }
        if let Some(userId) = userId {
            builder = builder.header("x-user-id", userId);
        }
        api_router(test_state())
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn rejects_requests_without_token() {
        let response = call("/api/qobuz/browse", None, None).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

        let body: serde_json::Value = json(response).await;
        assert_eq!(body["error"], "unauthorized");
    }

    #[tokio::test]
    async fn rejects_unknown_token() {
        let response = call("/api/qobuz/browse", Some("tok-bogus"), None).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn rejects_token_sent_for_another_user() {
        let response = call("/api/qobuz/browse", Some("tok-1001"), Some("1002")).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn serves_album_for_registered_token() {
        let response = call("/api/qobuz/album/al-spaces", Some("tok-1001"), Some("1001")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let album: Album = json(response).await;
        assert_eq!(album.summary.artist_name, "Nils Frahm");
    }

    #[tokio::test]
    async fn unknown_album_is_not_found() {
        let response = call("/api/qobuz/album/al-missing", Some("tok-1001"), None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body: serde_json::Value = json(response).await;
        assert_eq!(body["error"], "album not found");
    }

    #[tokio::test]
    async fn search_decodes_query() {
        let response = call("/api/qobuz/search?q=late+night", Some("tok-1001"), None).await;
        let results: SearchResults = json(response).await;
        assert_eq!(results.query, "late night");
        assert_eq!(results.playlists[0].id, "pl-late-night");
    }

    fn spaced_catalog_state() -> AppState {
        let catalog = CatalogStore::from_json(
            r#"{
                "artists": [{ "id": "ar 1", "name": "Spaced Artist", "image_url": null, "biography": null }],
                "albums": [{
                    "id": "a 1", "title": "Spaced Album", "artist_id": "ar 1",
                    "artist_name": "Spaced Artist", "year": 2020, "cover_url": null,
                    "label": null, "genre": null, "tracks": []
                }]
            }"#,
        )
        .unwrap();
        AppState {
            catalog: Arc::new(catalog),
            ..test_state()
        }
    }

    /// Catalog client whose transport is the API router itself.
    fn client_for(
        state: AppState,
    ) -> CatalogClient<
        impl Service<Request<Vec<u8>>, Response = HttpResponse<Vec<u8>>, Error = axum::Error> + Clone,
    > {
        let router = api_router(state);
        let transport = tower::service_fn(move |request: Request<Vec<u8>>| {
            let router = router.clone();
            async move {
                let response = router
                    .oneshot(request.map(Body::from))
                    .await
                    .unwrap_or_else(|e| match e {});
                let (parts, body) = response.into_parts();
                let bytes = to_bytes(body, usize::MAX).await?;
                Ok::<_, axum::Error>(HttpResponse::from_parts(parts, bytes.to_vec()))
            }
        });
        CatalogClient::with_transport("http://console.local", transport)
    }

    #[tokio::test]
    async fn client_ids_with_spaces_reach_the_catalog() {
        let client = client_for(spaced_catalog_state());
        let session = RequestSession::new(Some("tok-1001".into()), Some("1001".into()), test_state().accounts);

        let album = client.album(&session, "a 1").await.unwrap();
        assert_eq!(album.summary.title, "Spaced Album");

        let discography = client.discography(&session, "ar 1").await.unwrap();
        assert_eq!(discography.albums[0].id, "a 1");
    }

    #[tokio::test]
    async fn client_without_session_is_rejected_by_the_api() {
        let client = client_for(test_state());
        let session = RequestSession::new(None, None, test_state().accounts);

        let err = client.browse(&session).await.unwrap_err();
        assert!(matches!(
            err,
            ClientError::Status { status: StatusCode::UNAUTHORIZED, .. }
        ));
    }

    #[tokio::test]
    async fn discography_lists_all_albums() {
        let response = call("/api/qobuz/artist/ar-miles/discography", Some("tok-1001"), None).await;
        let body: serde_json::Value = json(response).await;
        assert_eq!(body["albums"].as_array().unwrap().len(), 2);
    }
}

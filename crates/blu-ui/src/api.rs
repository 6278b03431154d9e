//! Catalog server functions. Each one calls the `/api/qobuz` endpoints with
//! the caller's cookie session, which the catalog client's header layer turns
//! into `X-Auth-Token`.

use blu_types::{Album, Artist, BrowseSections, Discography, Playlist, SearchResults};
use leptos::prelude::*;

#[cfg(feature = "ssr")]
use crate::session::ssr::{catalog_client, catalog_error, request_session};

#[server]
pub async fn get_browse() -> Result<BrowseSections, ServerFnError> {
    let session = request_session()?;
    catalog_client()?.browse(&session).await.map_err(catalog_error)
}

#[server]
pub async fn get_album(id: String) -> Result<Album, ServerFnError> {
    let session = request_session()?;
    catalog_client()?.album(&session, &id).await.map_err(catalog_error)
}

#[server]
pub async fn get_artist(id: String) -> Result<Artist, ServerFnError> {
    let session = request_session()?;
    catalog_client()?.artist(&session, &id).await.map_err(catalog_error)
}

#[server]
pub async fn get_discography(id: String) -> Result<Discography, ServerFnError> {
    let session = request_session()?;
    catalog_client()?
        .discography(&session, &id)
        .await
        .map_err(catalog_error)
}

#[server]
pub async fn get_playlist(id: String) -> Result<Playlist, ServerFnError> {
    let session = request_session()?;
    catalog_client()?.playlist(&session, &id).await.map_err(catalog_error)
}

#[server]
pub async fn search_catalog(query: String) -> Result<SearchResults, ServerFnError> {
    if query.trim().is_empty() {
        return Ok(SearchResults::default());
    }
    let session = request_session()?;
    catalog_client()?
        .search(&session, &query)
        .await
        .map_err(catalog_error)
}

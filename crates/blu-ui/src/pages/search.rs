use blu_types::{routes, SearchResults};
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::api::search_catalog;
use crate::components::{AlbumGrid, ErrorState, Loading, PageHeader, TrackList};
use crate::pages::use_server_data;

#[component]
pub fn SearchPage() -> impl IntoView {
    let query = use_query_map();
    let searchTerm = move || query.with(|q| q.get("q")).unwrap_or_default();
    let results = use_server_data(searchTerm, search_catalog);

    view! {
        <PageHeader title="Search" />
        <form class="search-form" method="get" action=routes::SEARCH>
            <input
                type="search"
                name="q"
                placeholder="Albums, artists, playlists, tracks"
                prop:value=searchTerm
            />
            <button type="submit" class="btn btn-primary">"Search"</button>
        </form>
        {move || {
            if searchTerm().trim().is_empty() {
                return view! { <p class="hint">"Type something to search the Qobuz catalog."</p> }
                    .into_any();
            }
            match results.get() {
                None => view! { <Loading message="Searching..." /> }.into_any(),
                Some(Err(e)) => view! { <ErrorState message=e /> }.into_any(),
                Some(Ok(results)) if results.is_empty() => {
                    view! { <p class="empty">{format!("Nothing found for \u{201C}{}\u{201D}.", results.query)}</p> }
                        .into_any()
                }
                Some(Ok(results)) => view! { <SearchResultsView results /> }.into_any(),
            }
        }}
    }
}

#[component]
fn SearchResultsView(results: SearchResults) -> impl IntoView {
    view! {
        {(!results.artists.is_empty())
            .then(|| {
                view! {
                    <section class="search-section">
                        <h2>"Artists"</h2>
                        <ul class="artist-list">
                            {results
                                .artists
                                .into_iter()
                                .map(|artist| {
                                    view! { <li><a href=routes::artist(&artist.id)>{artist.name}</a></li> }
                                })
                                .collect_view()}
                        </ul>
                    </section>
                }
            })}
        {(!results.albums.is_empty())
            .then(|| {
                view! {
                    <section class="search-section">
                        <h2>"Albums"</h2>
                        <AlbumGrid albums=results.albums />
                    </section>
                }
            })}
        {(!results.playlists.is_empty())
            .then(|| {
                view! {
                    <section class="search-section">
                        <h2>"Playlists"</h2>
                        <ul class="playlist-list">
                            {results
                                .playlists
                                .into_iter()
                                .map(|playlist| {
                                    view! { <li><a href=routes::playlist(&playlist.id)>{playlist.name}</a></li> }
                                })
                                .collect_view()}
                        </ul>
                    </section>
                }
            })}
        {(!results.tracks.is_empty())
            .then(|| {
                view! {
                    <section class="search-section">
                        <h2>"Tracks"</h2>
                        <TrackList tracks=results.tracks show_artist=true />
                    </section>
                }
            })}
    }
}

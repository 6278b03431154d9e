use blu_types::{format_duration, routes, Album};
use leptos::prelude::*;

use crate::api::get_album;
use crate::components::{ErrorState, Loading, TrackList};
use crate::pages::{route_param, use_server_data};

#[component]
pub fn AlbumPage() -> impl IntoView {
    let albumId = route_param("id");
    let album = use_server_data(albumId, get_album);

    move || match album.get() {
        None => view! { <Loading message="Loading album..." /> }.into_any(),
        Some(Err(e)) => view! { <ErrorState message=e /> }.into_any(),
        Some(Ok(album)) => view! { <AlbumDetail album /> }.into_any(),
    }
}

#[component]
fn AlbumDetail(album: Album) -> impl IntoView {
    let duration = format_duration(album.duration_secs());
    let trackCount = album.tracks.len();
    let summary = album.summary;
    let meta = [
        summary.year.map(|y| y.to_string()),
        album.genre,
        album.label,
        Some(format!("{trackCount} tracks, {duration}")),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" \u{00B7} ");

    view! {
        <div class="album-header">
            {summary.cover_url.map(|url| view! { <img class="album-cover-large" src=url /> })}
            <div>
                <h1>{summary.title}</h1>
                <a href=routes::artist(&summary.artist_id) class="album-artist">
                    {summary.artist_name}
                </a>
                <p class="subtitle">{meta}</p>
            </div>
        </div>
        <TrackList tracks=album.tracks />
    }
}

use leptos::prelude::*;

use crate::api::get_playlist;
use crate::components::{ErrorState, Loading, PageHeader, TrackList};
use crate::pages::{route_param, use_server_data};

#[component]
pub fn PlaylistPage() -> impl IntoView {
    let playlistId = route_param("id");
    let playlist = use_server_data(playlistId, get_playlist);

    move || match playlist.get() {
        None => view! { <Loading message="Loading playlist..." /> }.into_any(),
        Some(Err(e)) => view! { <ErrorState message=e /> }.into_any(),
        Some(Ok(playlist)) => {
            let subtitle = format!("by {} \u{00B7} {} tracks", playlist.owner, playlist.tracks.len());
            view! {
                <PageHeader title=playlist.name subtitle />
                {playlist.description.map(|text| view! { <p class="description">{text}</p> })}
                <TrackList tracks=playlist.tracks show_artist=true />
            }
                .into_any()
        }
    }
}

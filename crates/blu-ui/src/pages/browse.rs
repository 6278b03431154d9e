use blu_types::{routes, BrowseSections};
use leptos::prelude::*;

use crate::api::get_browse;
use crate::components::{AlbumGrid, ErrorState, Loading, PageHeader};
use crate::pages::use_server_data;

#[component]
pub fn BrowsePage() -> impl IntoView {
    let sections = use_server_data(|| (), |_| get_browse());

    view! {
        <PageHeader title="Browse" subtitle="New releases and editorial picks from Qobuz" />
        {move || match sections.get() {
            None => view! { <Loading message="Loading Qobuz..." /> }.into_any(),
            Some(Err(e)) => view! { <ErrorState message=e /> }.into_any(),
            Some(Ok(sections)) => view! { <BrowseContent sections /> }.into_any(),
        }}
    }
}

#[component]
fn BrowseContent(sections: BrowseSections) -> impl IntoView {
    view! {
        <section class="browse-section">
            <h2>"New releases"</h2>
            <AlbumGrid albums=sections.new_releases />
        </section>
        <section class="browse-section">
            <h2>"Featured playlists"</h2>
            <ul class="playlist-list">
                {sections
                    .featured_playlists
                    .into_iter()
                    .map(|playlist| {
                        view! {
                            <li>
                                <a href=routes::playlist(&playlist.id)>{playlist.name}</a>
                                <span class="playlist-meta">
                                    {format!("{} \u{00B7} {} tracks", playlist.owner, playlist.track_count)}
                                </span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
        <section class="browse-section">
            <h2>"Artists"</h2>
            <ul class="artist-list">
                {sections
                    .artists
                    .into_iter()
                    .map(|artist| {
                        view! {
                            <li>
                                <a href=routes::artist(&artist.id)>{artist.name}</a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

use blu_types::routes;
use leptos::prelude::*;

use crate::api::get_artist;
use crate::components::{AlbumGrid, ErrorState, Loading, PageHeader};
use crate::pages::{route_param, use_server_data};

#[component]
pub fn ArtistPage() -> impl IntoView {
    let artistId = route_param("id");
    let artist = use_server_data(artistId, get_artist);

    move || match artist.get() {
        None => view! { <Loading message="Loading artist..." /> }.into_any(),
        Some(Err(e)) => view! { <ErrorState message=e /> }.into_any(),
        Some(Ok(artist)) => {
            let discographyHref = routes::discography(&artist.summary.id);
            let showAll = artist.album_count > artist.albums.len();
            view! {
                <PageHeader title=artist.summary.name />
                {artist.biography.map(|bio| view! { <p class="biography">{bio}</p> })}
                <h2>"Albums"</h2>
                <AlbumGrid albums=artist.albums />
                <a href=discographyHref class="see-all">
                    {if showAll {
                        format!("Full discography ({} albums)", artist.album_count)
                    } else {
                        "Discography".to_string()
                    }}
                </a>
            }
                .into_any()
        }
    }
}

use blu_types::routes;
use leptos::prelude::*;

use crate::api::get_discography;
use crate::components::{AlbumGrid, ErrorState, Loading, PageHeader};
use crate::pages::{route_param, use_server_data};

#[component]
pub fn DiscographyPage() -> impl IntoView {
    let artistId = route_param("id");
    let discography = use_server_data(artistId, get_discography);

    move || match discography.get() {
        None => view! { <Loading message="Loading discography..." /> }.into_any(),
        Some(Err(e)) => view! { <ErrorState message=e /> }.into_any(),
        Some(Ok(discography)) => {
            let subtitle = format!("{} albums", discography.albums.len());
            view! {
                <a href=routes::artist(&discography.artist.id) class="back-link">
                    {format!("\u{2190} {}", discography.artist.name)}
                </a>
                <PageHeader title="Discography" subtitle />
                <AlbumGrid albums=discography.albums />
            }
                .into_any()
        }
    }
}

use blu_types::{routes, AlbumSummary};
use leptos::prelude::*;

/// Cover grid linking each album to its page.
#[component]
pub fn AlbumGrid(albums: Vec<AlbumSummary>) -> impl IntoView {
    if albums.is_empty() {
        return view! { <p class="empty">"No albums."</p> }.into_any();
    }

    view! {
        <div class="album-grid">
            {albums
                .into_iter()
                .map(|album| {
                    let href = routes::album(&album.id);
                    let artistHref = routes::artist(&album.artist_id);
                    let year = album.year.map(|y| y.to_string()).unwrap_or_default();
                    view! {
                        <div class="album-card">
                            <a href=href.clone() class="album-cover">
                                {match album.cover_url {
                                    Some(url) => view! { <img src=url alt=album.title.clone() /> }.into_any(),
                                    None => view! { <div class="cover-placeholder">"\u{266B}"</div> }.into_any(),
                                }}
                            </a>
                            <a href=href class="album-title">{album.title}</a>
                            <a href=artistHref class="album-artist">{album.artist_name}</a>
                            <span class="album-year">{year}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
    .into_any()
}

use blu_types::{format_duration, Track};
use leptos::prelude::*;

#[component]
pub fn TrackList(
    tracks: Vec<Track>,
    /// Show each track's artist (playlists and search results mix artists)
    #[prop(optional)]
    show_artist: bool,
) -> impl IntoView {
    view! {
        <table class="track-list">
            <tbody>
                {tracks
                    .into_iter()
                    .enumerate()
                    .map(|(index, track)| {
                        let number = track.track_number.unwrap_or(index as u32 + 1);
                        view! {
                            <tr class="track-row">
                                <td class="track-number">{number}</td>
                                <td class="track-title">
                                    {track.title}
                                    {track.hires.then(|| view! { <span class="badge-hires">"Hi-Res"</span> })}
                                </td>
                                {show_artist.then(|| view! { <td class="track-artist">{track.artist_name}</td> })}
                                <td class="track-duration">{format_duration(track.duration_secs)}</td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist_name: String,
    pub duration_secs: u32,
    pub track_number: Option<u32>,
    #[serde(default)]
    pub hires: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AlbumSummary {
    pub id: String,
    pub title: String,
    pub artist_id: String,
    pub artist_name: String,
    pub year: Option<u16>,
    pub cover_url: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Album {
    #[serde(flatten)]
    pub summary: AlbumSummary,
    pub label: Option<String>,
    pub genre: Option<String>,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl Album {
    pub fn duration_secs(&self) -> u32 {
        self.tracks.iter().map(|t| t.duration_secs).sum()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ArtistSummary {
    pub id: String,
    pub name: String,
    pub image_url: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Artist {
    #[serde(flatten)]
    pub summary: ArtistSummary,
    pub biography: Option<String>,
    pub albums: Vec<AlbumSummary>,
    pub album_count: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Discography {
    pub artist: ArtistSummary,
    pub albums: Vec<AlbumSummary>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlaylistSummary {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub track_count: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    pub owner: String,
    pub description: Option<String>,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl Playlist {
    pub fn summary(&self) -> PlaylistSummary {
        PlaylistSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            owner: self.owner.clone(),
            track_count: self.tracks.len(),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct BrowseSections {
    pub new_releases: Vec<AlbumSummary>,
    pub featured_playlists: Vec<PlaylistSummary>,
    pub artists: Vec<ArtistSummary>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResults {
    pub query: String,
    pub albums: Vec<AlbumSummary>,
    pub artists: Vec<ArtistSummary>,
    pub playlists: Vec<PlaylistSummary>,
    pub tracks: Vec<Track>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.albums.is_empty()
            && self.artists.is_empty()
            && self.playlists.is_empty()
            && self.tracks.is_empty()
    }
}

/// Formats a duration as `m:ss`, or `h:mm:ss` past the hour.
pub fn format_duration(totalSecs: u32) -> String {
    let hours = totalSecs / 3600;
    let minutes = (totalSecs % 3600) / 60;
    let seconds = totalSecs % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn album_flattens_summary_fields() {
        let json = r#"{
            "id": "a1", "title": "Kind of Blue", "artist_id": "r1",
            "artist_name": "Miles Davis", "year": 1959, "cover_url": null,
            "label": "Columbia", "genre": "Jazz",
            "tracks": [
                {"id": "t1", "title": "So What", "artist_name": "Miles Davis",
                 "duration_secs": 562, "track_number": 1}
            ]
        }"#;
        let album: Album = serde_json::from_str(json).unwrap();
        assert_eq!(album.summary.title, "Kind of Blue");
        assert_eq!(album.tracks.len(), 1);
        assert!(!album.tracks[0].hires);
        assert_eq!(album.duration_secs(), 562);
    }

    #[test]
    fn formats_durations() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(562), "9:22");
        assert_eq!(format_duration(3725), "1:02:05");
    }
}

use blu_types::{
    Album, AlbumSummary, Artist, ArtistSummary, BrowseSections, Discography, Playlist,
    SearchResults, Track,
};
use serde::Deserialize;
use tracing::{info, warn};

const DEMO_CATALOG: &str = include_str!("demo_catalog.json");

const ARTIST_PAGE_ALBUMS: usize = 6;
const BROWSE_SECTION_LEN: usize = 12;
const SEARCH_SECTION_LEN: usize = 20;

#[derive(Deserialize, Clone, Debug, Default)]
struct CatalogFile {
    #[serde(default)]
    artists: Vec<ArtistRecord>,
    #[serde(default)]
    albums: Vec<Album>,
    #[serde(default)]
    playlists: Vec<Playlist>,
}

#[derive(Deserialize, Clone, Debug)]
struct ArtistRecord {
    #[serde(flatten)]
    summary: ArtistSummary,
    biography: Option<String>,
}

/// In-memory Qobuz catalog served by the API.
#[derive(Clone, Debug, Default)]
pub struct CatalogStore {
    artists: Vec<ArtistRecord>,
    albums: Vec<Album>,
    playlists: Vec<Playlist>,
}

impl CatalogStore {
    pub async fn load(path: &str) -> CatalogStore {
        match read_catalog(path).await {
            Ok(store) => {
                info!(
                    "loaded catalog from {path}: {} artists, {} albums, {} playlists",
                    store.artists.len(),
                    store.albums.len(),
                    store.playlists.len()
                );
                store
            }
            Err(e) => {
                warn!("catalog {path} unavailable, serving demo catalog: {e}");
                Self::demo()
            }
        }
    }

    pub fn demo() -> CatalogStore {
        Self::from_json(DEMO_CATALOG).unwrap_or_default()
    }

    pub fn from_json(json: &str) -> Result<CatalogStore, serde_json::Error> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Ok(CatalogStore {
            artists: file.artists,
            albums: file.albums,
            playlists: file.playlists,
        })
    }

    pub fn browse(&self) -> BrowseSections {
        let mut newReleases = self.album_summaries(|_| true);
        sort_newest_first(&mut newReleases);
        newReleases.truncate(BROWSE_SECTION_LEN);

        BrowseSections {
            new_releases: newReleases,
            featured_playlists: self
                .playlists
                .iter()
                .take(BROWSE_SECTION_LEN)
                .map(Playlist::summary)
                .collect(),
            artists: self
                .artists
                .iter()
                .take(BROWSE_SECTION_LEN)
                .map(|a| a.summary.clone())
                .collect(),
        }
    }

    pub fn album(&self, id: &str) -> Option<Album> {
        self.albums.iter().find(|a| a.summary.id == id).cloned()
    }

    pub fn artist(&self, id: &str) -> Option<Artist> {
        let Discography { artist, albums } = self.discography(id)?;
        let biography = self
            .artists
            .iter()
            .find(|a| a.summary.id == id)
            .and_then(|a| a.biography.clone());

        Some(Artist {
            summary: artist,
            biography,
            album_count: albums.len(),
            albums: albums.into_iter().take(ARTIST_PAGE_ALBUMS).collect(),
        })
    }

    /// All of an artist's albums, newest first; undated albums go last.
    pub fn discography(&self, artistId: &str) -> Option<Discography> {
        let artist = self.artists.iter().find(|a| a.summary.id == artistId)?;
        let mut albums = self.album_summaries(|a| a.summary.artist_id == artistId);
        sort_newest_first(&mut albums);

        Some(Discography {
            artist: artist.summary.clone(),
            albums,
        })
    }

    pub fn playlist(&self, id: &str) -> Option<Playlist> {
        self.playlists.iter().find(|p| p.id == id).cloned()
    }

    /// Case-insensitive substring search over titles and names.
    pub fn search(&self, query: &str) -> SearchResults {
        let trimmed = query.trim();
        let mut results = SearchResults {
            query: trimmed.to_string(),
            ..SearchResults::default()
        };
        if trimmed.is_empty() {
            return results;
        }

        let needle = trimmed.to_lowercase();
        let matches = |text: &str| text.to_lowercase().contains(&needle);

        results.albums = self
            .album_summaries(|a| matches(&a.summary.title) || matches(&a.summary.artist_name))
            .into_iter()
            .take(SEARCH_SECTION_LEN)
            .collect();
        results.artists = self
            .artists
            .iter()
            .filter(|a| matches(&a.summary.name))
            .take(SEARCH_SECTION_LEN)
            .map(|a| a.summary.clone())
            .collect();
        results.playlists = self
            .playlists
            .iter()
            .filter(|p| matches(&p.name))
            .take(SEARCH_SECTION_LEN)
            .map(Playlist::summary)
            .collect();
        results.tracks = self
            .albums
            .iter()
            .flat_map(|a| a.tracks.iter())
            .filter(|t| matches(&t.title))
            .take(SEARCH_SECTION_LEN)
            .cloned()
            .collect::<Vec<Track>>();

        results
    }

    fn album_summaries(&self, filter: impl Fn(&Album) -> bool) -> Vec<AlbumSummary> {
        self.albums
            .iter()
            .filter(|a| filter(*a))
            .map(|a| a.summary.clone())
            .collect()
    }
}

async fn read_catalog(path: &str) -> Result<CatalogStore, String> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| format!("failed to read {path}: {e}"))?;

    CatalogStore::from_json(&contents).map_err(|e| format!("failed to parse {path}: {e}"))
}

fn sort_newest_first(albums: &mut [AlbumSummary]) {
    albums.sort_by(|a, b| b.year.cmp(&a.year));
}

pub mod album_grid;
pub mod layout;
pub mod nav;
pub mod page_header;
pub mod status;
pub mod track_list;

pub use album_grid::AlbumGrid;
pub use layout::QobuzLayout;
pub use nav::Nav;
pub use page_header::PageHeader;
pub use status::{ErrorState, Loading};
pub use track_list::TrackList;

#![allow(non_snake_case)]

pub mod client;
pub mod store;
pub mod transport;

pub use client::{CatalogClient, ClientError};
pub use store::CatalogStore;
pub use transport::HttpTransport;

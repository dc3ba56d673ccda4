//! # zxart
//!
//! Async client for the zxart.ee API: ZX Spectrum music, pictures, authors
//! and their aliases.
//!
//! - Filter options translated into the API's `key:value` path format
//! - Typed records with unescaped titles, decoded file names, parsed
//!   timecodes, dates and timestamps
//! - Configurable defaults for language, page size and sort order

pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod types;

pub use client::ZxArtClient;
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use models::{
    Author, AuthorAlias, Entity, EntityBase, Image, ImportIds, MediaBase, Page, ProductCategory,
    Response, ResponseData, Tune,
};
pub use query::{OptionValue, Options};
pub use types::{EntityKind, Language, SortDirection, SortField, Sorting};

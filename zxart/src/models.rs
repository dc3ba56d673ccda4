//! Records returned by the zxart API
//!
//! Shared fields are embedded with `#[serde(flatten)]`: every record carries an
//! [`EntityBase`], tunes and images additionally a [`MediaBase`]. Wire names and
//! scalar decoding are declared per field.

use std::time::Duration;

use chrono::{DateTime, Local, NaiveDate};
use rust_decimal::Decimal;
use serde::Deserialize;
use url::Url;

use crate::codec::de;
use crate::types::EntityKind;

/// Fields shared by every entity
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EntityBase {
    /// Identifier, unique within the entity kind
    pub id: i64,
    /// Display title with HTML entities decoded
    #[serde(default, deserialize_with = "de::opt_html")]
    pub title: Option<String>,
    /// Page on zxart.ee describing the record
    pub url: Url,
    /// Upload time, converted from Unix seconds to local time
    #[serde(rename = "dateCreated", deserialize_with = "de::timestamp")]
    pub created: DateTime<Local>,
    /// Last edit, same encoding as `created`
    #[serde(rename = "dateModified", deserialize_with = "de::timestamp")]
    pub modified: DateTime<Local>,
}

/// Fields shared by tunes and images
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MediaBase {
    #[serde(flatten)]
    pub entity: EntityBase,
    /// Event (party) the work was released at
    #[serde(rename = "partyId", default)]
    pub party_id: Option<i64>,
    /// Competition the work took part in
    #[serde(default)]
    pub compo: Option<String>,
    /// Place in the competition, 1 is the winner
    #[serde(rename = "partyPlace", default)]
    pub party_place: Option<i64>,
    /// Authors and aliases credited for the work
    #[serde(rename = "authorIds", default)]
    pub author_ids: Vec<i64>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Format or machine type, e.g. `ay`, `beeper`, `standard`
    #[serde(rename = "type", default)]
    pub media_type: Option<String>,
    /// Average vote
    ///
    /// The server sends it as a decimal string (`"4.25"`); it is kept exact.
    pub rating: Decimal,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "de::opt_html")]
    pub description: Option<String>,
    /// Download link of the source file, percent-decoded
    #[serde(rename = "originalUrl", default, deserialize_with = "de::opt_url_decoded")]
    pub original_url: Option<String>,
}

/// Music track
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Tune {
    #[serde(flatten)]
    pub media: MediaBase,
    /// Title stored inside the tune file itself
    #[serde(rename = "internalTitle", default, deserialize_with = "de::opt_html")]
    pub title_internal: Option<String>,
    /// Playing time parsed from `[[h:]m:]s[.fraction]`
    #[serde(rename = "time", default, deserialize_with = "de::opt_duration")]
    pub duration: Option<Duration>,
    #[serde(default)]
    pub plays: Option<i64>,
    /// Name of the uploaded source file
    #[serde(rename = "originalFileName", default, deserialize_with = "de::opt_url_decoded")]
    pub filename: Option<String>,
    /// Server-side MP3 rendering
    #[serde(rename = "mp3FilePath", default, deserialize_with = "de::opt_url")]
    pub mp3_url: Option<Url>,
}

/// Picture
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Image {
    #[serde(flatten)]
    pub media: MediaBase,
    #[serde(rename = "imageUrl", default, deserialize_with = "de::opt_url")]
    pub image_url: Option<Url>,
    #[serde(default)]
    pub views: Option<i64>,
}

/// Product category
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductCategory {
    pub id: i64,
    #[serde(deserialize_with = "de::html")]
    pub title: String,
}

/// Identifiers of the same person on other ZX Spectrum sites
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ImportIds {
    /// zxaaa.net
    #[serde(rename = "3a", default)]
    pub zxaaa: Option<String>,
    /// demozoo.org
    #[serde(rename = "dzoo", default)]
    pub demozoo: Option<String>,
    /// pouet.net
    #[serde(default)]
    pub pouet: Option<String>,
    /// spectrumcomputing.co.uk
    #[serde(rename = "sc", default)]
    pub spectrum_computing: Option<String>,
    /// worldofspectrum.net
    #[serde(rename = "wos", default)]
    pub world_of_spectrum: Option<String>,
    /// vtrd.in
    #[serde(rename = "vt", default)]
    pub vtrd: Option<String>,
    /// zxdemo.org
    #[serde(rename = "zxd", default)]
    pub zxdemo: Option<String>,
    /// speccy.info
    #[serde(rename = "swiki", default)]
    pub speccy: Option<String>,
}

/// Author (musician, artist, coder)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Author {
    #[serde(flatten)]
    pub entity: EntityBase,
    #[serde(rename = "realName", default)]
    pub real_name: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    /// Pictures credited to the author
    #[serde(rename = "picturesQuantity", default)]
    pub num_images: u32,
    /// Tunes credited to the author
    #[serde(rename = "tunesQuantity", default)]
    pub num_tunes: u32,
    /// Alias identifiers
    #[serde(default)]
    pub aliases: Option<Vec<i64>>,
    #[serde(rename = "importIds", default)]
    pub import_ids: Option<ImportIds>,
}

/// Pseudonym an author used for a period of time
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthorAlias {
    #[serde(flatten)]
    pub entity: EntityBase,
    /// Author the alias belongs to
    #[serde(rename = "authorId", default)]
    pub author_id: Option<i64>,
    #[serde(rename = "importIds", default)]
    pub import_ids: Option<ImportIds>,
    /// First day the alias was in use (`DD.MM.YYYY` on the wire)
    #[serde(rename = "startDate", default, deserialize_with = "de::opt_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "endDate", default, deserialize_with = "de::opt_date")]
    pub end_date: Option<NaiveDate>,
}

/// Per-kind record lists; the server fills only the requested one
///
/// Groups, products and releases have no typed model and stay raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResponseData {
    #[serde(default)]
    pub author: Option<Vec<Author>>,
    #[serde(rename = "authorAlias", default)]
    pub author_alias: Option<Vec<AuthorAlias>>,
    #[serde(default)]
    pub group: Option<Vec<serde_json::Value>>,
    #[serde(rename = "groupAlias", default)]
    pub group_alias: Option<Vec<serde_json::Value>>,
    #[serde(rename = "zxMusic", default)]
    pub tunes: Option<Vec<Tune>>,
    #[serde(rename = "zxProd", default)]
    pub products: Option<Vec<serde_json::Value>>,
    #[serde(rename = "zxRelease", default)]
    pub releases: Option<Vec<serde_json::Value>>,
    #[serde(rename = "zxPicture", default)]
    pub images: Option<Vec<Image>>,
    #[serde(rename = "zxProdCategory", default)]
    pub categories: Option<Vec<ProductCategory>>,
}

/// Response envelope
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Response {
    #[serde(rename = "responseStatus")]
    pub status: String,
    /// Records matching the query in the whole database
    #[serde(rename = "totalAmount")]
    pub total: u64,
    /// Offset of the first returned record
    pub start: u64,
    /// Page size the server applied
    pub limit: u64,
    #[serde(rename = "responseData", default)]
    pub data: ResponseData,
}

/// One page of typed records plus the envelope's pagination counters
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Matching records in the whole database, not just this page
    pub total: u64,
    pub start: u64,
    pub limit: u64,
    pub items: Vec<T>,
}

/// Record type the client can fetch, bound to its entity kind
pub trait Entity: Sized {
    /// Kind named in the `export:` segment
    const KIND: EntityKind;

    /// Take this kind's list out of the response data
    fn select(data: ResponseData) -> Option<Vec<Self>>;
}

impl Entity for Author {
    const KIND: EntityKind = EntityKind::Author;

    fn select(data: ResponseData) -> Option<Vec<Self>> {
        data.author
    }
}

impl Entity for AuthorAlias {
    const KIND: EntityKind = EntityKind::AuthorAlias;

    fn select(data: ResponseData) -> Option<Vec<Self>> {
        data.author_alias
    }
}

impl Entity for ProductCategory {
    const KIND: EntityKind = EntityKind::ProductCategory;

    fn select(data: ResponseData) -> Option<Vec<Self>> {
        data.categories
    }
}

impl Entity for Tune {
    const KIND: EntityKind = EntityKind::Tune;

    fn select(data: ResponseData) -> Option<Vec<Self>> {
        data.tunes
    }
}

impl Entity for Image {
    const KIND: EntityKind = EntityKind::Image;

    fn select(data: ResponseData) -> Option<Vec<Self>> {
        data.images
    }
}

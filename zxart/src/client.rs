//! zxart.ee API client
//!
//! One GET per call: options are merged with the configured defaults,
//! translated into path segments, and the JSON envelope is decoded into the
//! typed records of the requested entity kind. No retries, no caching.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::config::ClientConfig;
use crate::models::{Author, AuthorAlias, Entity, Image, Page, ProductCategory, Response, Tune};
use crate::query::{path_segments, Options};
use crate::types::EntityKind;
use crate::{Error, Result};

/// `responseStatus` of a successful envelope
pub const SUCCESS_STATUS: &str = "success";

/// zxart API client
///
/// Cloning is cheap and clones share the connection pool. The transport is
/// released when the last clone is dropped; a pool supplied through
/// [`ZxArtClient::with_http_client`] stays usable by its other owners.
///
/// # Example
/// ```rust,no_run
/// use zxart::{Options, ZxArtClient};
///
/// # async fn run() -> zxart::Result<()> {
/// let client = ZxArtClient::new()?;
/// let tunes = client
///     .tunes(Options::new().author_id(5).tags_include(["AY"]))
///     .await?;
/// for tune in tunes {
///     println!("{:?} {:?}", tune.media.entity.title, tune.duration);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ZxArtClient {
    http_client: Client,
    config: ClientConfig,
}

impl ZxArtClient {
    /// Client for the public API with default settings
    pub fn new() -> Result<Self> {
        Self::from_config(ClientConfig::default())
    }

    /// Create a client that owns its own reqwest transport
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder.build()?;

        Ok(Self {
            http_client,
            config,
        })
    }

    /// Create a client on top of an existing reqwest Client.
    ///
    /// Transport settings in `config` are ignored; the supplied client's own
    /// user agent and timeouts apply.
    pub fn with_http_client(http_client: Client, config: ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            http_client,
            config,
        })
    }

    /// Settings the client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Full request URL for an export of `E` with `options`
    pub fn request_url<E: Entity>(&self, options: &Options) -> Result<Url> {
        self.build_url(E::KIND, options.clone())
    }

    fn build_url(&self, kind: EntityKind, mut options: Options) -> Result<Url> {
        options.insert_default("language", self.config.language);
        options.insert_default("limit", self.config.limit);
        options.insert_default("order", self.config.sorting);

        let segments = path_segments(kind, &options)?;

        let mut url = self.config.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                Error::Config(format!(
                    "base URL {} cannot take path segments",
                    self.config.base_url
                ))
            })?
            .pop_if_empty()
            .extend(&segments);
        Ok(url)
    }

    /// Fetch one page of `E` together with the pagination counters
    pub async fn fetch_page<E: Entity>(&self, options: Options) -> Result<Page<E>> {
        let url = self.build_url(E::KIND, options)?;

        debug!(entity = %E::KIND, url = %url, "Querying zxart API");

        let response = self.http_client.get(url).send().await?;
        let envelope = self.handle_response(response).await?;
        let items = E::select(envelope.data).unwrap_or_default();

        debug!(
            entity = %E::KIND,
            total = envelope.total,
            start = envelope.start,
            count = items.len(),
            "Retrieved records from zxart API"
        );

        Ok(Page {
            total: envelope.total,
            start: envelope.start,
            limit: envelope.limit,
            items,
        })
    }

    /// Fetch the records of `E` matching `options`
    pub async fn fetch<E: Entity>(&self, options: Options) -> Result<Vec<E>> {
        Ok(self.fetch_page(options).await?.items)
    }

    pub async fn authors(&self, options: Options) -> Result<Vec<Author>> {
        self.fetch(options).await
    }

    pub async fn author_aliases(&self, options: Options) -> Result<Vec<AuthorAlias>> {
        self.fetch(options).await
    }

    pub async fn categories(&self, options: Options) -> Result<Vec<ProductCategory>> {
        self.fetch(options).await
    }

    pub async fn tunes(&self, options: Options) -> Result<Vec<Tune>> {
        self.fetch(options).await
    }

    pub async fn images(&self, options: Options) -> Result<Vec<Image>> {
        self.fetch(options).await
    }

    async fn handle_response(&self, response: reqwest::Response) -> Result<Response> {
        let status = response.status();
        let body = response.text().await?;
        // The envelope decides the outcome whenever the body carries one
        if !status.is_success() && response_status(&body).is_err() {
            return Err(Error::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }
        parse_response(&body)
    }
}

/// `responseStatus` of a body, whatever its JSON type
fn response_status(body: &str) -> Result<serde_json::Value> {
    let value: serde_json::Value = deserialize(body)?;
    value
        .get("responseStatus")
        .cloned()
        .ok_or_else(|| Error::MalformedResponse {
            path: ".".to_string(),
            source: serde::de::Error::missing_field("responseStatus"),
        })
}

/// Decode a response body into the envelope.
///
/// The status is checked before the data, so a failed envelope is reported
/// as [`Error::InvalidResponse`] whatever its `responseData` holds. A status
/// that is not a string (`false`, `null`) counts as failed too.
pub fn parse_response(body: &str) -> Result<Response> {
    let status = response_status(body)?;
    if status.as_str() != Some(SUCCESS_STATUS) {
        let status = match status {
            serde_json::Value::String(text) => text,
            other => other.to_string(),
        };
        warn!(status = %status, "zxart API returned unsuccessful status");
        return Err(Error::InvalidResponse(status));
    }
    deserialize(body)
}

fn deserialize<T: DeserializeOwned>(body: &str) -> Result<T> {
    let deserializer = &mut serde_json::Deserializer::from_str(body);
    serde_path_to_error::deserialize(deserializer).map_err(|e| Error::MalformedResponse {
        path: e.path().to_string(),
        source: e.into_inner(),
    })
}

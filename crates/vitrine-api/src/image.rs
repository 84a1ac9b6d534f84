// Image preloading
//
// A preload is a full fetch of the image body. Signage devices sit behind
// slow venue links, so callers are expected to preload one image at a time;
// this client never fans out on its own.

use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Fetches images ahead of display so a rotation step never shows a
/// half-loaded slide.
pub struct ImageClient {
    http: reqwest::Client,
}

impl ImageClient {
    /// Create a new image client from a `TransportConfig`.
    pub fn new(transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http })
    }

    /// Create an image client with a pre-built `reqwest::Client`.
    pub fn from_reqwest(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Fetch the image at `url`, failing on HTTP errors or an empty body.
    ///
    /// The body itself is discarded -- by the time the display asks for the
    /// image it is expected to be in the HTTP cache of whatever renders it.
    pub async fn fetch(&self, url: &str) -> Result<(), Error> {
        let parsed: Url = url.parse()?;
        debug!("GET {parsed}");

        let resp = self.http.get(parsed).send().await.map_err(Error::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let bytes = resp.bytes().await.map_err(Error::Transport)?;
        if bytes.is_empty() {
            return Err(Error::EmptyImage { url: url.to_owned() });
        }

        Ok(())
    }
}

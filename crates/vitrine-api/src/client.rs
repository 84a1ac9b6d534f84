// Directory service HTTP client
//
// Wraps `reqwest::Client` with query-parameter construction for the
// branch/tv identifiers and JSON body handling. The two endpoints are thin:
// the interesting sequencing lives in vitrine-core.

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;
use crate::types::{ConfigurationResponse, PropertiesResponse};

/// HTTP client for the remote directory service.
///
/// Both endpoints are scoped by the optional `branchId`/`tvId` query
/// parameters; omitted identifiers are simply not sent.
pub struct DirectoryClient {
    http: reqwest::Client,
    base_url: Url,
}

impl DirectoryClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// The `base_url` should be the service root
    /// (e.g. `https://directory.example.com/api/v1/`).
    pub fn new(base_url: Url, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Ok(Self { http, base_url })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    ///
    /// Use this in tests or when sharing a client across components.
    pub fn from_reqwest(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)?;
        Ok(Self { http, base_url })
    }

    /// The service base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch the display configuration for the given identifiers.
    pub async fn fetch_configuration(
        &self,
        branch_id: Option<u64>,
        tv_id: Option<&str>,
    ) -> Result<ConfigurationResponse, Error> {
        let url = self.endpoint_url("configuration", branch_id, tv_id)?;
        self.get_json(url).await
    }

    /// Fetch the property list for the given identifiers.
    pub async fn fetch_properties(
        &self,
        branch_id: Option<u64>,
        tv_id: Option<&str>,
    ) -> Result<PropertiesResponse, Error> {
        let url = self.endpoint_url("properties", branch_id, tv_id)?;
        self.get_json(url).await
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Build `{base}/{path}?branchId=..&tvId=..`, omitting absent identifiers.
    fn endpoint_url(
        &self,
        path: &str,
        branch_id: Option<u64>,
        tv_id: Option<&str>,
    ) -> Result<Url, Error> {
        let mut url = self.base_url.join(path)?;
        if branch_id.is_some() || tv_id.is_some() {
            let mut pairs = url.query_pairs_mut();
            if let Some(branch) = branch_id {
                pairs.append_pair("branchId", &branch.to_string());
            }
            if let Some(tv) = tv_id {
                pairs.append_pair("tvId", tv);
            }
        }
        Ok(url)
    }

    /// Send a GET request and deserialize the JSON body.
    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {url}");

        let resp = self.http.get(url).send().await.map_err(Error::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                url: resp.url().to_string(),
            });
        }

        let body = resp.text().await.map_err(Error::Transport)?;
        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }
}

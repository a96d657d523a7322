//! Low-level HTTP plumbing shared by every resource implementation.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::api::errors::{ApiError, ApiResult};
use crate::models::config::ServerConfig;

const USER_AGENT: &str = concat!("hotel-admin/", env!("CARGO_PKG_VERSION"));

/// HTTP-backed implementation of the resource traits.
///
/// Holds no cache and no session state between calls; each request carries a
/// JSON content type and is aborted once the configured deadline elapses.
#[derive(Clone, Debug)]
pub struct RestApi {
    http: Client,
    base_url: String,
}

impl RestApi {
    pub fn new(base_url: &str, timeout: Duration) -> ApiResult<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &ServerConfig) -> ApiResult<Self> {
        Self::new(
            &config.api_base_url,
            Duration::from_millis(config.api_timeout_ms),
        )
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turns any non-2xx response into [`ApiError::Http`], preserving the
    /// body unparsed for downstream structured-error decoding.
    async fn success(res: reqwest::Response) -> ApiResult<reqwest::Response> {
        let status = res.status();
        if status.is_success() {
            return Ok(res);
        }
        let body = res.text().await.unwrap_or_default();
        Err(ApiError::Http {
            status: status.as_u16(),
            body,
        })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let res = self.http.get(self.url(path)).send().await?;
        Ok(Self::success(res).await?.json().await?)
    }

    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let res = self.http.post(self.url(path)).json(body).send().await?;
        Ok(Self::success(res).await?.json().await?)
    }

    pub(crate) async fn put_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let res = self.http.put(self.url(path)).json(body).send().await?;
        Ok(Self::success(res).await?.json().await?)
    }

    /// `DELETE` endpoints reply with an empty body, so nothing is decoded.
    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        let res = self.http.delete(self.url(path)).send().await?;
        Self::success(res).await?;
        Ok(())
    }
}

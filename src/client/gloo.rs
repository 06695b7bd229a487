//! WASM HTTP client implementation using gloo_net
//!
//! This module provides HTTP functionality for WASM environments
//! using the gloo_net crate for making HTTP requests via the browser's fetch API.

use crate::config::{BoardConfig, check_path_segment};
use crate::error::{ErrorKind, Result};
use gloo_net::http::{Request, RequestBuilder, Response};
use web_sys::RequestCache;

use crate::interface::ActivityApi;
use crate::model::{Activities, ParticipantParams, ServerReply};

/// HTTP client for WASM environments using gloo_net
#[derive(Debug, Clone)]
pub struct WasmClient {
    config: BoardConfig,
}

impl WasmClient {
    pub fn with_config(config: BoardConfig) -> Self {
        Self { config }
    }

    /// Percent-encode one path segment the way `encodeURIComponent` does
    fn encode_segment(segment: &str) -> String {
        String::from(js_sys::encode_uri_component(segment))
    }

    fn participant_url(&self, params: ParticipantParams<'_>, action: &str) -> Result<String> {
        let activity = check_path_segment(params.activity)?;
        Ok(self.config.endpoint(&format!(
            "/activities/{}/{action}",
            Self::encode_segment(activity)
        )))
    }

    /// Build a request with common headers and settings
    fn build_request(builder: RequestBuilder) -> RequestBuilder {
        builder
            .cache(RequestCache::NoStore)
            .header("Accept", "application/json")
    }

    /// Handle a signup/unregister response, turning non-success status into an error
    async fn handle_reply(resp: Response) -> Result<ServerReply> {
        let ok = resp.ok();
        let status = resp.status();
        let text = resp.text().await?;

        if !ok {
            let detail = ServerReply::from_json_text(&text)
                .ok()
                .and_then(|reply| reply.detail);
            log::debug!("Request rejected with {status}: {text}");
            return Err(ErrorKind::NetworkError { status, detail }.into());
        }

        Ok(ServerReply::from_json_text(&text)?)
    }
}

impl ActivityApi for WasmClient {
    async fn fetch_activities(&self) -> Result<Activities> {
        let url = self.config.endpoint("/activities");
        let resp = Self::build_request(Request::get(&url)).send().await?;

        if !resp.ok() {
            return Err(ErrorKind::NetworkError {
                status: resp.status(),
                detail: None,
            }
            .into());
        }

        let text = resp.text().await?;
        log::debug!("Fetched activities, {} bytes", text.len());

        Ok(serde_json::from_str::<Activities>(&text)?)
    }

    async fn signup(&self, params: ParticipantParams<'_>) -> Result<ServerReply> {
        let url = self.participant_url(params, "signup")?;
        log::debug!("POST {url}");

        let resp = Self::build_request(Request::post(&url))
            .query([("email", params.email)])
            .send()
            .await?;

        Self::handle_reply(resp).await
    }

    async fn unregister(&self, params: ParticipantParams<'_>) -> Result<ServerReply> {
        let url = self.participant_url(params, "participants")?;
        log::debug!("DELETE {url}");

        let resp = Self::build_request(Request::delete(&url))
            .query([("email", params.email)])
            .send()
            .await?;

        Self::handle_reply(resp).await
    }
}

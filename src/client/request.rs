//! No-WASM HTTP client implementation using reqwest
//!
//! This module provides HTTP functionality for non-WASM environments
//! using the reqwest crate for making HTTP requests.

use crate::config::{BoardConfig, check_path_segment};
use crate::error::{ErrorKind, Result};
use reqwest::{
    Client, Response, Url,
    header::{CACHE_CONTROL, HeaderMap, HeaderValue, PRAGMA},
};

use crate::interface::ActivityApi;
use crate::model::{Activities, ParticipantParams, ServerReply};

/// HTTP client for no-WASM environments using reqwest
#[derive(Debug, Clone)]
pub struct NoWasmClient {
    client: Client,
    base_url: Url,
}

impl NoWasmClient {
    pub fn with_config(config: &BoardConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ErrorKind::UrlError(format!("{}: {e}", config.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(ErrorKind::UrlError(format!("not a base URL: {}", config.base_url)).into());
        }

        // Every request bypasses HTTP caches
        let mut headers = HeaderMap::new();
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
        headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self { client, base_url })
    }

    /// Build an endpoint URL, percent-encoding each path segment and the email query
    fn endpoint(&self, segments: &[&str], email: Option<&str>) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ErrorKind::UrlError(format!("not a base URL: {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        if let Some(email) = email {
            url.query_pairs_mut().append_pair("email", email);
        }
        Ok(url)
    }

    fn participant_endpoint(&self, params: ParticipantParams<'_>, action: &str) -> Result<Url> {
        let activity = check_path_segment(params.activity)?;
        self.endpoint(&["activities", activity, action], Some(params.email))
    }

    /// Handle a signup/unregister response, turning non-success status into an error
    async fn handle_reply(resp: Response) -> Result<ServerReply> {
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            let detail = ServerReply::from_json_text(&text)
                .ok()
                .and_then(|reply| reply.detail);
            log::debug!("Request rejected with {status}: {text}");
            return Err(ErrorKind::NetworkError {
                status: status.as_u16(),
                detail,
            }
            .into());
        }

        Ok(ServerReply::from_json_text(&text)?)
    }
}

impl ActivityApi for NoWasmClient {
    async fn fetch_activities(&self) -> Result<Activities> {
        let url = self.endpoint(&["activities"], None)?;
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ErrorKind::NetworkError {
                status: status.as_u16(),
                detail: None,
            }
            .into());
        }

        let text = resp.text().await?;
        log::debug!("Fetched activities, {} bytes", text.len());

        Ok(serde_json::from_str::<Activities>(&text)?)
    }

    async fn signup(&self, params: ParticipantParams<'_>) -> Result<ServerReply> {
        let url = self.participant_endpoint(params, "signup")?;
        log::debug!("POST {url}");

        let resp = self.client.post(url).send().await?;
        Self::handle_reply(resp).await
    }

    async fn unregister(&self, params: ParticipantParams<'_>) -> Result<ServerReply> {
        let url = self.participant_endpoint(params, "participants")?;
        log::debug!("DELETE {url}");

        let resp = self.client.delete(url).send().await?;
        Self::handle_reply(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> NoWasmClient {
        NoWasmClient::with_config(&BoardConfig::new(base)).unwrap()
    }

    #[test]
    fn encodes_activity_name_and_email() {
        let client = client("http://localhost:8000");
        let url = client
            .participant_endpoint(
                ParticipantParams {
                    activity: "Art & Design/2",
                    email: "first+tag@example.com",
                },
                "signup",
            )
            .unwrap();

        assert_eq!(
            url.as_str(),
            "http://localhost:8000/activities/Art%20&%20Design%2F2/signup?email=first%2Btag%40example.com"
        );
    }

    #[test]
    fn keeps_base_path_prefix() {
        let client = client("http://localhost:8000/board/");
        let url = client.endpoint(&["activities"], None).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/board/activities");
    }

    #[test]
    fn refuses_dot_segment_activity_names() {
        let client = client("http://localhost:8000");
        for activity in [".", ".."] {
            let params = ParticipantParams {
                activity,
                email: "a@x.com",
            };
            let err = client.participant_endpoint(params, "signup").unwrap_err();
            assert!(matches!(err.kind(), ErrorKind::UrlError(_)), "{activity}");
        }

        // Dots inside a longer name are ordinary characters
        let params = ParticipantParams {
            activity: "...Dots",
            email: "a@x.com",
        };
        let url = client.participant_endpoint(params, "signup").unwrap();
        assert_eq!(url.path(), "/activities/...Dots/signup");
    }

    #[test]
    fn rejects_relative_base() {
        assert!(NoWasmClient::with_config(&BoardConfig::same_origin()).is_err());
    }
}

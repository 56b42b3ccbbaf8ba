//! One GET against the vendor, folded into a `(status, body)` pair.

use std::time::Duration;

use url::Url;

use crate::{Error, Status};

/// Status and raw body of a single request.
///
/// Success bodies are XML; error bodies are the vendor's HTML/text, or a
/// client-side diagnostic for synthetic statuses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: Status,
    pub body: String,
}

impl RawResponse {
    fn new(status: Status, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Synthetic 400 for a request that was never sent because its URL
    /// could not be built.
    pub(crate) fn rejected(e: &Error) -> Self {
        tracing::warn!("Not sending request: {}", e);
        Self::new(Status::BadRequest, e.to_string())
    }

    /// True when the vendor answered 200.
    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}

/// Issues authorized GET requests, one fresh connection per call.
#[derive(Clone, Debug)]
pub(crate) struct Retriever {
    http: reqwest::Client,
}

impl Retriever {
    pub(crate) fn new(timeout: Duration) -> Result<Self, Error> {
        // connection setup gets its own, shorter deadline so a stalled
        // connect surfaces as a connect error rather than a response timeout
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(timeout / 2)
            .redirect(reqwest::redirect::Policy::none())
            .pool_max_idle_per_host(0)
            .http1_only()
            .build()?;
        Ok(Self { http })
    }

    /// Never fails: transport problems come back as synthetic statuses.
    pub(crate) async fn retrieve(&self, api_key: &str, url: Url) -> RawResponse {
        tracing::debug!("GET {}", url);
        let resp = match self
            .http
            .get(url)
            .header("Authorization", api_key)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => return transport_failure(&e),
        };

        let status = Status::from_code(resp.status().as_u16());
        match resp.text().await {
            Ok(body) => {
                if status != Status::Ok {
                    tracing::debug!(
                        "Request failed with status {}: {}",
                        status,
                        truncate_body(&body)
                    );
                }
                RawResponse::new(status, body)
            }
            Err(e) => {
                tracing::warn!("Failed to read response body: {}", e);
                RawResponse::new(status, e.to_string())
            }
        }
    }
}

fn transport_failure(e: &reqwest::Error) -> RawResponse {
    if e.is_builder() {
        tracing::warn!("Failed to build request: {}", e);
        RawResponse::new(Status::BadRequest, e.to_string())
    } else if e.is_connect() {
        tracing::warn!("Failed to connect: {}", e);
        RawResponse::new(Status::Unavailable, e.to_string())
    } else {
        // connected, but the status line never arrived (closed or timed out)
        tracing::warn!("No response received: {}", e);
        RawResponse::new(Status::NoContent, "")
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

use crate::client::{Transport, TransportResponse};
use crate::config::ClientConfig;
use crate::error::ClientError;
use futures::future::{Either, select};
use std::future::Future;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;

/// Browser `fetch` transport, racing every request against a timer.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    url: String,
    timeout_ms: u32,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            url: config.predict_url(),
            timeout_ms: u32::try_from(config.timeout.as_millis()).unwrap_or(u32::MAX),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn send(&self, body: String) -> Result<TransportResponse, ClientError> {
        let request = Request::post(&self.url)
            .header("Content-Type", "application/json")
            .body(body)
            .map_err(|e| ClientError::Encode(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        Ok(TransportResponse { status, body })
    }
}

impl Transport for HttpTransport {
    async fn post_json(&self, body: String) -> Result<TransportResponse, ClientError> {
        let result = race_timeout(
            self.send(body),
            TimeoutFuture::new(self.timeout_ms),
            self.timeout_ms,
        )
        .await;
        if let Err(ClientError::TimedOut(ms)) = &result {
            log::warn!("Request to {} timed out after {} ms", self.url, ms);
        }
        result
    }
}

/// Resolves with `request` unless `timer` fires first, in which case the
/// request is dropped and [`ClientError::TimedOut`] is returned.
pub async fn race_timeout<R, T>(
    request: R,
    timer: T,
    timeout_ms: u32,
) -> Result<TransportResponse, ClientError>
where
    R: Future<Output = Result<TransportResponse, ClientError>>,
    T: Future<Output = ()>,
{
    match select(Box::pin(request), Box::pin(timer)).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ClientError::TimedOut(u64::from(timeout_ms))),
    }
}

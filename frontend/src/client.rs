use crate::error::ClientError;
use shared::{KeywordCounts, ModelIdentifier, PredictRequest, PredictResponse, PredictionLabel};

/// Raw HTTP response as seen by the client: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One JSON POST to the classification service.
///
/// Implementations perform exactly one outbound request per call and never
/// retry. Timeouts are the implementation's responsibility and surface as
/// [`ClientError::TimedOut`].
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json(&self, body: String) -> Result<TransportResponse, ClientError>;
}

#[derive(Debug, Clone, PartialEq)]
pub enum PredictionResult {
    Success {
        label: PredictionLabel,
        keywords: KeywordCounts,
    },
    Failure {
        reason: ClientError,
    },
}

impl PredictionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, PredictionResult::Success { .. })
    }
}

pub struct PredictionClient<T> {
    transport: T,
}

impl<T: Transport> PredictionClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Classifies `text` with `model`. Every failure mode collapses into
    /// [`PredictionResult::Failure`].
    pub async fn submit(&self, text: &str, model: ModelIdentifier) -> PredictionResult {
        match self.request(text, model).await {
            Ok(response) => PredictionResult::Success {
                label: response.prediction,
                keywords: response.keywords,
            },
            Err(reason) => {
                log::warn!("Prediction with {} failed: {}", model, reason);
                PredictionResult::Failure { reason }
            }
        }
    }

    async fn request(
        &self,
        text: &str,
        model: ModelIdentifier,
    ) -> Result<PredictResponse, ClientError> {
        let request = PredictRequest {
            text: text.to_string(),
            model,
        };
        let body =
            serde_json::to_string(&request).map_err(|e| ClientError::Encode(e.to_string()))?;

        let response = self.transport.post_json(body).await?;
        if !response.ok() {
            return Err(ClientError::Status {
                status: response.status,
                body: response.body,
            });
        }

        serde_json::from_str(&response.body).map_err(|e| ClientError::Malformed(e.to_string()))
    }
}

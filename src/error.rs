use axum::{http::StatusCode, response::IntoResponse};

/// Why a session could not be enriched from the provider.
#[derive(Debug, thiserror::Error)]
pub enum EnrichError {
    /// The request failed or the provider answered with a non-success status.
    #[error("failed making request: {0}")]
    Transport(#[from] reqwest::Error),

    /// The provider answered, but not with JSON.
    #[error("failed decoding response as JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("unable to extract {field} ({expected}) from settings endpoint")]
    Field {
        field: &'static str,
        expected: &'static str,
    },
}

impl EnrichError {
    /// Status code reported back to whoever asked for the enrichment.
    ///
    /// A rejected token is the caller's problem, anything else is the provider's.
    pub fn status_code(&self) -> StatusCode {
        match self {
            EnrichError::Transport(e) => match e.status().map(|s| s.as_u16()) {
                Some(401) | Some(403) => StatusCode::UNAUTHORIZED,
                _ => StatusCode::BAD_GATEWAY,
            },
            EnrichError::Decode(_) | EnrichError::Field { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for EnrichError {
    fn into_response(self) -> axum::response::Response {
        (self.status_code(), self.to_string()).into_response()
    }
}

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::{AdminCredentials, FeedbackPayload, LoginResponse, StatsSnapshot};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request rejected by the backend ({status})")]
    Rejected { status: StatusCode },

    #[error("backend unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("stats response carried no body")]
    EmptyStats,

    #[error("malformed stats payload: {0}")]
    MalformedStats(#[from] serde_json::Error),
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub async fn submit_feedback(&self, payload: &FeedbackPayload) -> Result<(), ApiError> {
        let url = format!("{}/api/submit-feedback", self.base_url);
        debug!(%url, event = %payload.event, "submitting feedback");

        let response = self.http.post(&url).json(payload).send().await?;
        if response.status() != StatusCode::OK {
            warn!(status = %response.status(), "feedback submission rejected");
            return Err(ApiError::Rejected {
                status: response.status(),
            });
        }
        Ok(())
    }

    /// Returns whether the backend accepted the credentials. A decodable
    /// `{ success: false }` body is a rejection; anything else is transport.
    pub async fn admin_login(&self, credentials: &AdminCredentials) -> Result<bool, ApiError> {
        let url = format!("{}/api/admin/login", self.base_url);
        debug!(%url, email = %credentials.email, "attempting admin login");

        let response = self.http.post(&url).json(credentials).send().await?;
        let body: LoginResponse = response.json().await?;
        Ok(body.success)
    }

    pub async fn fetch_stats(&self) -> Result<StatsSnapshot, ApiError> {
        let url = format!("{}/api/admin/stats", self.base_url);
        debug!(%url, "fetching stats snapshot");

        let response = self.http.get(&url).send().await?;
        if response.status() != StatusCode::OK {
            return Err(ApiError::Rejected {
                status: response.status(),
            });
        }

        let body = response.bytes().await?;
        if body.is_empty() {
            return Err(ApiError::EmptyStats);
        }
        Ok(serde_json::from_slice(&body)?)
    }
}

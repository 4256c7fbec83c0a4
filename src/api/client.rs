// ABOUTME: Marketplace API client - authenticated JSON requests against the REST server
// Stateless wrapper: every call decodes the {success, message, data} envelope

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use super::types::{
    ApiEnvelope, Application, ApplicationStatus, ApplyRequest, AuthPayload, CreateJobRequest, Job,
    LoginRequest, RegisterRequest, StatusUpdate, User,
};
use crate::config::ApiConfig;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Malformed response from server: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{message}")]
    Rejected { message: String },

    #[error("Invalid API URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a client from API configuration, optionally authenticated
    pub fn new(config: &ApiConfig, token: Option<String>) -> Result<Self, ApiError> {
        // Validate early so a bad config fails before the first request
        Url::parse(&config.base_url)?;

        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Same client, different bearer token
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self
            .client
            .request(method, self.url(path))
            .header("Content-Type", "application/json");
        if let Some(token) = &self.token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }
        builder
    }

    /// Send a request and decode the envelope.
    ///
    /// The server reports most failures inside the envelope, so the body is
    /// decoded regardless of HTTP status. Only a body that isn't an envelope
    /// turns into `Status` (non-2xx) or `Decode`.
    async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<ApiEnvelope<T>, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        debug!("API response {} ({} bytes)", status, body.len());

        match serde_json::from_str::<ApiEnvelope<T>>(&body) {
            Ok(envelope) => Ok(envelope),
            Err(e) if !status.is_success() => {
                warn!("Non-envelope error response {}: {}", status, e);
                Err(ApiError::Status { status, body })
            }
            Err(e) => Err(ApiError::Decode(e)),
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<ApiEnvelope<T>, ApiError> {
        debug!("GET {}", path);
        self.send(self.request(Method::GET, path)).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiEnvelope<T>, ApiError> {
        debug!("POST {}", path);
        self.send(self.request(Method::POST, path).json(body)).await
    }

    pub async fn patch<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ApiEnvelope<T>, ApiError> {
        debug!("PATCH {}", path);
        self.send(self.request(Method::PATCH, path).json(body)).await
    }

    pub async fn list_jobs(
        &self,
        owner_id: Option<i64>,
    ) -> Result<ApiEnvelope<Vec<Job>>, ApiError> {
        match owner_id {
            Some(id) => self.get(&format!("/jobs?owner_id={id}")).await,
            None => self.get("/jobs").await,
        }
    }

    pub async fn get_job(&self, id: i64) -> Result<ApiEnvelope<Job>, ApiError> {
        self.get(&format!("/jobs/{id}")).await
    }

    /// Create a job posting. Only the envelope's success flag and message matter.
    pub async fn create_job(
        &self,
        request: &CreateJobRequest,
    ) -> Result<ApiEnvelope<serde_json::Value>, ApiError> {
        self.post("/jobs", request).await
    }

    pub async fn apply(
        &self,
        job_id: i64,
        request: &ApplyRequest,
    ) -> Result<ApiEnvelope<serde_json::Value>, ApiError> {
        self.post(&format!("/jobs/{job_id}/apply"), request).await
    }

    pub async fn job_applicants(
        &self,
        job_id: i64,
    ) -> Result<ApiEnvelope<Vec<Application>>, ApiError> {
        self.get(&format!("/jobs/{job_id}/applicants")).await
    }

    pub async fn update_application_status(
        &self,
        application_id: i64,
        status: ApplicationStatus,
    ) -> Result<ApiEnvelope<serde_json::Value>, ApiError> {
        self.patch(
            &format!("/applications/{application_id}/status"),
            &StatusUpdate { status },
        )
        .await
    }

    pub async fn login(
        &self,
        request: &LoginRequest,
    ) -> Result<ApiEnvelope<AuthPayload>, ApiError> {
        self.post("/auth/login", request).await
    }

    pub async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<ApiEnvelope<AuthPayload>, ApiError> {
        self.post("/auth/register", request).await
    }

    pub async fn me(&self) -> Result<ApiEnvelope<User>, ApiError> {
        self.get("/users/me").await
    }

    pub async fn my_applications(&self) -> Result<ApiEnvelope<Vec<Application>>, ApiError> {
        self.get("/users/me/applications").await
    }
}

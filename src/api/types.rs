// ABOUTME: Type definitions for the marketplace REST API
// Request bodies, response envelope and the domain records the server returns

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::client::ApiError;

/// Every response from the marketplace API is wrapped in this envelope
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Server-provided message, or `fallback` when the server sent none
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.message
            .as_deref()
            .filter(|m| !m.is_empty())
            .unwrap_or(fallback)
    }

    /// Unwrap the payload of a successful envelope.
    ///
    /// A failure envelope, or a success envelope without data, becomes
    /// `ApiError::Rejected` carrying the server message (or `fallback`).
    pub fn into_data(self, fallback: &str) -> Result<T, ApiError> {
        if !self.success {
            return Err(ApiError::Rejected {
                message: self.message_or(fallback).to_string(),
            });
        }
        match self.data {
            Some(data) => Ok(data),
            None => Err(ApiError::Rejected {
                message: self.message_or(fallback).to_string(),
            }),
        }
    }

    /// Check a successful envelope whose payload we don't consume
    pub fn into_ack(self, fallback: &str) -> Result<(), ApiError> {
        if self.success {
            Ok(())
        } else {
            Err(ApiError::Rejected {
                message: self.message_or(fallback).to_string(),
            })
        }
    }
}

/// User role on the marketplace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Landowner posting jobs
    Owner,
    /// Day laborer applying to jobs
    Worker,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Owner => "Chủ vườn",
            Self::Worker => "Người làm thuê",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Owner => write!(f, "owner"),
            Self::Worker => write!(f, "worker"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "owner" => Ok(Self::Owner),
            "worker" => Ok(Self::Worker),
            other => Err(format!("unknown role '{other}' (expected owner or worker)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub price_min: i64,
    #[serde(default)]
    pub price_max: i64,
    #[serde(default)]
    pub requirements: Option<String>,
    #[serde(default)]
    pub benefits: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub owner_id: Option<i64>,
    #[serde(default)]
    pub owner: Option<User>,
    #[serde(default)]
    pub images: Vec<String>,
}

/// Review state of an application, driven by the job owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Called,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn all() -> &'static [ApplicationStatus] {
        &[Self::Pending, Self::Called, Self::Accepted, Self::Rejected]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Called => "called",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|status| status.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| format!("unknown application status '{s}'"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    #[serde(default)]
    pub job_id: Option<i64>,
    #[serde(default)]
    pub message: String,
    pub status: ApplicationStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub worker: Option<User>,
    #[serde(default)]
    pub job: Option<Job>,
}

/// Body of `POST /jobs`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateJobRequest {
    pub title: String,
    pub description: String,
    pub location: String,
    pub price_min: u64,
    pub price_max: u64,
    pub requirements: String,
    pub benefits: String,
    pub deadline: String,
    pub images: Vec<String>,
}

/// Body of `POST /jobs/{id}/apply`
#[derive(Debug, Clone, Serialize)]
pub struct ApplyRequest {
    pub message: String,
}

/// Body of `PATCH /applications/{id}/status`
#[derive(Debug, Clone, Serialize)]
pub struct StatusUpdate {
    pub status: ApplicationStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub phone: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub phone: String,
    pub password: String,
    pub role: Role,
    pub address: String,
}

/// Payload returned by login and register
#[derive(Debug, Clone, Deserialize)]
pub struct AuthPayload {
    pub token: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_failure_uses_server_message() {
        let env: ApiEnvelope<Job> =
            serde_json::from_str(r#"{"success": false, "message": "Không có quyền"}"#).unwrap();
        let err = env.into_data("Thất bại").unwrap_err();
        assert!(matches!(err, ApiError::Rejected { ref message } if message == "Không có quyền"));
    }

    #[test]
    fn test_envelope_failure_falls_back() {
        let env: ApiEnvelope<()> =
            serde_json::from_str(r#"{"success": false, "message": ""}"#).unwrap();
        assert_eq!(env.message_or("Đăng tin thất bại"), "Đăng tin thất bại");
        assert!(env.into_ack("Đăng tin thất bại").is_err());
    }

    #[test]
    fn test_envelope_keeps_blank_server_message() {
        let env: ApiEnvelope<()> =
            serde_json::from_str(r#"{"success": false, "message": " "}"#).unwrap();
        assert_eq!(env.message_or("Đăng tin thất bại"), " ");
    }

    #[test]
    fn test_job_tolerates_missing_fields() {
        let job: Job = serde_json::from_str(r#"{"id": 7, "title": "Hái cà phê"}"#).unwrap();
        assert_eq!(job.id, 7);
        assert_eq!(job.price_min, 0);
        assert!(job.owner.is_none());
        assert!(job.images.is_empty());
    }

    #[test]
    fn test_status_parse_and_display() {
        assert_eq!("Accepted".parse::<ApplicationStatus>(), Ok(ApplicationStatus::Accepted));
        assert!("maybe".parse::<ApplicationStatus>().is_err());
        assert_eq!(ApplicationStatus::Called.to_string(), "called");
    }

    #[test]
    fn test_role_roundtrip_through_json() {
        let user: User =
            serde_json::from_str(r#"{"id": 1, "name": "An", "phone": "0912", "role": "owner"}"#)
                .unwrap();
        assert_eq!(user.role, Some(Role::Owner));
        assert_eq!("worker".parse::<Role>(), Ok(Role::Worker));
    }
}

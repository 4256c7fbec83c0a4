// ABOUTME: Marketplace REST API integration
// Thin request/response layer; all business rules live on the server

pub mod client;
pub mod types;

pub use client::{ApiClient, ApiError};
pub use types::{
    ApiEnvelope, Application, ApplicationStatus, ApplyRequest, AuthPayload, CreateJobRequest, Job,
    LoginRequest, RegisterRequest, Role, User,
};

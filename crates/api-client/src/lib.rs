//! Typed client for the ClassHub REST API.
//!
//! Every request is a credentialed fetch against the configured base URL;
//! session continuity rides on cookies, never bearer headers.

pub mod auth;
pub mod billing;
pub mod classes;
pub mod classwork;
pub mod config;
pub mod enrollments;
pub mod error;
mod http;
pub mod schedule;
pub mod users;
pub mod videos;

pub use config::api_base;
pub use error::ApiError;

pub type ApiResult<T> = Result<T, ApiError>;

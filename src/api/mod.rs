// ABOUTME: Backend API integration for tenant listing and alert submission

pub mod client;
pub mod types;

pub use client::{AlertApi, ApiError, HttpAlertApi};
pub use types::{AddAlertResponse, Tenant};

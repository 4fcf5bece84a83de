mod api_error;
mod client;
pub mod mapping;
mod models;

pub use api_error::ApiError;
pub use client::{ApiClient, Backend};

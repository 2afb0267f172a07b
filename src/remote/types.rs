//! DTOs specific to the admin API transport.

/// Error body the API returns for non-2xx responses.
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
}

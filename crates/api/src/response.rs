//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. Gallery reads that
//! degraded to the bundled catalog additionally carry an `"error"` string so
//! clients can surface a transient message while still rendering the list.

use serde::Serialize;

use atelier_gallery::Fetched;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
    /// Backend error captured by a degraded read; omitted otherwise.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data, error: None }
    }
}

impl<T: Serialize> From<Fetched<T>> for DataResponse<T> {
    fn from(fetched: Fetched<T>) -> Self {
        Self {
            data: fetched.data,
            error: fetched.error,
        }
    }
}

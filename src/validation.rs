//! Boundary validation helpers shared by both services.
//!
//! Request shapes themselves are statically declared structs deriving
//! `validator::Validate`; the functions here are the pure, I/O-free pieces
//! used before any persistence call.

use crate::errors::ServiceError;
use validator::Validate;

/// Normalizes an inbound SKU: trimmed and uppercased.
///
/// Every SKU crossing the API boundary goes through this, so "fur001 " and
/// "FUR001" address the same inventory row.
pub fn normalize_sku(raw: &str) -> String {
    raw.trim().to_uppercase()
}

/// Runs declared field validation on a request DTO, mapping failures to a
/// 400-class service error.
pub fn validate_request<T: Validate>(request: &T) -> Result<(), ServiceError> {
    request
        .validate()
        .map_err(|e| ServiceError::ValidationError(e.to_string()))
}

use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// A single field-level error on a submitted form
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FieldErrorDto {
    /// Wire name of the offending field, e.g. `departureAirport`
    pub field: String,
    /// Human-readable reason suitable for rendering next to the field
    pub reason: String,
}

/// The response when a submitted form is rejected field by field
#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FieldErrorsDto {
    pub errors: Vec<FieldErrorDto>,
}

//! RAB line item error types.

use anggara_shared::types::{ProjectId, RabItemId};
use thiserror::Error;

/// Errors that can occur during line item operations.
#[derive(Debug, Error)]
pub enum RabError {
    /// Item name must not be empty.
    #[error("Item name must not be empty")]
    EmptyName,

    /// Category must not be empty.
    #[error("Category must not be empty")]
    EmptyCategory,

    /// A factor amount cannot be negative.
    #[error("Factor '{factor}' cannot be negative")]
    NegativeFactor {
        /// Which factor was negative: "quantity", "volume", or "period".
        factor: &'static str,
    },

    /// Unit price cannot be negative.
    #[error("Unit price cannot be negative")]
    NegativeUnitPrice,

    /// Owning project not found.
    #[error("Project not found: {0}")]
    ProjectNotFound(ProjectId),

    /// Line item not found.
    #[error("Line item not found: {0}")]
    NotFound(RabItemId),
}

impl RabError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName => "EMPTY_NAME",
            Self::EmptyCategory => "EMPTY_CATEGORY",
            Self::NegativeFactor { .. } => "NEGATIVE_FACTOR",
            Self::NegativeUnitPrice => "NEGATIVE_UNIT_PRICE",
            Self::ProjectNotFound(_) => "PROJECT_NOT_FOUND",
            Self::NotFound(_) => "ITEM_NOT_FOUND",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::EmptyName
            | Self::EmptyCategory
            | Self::NegativeFactor { .. }
            | Self::NegativeUnitPrice => 400,
            // An unknown owning project on create is a bad reference in the
            // request body, not a missing resource.
            Self::ProjectNotFound(_) => 400,
            Self::NotFound(_) => 404,
        }
    }
}

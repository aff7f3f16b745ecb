//! Project error types.

use anggara_shared::types::ProjectId;
use thiserror::Error;

/// Errors that can occur during project operations.
#[derive(Debug, Error)]
pub enum ProjectError {
    /// Project name must not be empty.
    #[error("Project name must not be empty")]
    EmptyName,

    /// Allocated budget cannot be negative.
    #[error("Allocated budget cannot be negative")]
    NegativeAllocatedBudget,

    /// Project not found.
    #[error("Project not found: {0}")]
    NotFound(ProjectId),
}

impl ProjectError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyName => "EMPTY_NAME",
            Self::NegativeAllocatedBudget => "NEGATIVE_ALLOCATED_BUDGET",
            Self::NotFound(_) => "PROJECT_NOT_FOUND",
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::EmptyName | Self::NegativeAllocatedBudget => 400,
            Self::NotFound(_) => 404,
        }
    }
}

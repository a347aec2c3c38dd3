//! Service-level error type.

use crate::model::event::EventValidationError;
use crate::model::month::GridError;
use crate::repo::event_repo::RepoError;
use crate::schedule::conflict::ConflictError;
use crate::service::navigation::NavigationError;
use thiserror::Error;

/// Errors surfaced by calendar use-case APIs.
///
/// All variants are recoverable; callers retry only with corrected input.
#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("validation failed: {0}")]
    Validation(#[from] EventValidationError),
    #[error(transparent)]
    Navigation(#[from] NavigationError),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Conflict(#[from] ConflictError),
    #[error(transparent)]
    Repo(RepoError),
}

impl From<RepoError> for CalendarError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            other => Self::Repo(other),
        }
    }
}

pub type CalendarResult<T> = Result<T, CalendarError>;

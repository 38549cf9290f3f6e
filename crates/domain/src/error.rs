//! Domain error types.

use thiserror::Error;

use crate::order::OrderError;
use crate::repository::RepositoryError;

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A business rule on the order aggregate was violated.
    ///
    /// Rendered transparently so the user-visible text is exactly the
    /// order rule's message.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// A collaborator lookup or persistence call failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

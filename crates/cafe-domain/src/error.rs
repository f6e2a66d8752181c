//! Client-side validation errors
//!
//! Each variant blocks a request before it is sent. The `Display` text is
//! the message shown to the user.

use thiserror::Error;

/// Common result type for client-side validation
pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Please enter an Order ID.")]
    EmptyOrderId,
    #[error("Please select at least one drink")]
    EmptyCart,
    #[error("Pickup code is required.")]
    MissingCompletionCode,
}

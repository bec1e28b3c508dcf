// Domain layer - Pure business logic
// No dependencies on infrastructure or presentation layers

pub mod account;
pub mod check_in;
pub mod notification;
pub mod shared;

// Re-exports for convenience
pub use account::{AccessToken, AccountEntry, SendKey};
pub use shared::{DomainError, FailureKind};

/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod apply_request;
mod apply_response;
mod sync_outcome;

pub use apply_request::ApplyRequest;
pub use apply_response::{ApplyOutcome, ApplyResponse};
pub use sync_outcome::SyncOutcome;

/// Errors that can occur while resolving a capability check.
///
/// Only [`InvalidActor`](WardenPolicyError::InvalidActor) is allowed to
/// escape to the integrator - it indicates misuse of the API contract at the
/// call boundary. Every other variant is caught inside the evaluation path
/// and converted to a denial: a structural or configuration defect must
/// never silently grant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WardenPolicyError {
    /// The supplied actor is not an authenticated principal.
    #[error("actor is not an authenticated principal")]
    InvalidActor,

    /// No usable permission subject could be resolved.
    #[error("cannot resolve a permission subject from '{value}'")]
    InvalidSubject {
        /// The raw subject value that could not be used.
        value: String,
    },

    /// No capability name is available for the current check.
    #[error("no capability name is available for the current check")]
    MissingCallContext,

    /// The decision oracle failed while answering a query.
    #[error("decision oracle failed for key '{key}': {reason}")]
    Oracle {
        /// The permission key the oracle was queried with.
        key: String,
        /// The oracle's own failure description.
        reason: String,
    },
}

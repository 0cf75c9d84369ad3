use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("an assessment is already in flight")]
    AssessmentInFlight,

    #[error("stale assessment ticket: {0}")]
    StaleTicket(Uuid),

    #[error("cannot apply {event} while {phase}")]
    InvalidTransition {
        phase: &'static str,
        event: &'static str,
    },
}

//! View state machine.
//!
//! ```text
//!   Intake ──submit──▶ Loading ──succeeded──▶ Result
//!     ▲                  │                      │
//!     └──── failed ──────┘ (error banner)       │
//!     └──────────────────── back ───────────────┘
//! ```
//!
//! Every transition goes through [`ViewState::reduce`], a pure function from
//! the current state and an event to the next state. A rejected event
//! returns an error and the caller keeps the state it already had.
//!
//! Loading carries a ticket. Completions are only accepted for the ticket
//! of the current Loading state; anything else is stale and is dropped,
//! which is how an abandoned view ignores a late reply.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::consult::ConsultResponse;
use crate::models::intake::ClinicalIntakeRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "phase", rename_all = "snake_case")]
#[ts(export)]
pub enum ViewState {
    /// The form is visible. `error` is the banner left by a failed request.
    Intake { error: Option<String> },
    Loading {
        ticket: Uuid,
        record: ClinicalIntakeRecord,
        started_at: jiff::Timestamp,
    },
    Result { response: ConsultResponse },
}

impl Default for ViewState {
    fn default() -> Self {
        Self::Intake { error: None }
    }
}

#[derive(Debug, Clone)]
pub enum ViewEvent {
    Submit {
        ticket: Uuid,
        record: ClinicalIntakeRecord,
        started_at: jiff::Timestamp,
    },
    Succeeded {
        ticket: Uuid,
        response: ConsultResponse,
    },
    Failed {
        ticket: Uuid,
        reason: String,
    },
    Back,
    /// The view was torn down; any outstanding ticket becomes stale.
    Abandon,
}

impl ViewEvent {
    fn name(&self) -> &'static str {
        match self {
            Self::Submit { .. } => "submit",
            Self::Succeeded { .. } => "succeeded",
            Self::Failed { .. } => "failed",
            Self::Back => "back",
            Self::Abandon => "abandon",
        }
    }
}

impl ViewState {
    pub fn phase(&self) -> &'static str {
        match self {
            Self::Intake { .. } => "intake",
            Self::Loading { .. } => "loading",
            Self::Result { .. } => "result",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Intake { error } => error.as_deref(),
            _ => None,
        }
    }

    pub fn response(&self) -> Option<&ConsultResponse> {
        match self {
            Self::Result { response } => Some(response),
            _ => None,
        }
    }

    pub fn reduce(&self, event: ViewEvent) -> Result<ViewState, CoreError> {
        let invalid = |event: &ViewEvent| CoreError::InvalidTransition {
            phase: self.phase(),
            event: event.name(),
        };

        match (self, event) {
            (
                Self::Intake { .. },
                ViewEvent::Submit {
                    ticket,
                    record,
                    started_at,
                },
            ) => Ok(Self::Loading {
                ticket,
                record,
                started_at,
            }),
            (Self::Loading { .. }, ViewEvent::Submit { .. }) => Err(CoreError::AssessmentInFlight),
            (Self::Result { .. }, event @ ViewEvent::Submit { .. }) => Err(invalid(&event)),

            (Self::Loading { ticket, .. }, ViewEvent::Succeeded { ticket: t, response })
                if *ticket == t =>
            {
                Ok(Self::Result { response })
            }
            (Self::Loading { ticket, .. }, ViewEvent::Failed { ticket: t, reason })
                if *ticket == t =>
            {
                Ok(Self::Intake {
                    error: Some(reason),
                })
            }
            (_, ViewEvent::Succeeded { ticket, .. } | ViewEvent::Failed { ticket, .. }) => {
                Err(CoreError::StaleTicket(ticket))
            }

            (Self::Result { .. } | Self::Intake { .. }, ViewEvent::Back) => {
                Ok(Self::Intake { error: None })
            }
            (Self::Loading { .. }, event @ ViewEvent::Back) => Err(invalid(&event)),

            (_, ViewEvent::Abandon) => Ok(Self::Intake { error: None }),
        }
    }
}

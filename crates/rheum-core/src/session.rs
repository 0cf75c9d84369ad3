use serde::Serialize;
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;
use crate::intake::IntakeForm;
use crate::models::consult::ConsultResponse;
use crate::models::intake::ClinicalIntakeRecord;
use crate::view::{ViewEvent, ViewState};

/// One form instance: the intake controller plus the view it drives.
///
/// Form mutations are allowed in every phase. Only submission is gated: a
/// ticket stays outstanding from `begin_submission` until `complete` is
/// called for it, whatever the view did in between. Abandoning the view
/// does not release the ticket, so at most one assessment runs per session.
#[derive(Debug, Default)]
pub struct Session {
    form: IntakeForm,
    view: ViewState,
    outstanding: Option<Uuid>,
}

/// A record handed off for assessment, tagged with the ticket its
/// completion must present.
#[derive(Debug, Clone)]
pub struct Submission {
    pub ticket: Uuid,
    pub record: ClinicalIntakeRecord,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct SessionSnapshot {
    pub form: ClinicalIntakeRecord,
    pub view: ViewState,
    /// Set while an assessment is running; submit is rejected until it
    /// clears.
    pub outstanding: Option<Uuid>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &IntakeForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut IntakeForm {
        &mut self.form
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            form: self.form.record().clone(),
            view: self.view.clone(),
            outstanding: self.outstanding,
        }
    }

    /// Ticket of the assessment still running, if any. It may belong to an
    /// abandoned view.
    pub fn outstanding(&self) -> Option<Uuid> {
        self.outstanding
    }

    pub fn begin_submission(&mut self) -> Result<Submission, CoreError> {
        if self.outstanding.is_some() {
            return Err(CoreError::AssessmentInFlight);
        }
        let submission = Submission {
            ticket: Uuid::new_v4(),
            record: self.form.submit(),
        };
        self.dispatch(ViewEvent::Submit {
            ticket: submission.ticket,
            record: submission.record.clone(),
            started_at: jiff::Timestamp::now(),
        })?;
        self.outstanding = Some(submission.ticket);
        Ok(submission)
    }

    /// Apply the outcome of the assessment for `ticket`. `Err` carries the
    /// banner text shown over the intake form.
    ///
    /// The ticket is released even when the view rejects the outcome as
    /// stale; the call it stood for is over either way.
    pub fn complete(
        &mut self,
        ticket: Uuid,
        outcome: Result<ConsultResponse, String>,
    ) -> Result<(), CoreError> {
        if self.outstanding == Some(ticket) {
            self.outstanding = None;
        }
        let event = match outcome {
            Ok(response) => ViewEvent::Succeeded { ticket, response },
            Err(reason) => ViewEvent::Failed { ticket, reason },
        };
        self.dispatch(event)
    }

    /// Leave the result screen. The intake record is left as it was.
    pub fn back(&mut self) -> Result<(), CoreError> {
        self.dispatch(ViewEvent::Back)
    }

    pub fn abandon(&mut self) -> Result<(), CoreError> {
        self.dispatch(ViewEvent::Abandon)
    }

    pub fn reset_form(&mut self) {
        self.form.reset();
    }

    fn dispatch(&mut self, event: ViewEvent) -> Result<(), CoreError> {
        self.view = self.view.reduce(event)?;
        Ok(())
    }
}

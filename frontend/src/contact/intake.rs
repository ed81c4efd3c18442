use std::rc::Rc;

use log::{error, info};
use thiserror::Error;
use yew::prelude::*;

use crate::analytics::AnalyticsSink;
use crate::http::{HttpRequest, HttpTransport, Method};

use super::lead::{LeadField, LeadForm, LeadSubmission};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntakeStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IntakeError {
    #[error("required field {0:?} is empty")]
    MissingField(LeadField),
    #[error("a submission is already in flight")]
    AlreadySubmitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadOutcome {
    Accepted,
    Failed,
}

/// A validated lead waiting to be sent. `ticket` ties the eventual response
/// back to this submission.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSubmission {
    pub ticket: u32,
    pub payload: LeadSubmission,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactIntake {
    pub status: IntakeStatus,
    pub form: LeadForm,
    /// Ticket of the newest submission; older responses are ignored.
    pub ticket: u32,
}

pub enum IntakeAction {
    Edit { field: LeadField, value: String },
    Begin { ticket: u32 },
    Settle { ticket: u32, outcome: LeadOutcome },
    Reset,
}

impl ContactIntake {
    /// Validates the form. Nothing is sent when this fails.
    pub fn prepare(&self) -> Result<PendingSubmission, IntakeError> {
        if self.status == IntakeStatus::Submitting {
            return Err(IntakeError::AlreadySubmitting);
        }
        let payload = self.form.submission().map_err(IntakeError::MissingField)?;
        Ok(PendingSubmission { ticket: self.ticket.wrapping_add(1), payload })
    }

    pub fn is_submitting(&self) -> bool {
        self.status == IntakeStatus::Submitting
    }

    pub fn apply(&self, action: IntakeAction) -> Self {
        let mut next = self.clone();
        match action {
            IntakeAction::Edit { field, value } => next.form.set_text(field, value),
            IntakeAction::Begin { ticket } => {
                if matches!(self.status, IntakeStatus::Idle | IntakeStatus::Error) {
                    next.status = IntakeStatus::Submitting;
                    next.ticket = ticket;
                }
            }
            IntakeAction::Settle { ticket, outcome } => {
                if ticket != self.ticket || self.status != IntakeStatus::Submitting {
                    return next;
                }
                match outcome {
                    LeadOutcome::Accepted => {
                        next.status = IntakeStatus::Success;
                        next.form = LeadForm::default();
                    }
                    LeadOutcome::Failed => next.status = IntakeStatus::Error,
                }
            }
            IntakeAction::Reset => {
                if self.status == IntakeStatus::Success {
                    next.status = IntakeStatus::Idle;
                }
            }
        }
        next
    }
}

impl Reducible for ContactIntake {
    type Action = IntakeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Posts one lead to the form relay. Any 2xx is accepted and reported to
/// `sink`; everything else, including transport failures, is `Failed`.
pub async fn send_lead<T, S>(transport: &T, sink: &S, endpoint: &str, payload: &LeadSubmission) -> LeadOutcome
where
    T: HttpTransport,
    S: AnalyticsSink,
{
    let body = match serde_json::to_string(payload) {
        Ok(body) => body,
        Err(e) => {
            error!("Failed to serialize lead: {}", e);
            return LeadOutcome::Failed;
        }
    };
    let request = HttpRequest::new(Method::Post, endpoint)
        .header("Accept", "application/json")
        .json(body);

    match transport.send(request).await {
        Ok(response) if response.is_success() => {
            info!("Lead submitted for {}", payload.company);
            sink.report_conversion();
            sink.track_lead();
            LeadOutcome::Accepted
        }
        Ok(response) => {
            error!("Lead submission failed with status {}", response.status);
            LeadOutcome::Failed
        }
        Err(e) => {
            error!("Error submitting lead: {}", e);
            LeadOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::analytics::testing::RecordingSink;
    use crate::contact::lead::RevenueBracket;
    use crate::http::testing::MockTransport;
    use crate::http::TransportError;

    const ENDPOINT: &str = "https://relay.test/lead";

    fn filled() -> ContactIntake {
        let mut intake = ContactIntake::default();
        for (field, value) in [
            (LeadField::Name, "Ana"),
            (LeadField::Company, "Acme"),
            (LeadField::Phone, "123"),
            (LeadField::Revenue, "$1M - $5M"),
            (LeadField::BusinessType, "Retail"),
        ] {
            intake = intake.apply(IntakeAction::Edit { field, value: value.into() });
        }
        intake
    }

    /// Runs one submission end to end the way the form component does.
    fn submit(intake: &ContactIntake, transport: &MockTransport, sink: &RecordingSink) -> ContactIntake {
        let pending = intake.prepare().expect("valid form");
        let submitting = intake.apply(IntakeAction::Begin { ticket: pending.ticket });
        assert!(submitting.is_submitting());
        let outcome = block_on(send_lead(transport, sink, ENDPOINT, &pending.payload));
        submitting.apply(IntakeAction::Settle { ticket: pending.ticket, outcome })
    }

    #[test]
    fn accepted_lead_clears_the_form_and_reports_conversion() {
        let transport = MockTransport::replying(200, "{\"success\":\"true\"}");
        let sink = RecordingSink::default();
        let done = submit(&filled(), &transport, &sink);

        assert_eq!(done.status, IntakeStatus::Success);
        assert_eq!(done.form, LeadForm::default());
        assert_eq!(*sink.events.borrow(), vec!["conversion", "lead"]);

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::Post);
        assert_eq!(sent[0].url, ENDPOINT);
        assert!(sent[0].headers.contains(&("Accept", "application/json".to_string())));
        let body: serde_json::Value = serde_json::from_str(sent[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(body["revenue"], "$1M - $5M");
    }

    #[test]
    fn rejected_lead_keeps_fields_and_skips_analytics() {
        let transport = MockTransport::replying(500, "oops");
        let sink = RecordingSink::default();
        let before = filled();
        let done = submit(&before, &transport, &sink);

        assert_eq!(done.status, IntakeStatus::Error);
        assert_eq!(done.form, before.form);
        assert!(sink.events.borrow().is_empty());
    }

    #[test]
    fn transport_failure_is_an_error() {
        let transport = MockTransport::failing(TransportError::Network("offline".into()));
        let sink = RecordingSink::default();
        let done = submit(&filled(), &transport, &sink);
        assert_eq!(done.status, IntakeStatus::Error);
        assert_eq!(done.form.company, "Acme");
    }

    #[test]
    fn retry_after_error_is_allowed() {
        let transport = MockTransport::replying(502, "");
        transport.push(Ok(crate::http::HttpResponse { status: 201, body: String::new() }));
        let sink = RecordingSink::default();
        let failed = submit(&filled(), &transport, &sink);
        let retried = submit(&failed, &transport, &sink);
        assert_eq!(retried.status, IntakeStatus::Success);
        assert_eq!(transport.sent().len(), 2);
    }

    #[test]
    fn missing_revenue_blocks_before_any_request() {
        let intake = filled().apply(IntakeAction::Edit { field: LeadField::Revenue, value: String::new() });
        assert_eq!(intake.prepare(), Err(IntakeError::MissingField(LeadField::Revenue)));
        assert_eq!(intake.status, IntakeStatus::Idle);
    }

    #[test]
    fn whitespace_only_name_is_missing() {
        let intake = filled().apply(IntakeAction::Edit { field: LeadField::Name, value: "  ".into() });
        assert_eq!(intake.prepare(), Err(IntakeError::MissingField(LeadField::Name)));
    }

    #[test]
    fn cannot_prepare_while_submitting() {
        let intake = filled();
        let pending = intake.prepare().unwrap();
        let submitting = intake.apply(IntakeAction::Begin { ticket: pending.ticket });
        assert_eq!(submitting.prepare(), Err(IntakeError::AlreadySubmitting));
    }

    #[test]
    fn stale_response_is_ignored() {
        let intake = filled();
        let first = intake.prepare().unwrap();
        let submitting = intake.apply(IntakeAction::Begin { ticket: first.ticket });
        let settled = submitting.apply(IntakeAction::Settle {
            ticket: first.ticket.wrapping_add(7),
            outcome: LeadOutcome::Accepted,
        });
        assert_eq!(settled, submitting);
    }

    #[test]
    fn reset_only_leaves_success() {
        let error = ContactIntake { status: IntakeStatus::Error, ..filled() };
        assert_eq!(error.apply(IntakeAction::Reset).status, IntakeStatus::Error);
        let success = ContactIntake { status: IntakeStatus::Success, ..ContactIntake::default() };
        assert_eq!(success.apply(IntakeAction::Reset).status, IntakeStatus::Idle);
    }

    #[test]
    fn bracket_options_cover_every_variant() {
        assert_eq!(RevenueBracket::ALL.len(), 8);
        assert_eq!(RevenueBracket::From1MTo5M.wire_value(), "$1M - $5M");
    }
}

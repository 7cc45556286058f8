use thiserror::Error;
use tracing::warn;

use crate::api::{ApiClient, ApiError};
use crate::models::{Emoji, FeedbackPayload};
use crate::notify::{Notifier, Severity};

pub const SUBMIT_OK: &str = "Your feedback submitted successfully";
pub const SUBMIT_FAILED: &str = "Try again with correct feedback";

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("event, feedback, and emoji are all required")]
    Incomplete,

    #[error("a submission is already in flight")]
    InFlight,

    #[error(transparent)]
    Failed(#[from] ApiError),
}

#[derive(Debug, Default)]
pub struct FeedbackForm {
    pub event: String,
    pub feedback: String,
    pub emoji: Option<Emoji>,
    in_flight: bool,
}

impl FeedbackForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_complete(&self) -> bool {
        !self.event.trim().is_empty() && !self.feedback.trim().is_empty() && self.emoji.is_some()
    }

    /// One network call per accepted invocation, no retry. Incomplete drafts
    /// and in-flight submissions never reach the network.
    pub async fn submit(
        &mut self,
        api: &ApiClient,
        notifier: &mut Notifier,
    ) -> Result<(), SubmissionError> {
        let emoji = match self.emoji {
            Some(emoji) if self.is_complete() => emoji,
            _ => return Err(SubmissionError::Incomplete),
        };
        if self.in_flight {
            return Err(SubmissionError::InFlight);
        }

        let payload = FeedbackPayload {
            feedback: self.feedback.clone(),
            event: self.event.clone(),
            emoji,
        };

        self.in_flight = true;
        let result = api.submit_feedback(&payload).await;
        self.in_flight = false;
        self.apply_outcome(result, notifier)
    }

    fn apply_outcome(
        &mut self,
        result: Result<(), ApiError>,
        notifier: &mut Notifier,
    ) -> Result<(), SubmissionError> {
        match result {
            Ok(()) => {
                self.event.clear();
                self.feedback.clear();
                self.emoji = None;
                notifier.notify(Severity::Success, SUBMIT_OK);
                Ok(())
            }
            Err(error) => {
                // Same message for rejection and transport failure; the
                // fields stay so the user can retry.
                warn!(%error, "feedback submission failed");
                notifier.notify(Severity::Error, SUBMIT_FAILED);
                Err(error.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn filled_form() -> FeedbackForm {
        FeedbackForm {
            event: "Hack Day".to_string(),
            feedback: "Great!".to_string(),
            emoji: Some(Emoji::Positive),
            in_flight: false,
        }
    }

    #[tokio::test]
    async fn incomplete_draft_never_reaches_the_network() {
        let api = ApiClient::new("http://unused.invalid").unwrap();
        let mut notifier = Notifier::new();

        for form in [
            FeedbackForm {
                event: String::new(),
                ..filled_form()
            },
            FeedbackForm {
                feedback: "   ".to_string(),
                ..filled_form()
            },
            FeedbackForm {
                emoji: None,
                ..filled_form()
            },
        ] {
            let mut form = form;
            let result = form.submit(&api, &mut notifier).await;
            assert!(matches!(result, Err(SubmissionError::Incomplete)));
            assert!(notifier.current().is_none());
        }
    }

    #[tokio::test]
    async fn in_flight_submission_blocks_resubmission() {
        let api = ApiClient::new("http://unused.invalid").unwrap();
        let mut notifier = Notifier::new();
        let mut form = filled_form();
        form.in_flight = true;

        let result = form.submit(&api, &mut notifier).await;
        assert!(matches!(result, Err(SubmissionError::InFlight)));
    }

    #[test]
    fn success_clears_fields_and_notifies() {
        let mut form = filled_form();
        let mut notifier = Notifier::new();

        let result = form.apply_outcome(Ok(()), &mut notifier);
        assert!(result.is_ok());
        assert!(form.event.is_empty());
        assert!(form.feedback.is_empty());
        assert!(form.emoji.is_none());

        let current = notifier.current().unwrap();
        assert_eq!(current.severity, Severity::Success);
        assert_eq!(current.message, SUBMIT_OK);
    }

    #[test]
    fn failure_keeps_fields_and_notifies() {
        let mut form = filled_form();
        let mut notifier = Notifier::new();

        let rejected = ApiError::Rejected {
            status: StatusCode::BAD_REQUEST,
        };
        let result = form.apply_outcome(Err(rejected), &mut notifier);
        assert!(matches!(result, Err(SubmissionError::Failed(_))));
        assert_eq!(form.event, "Hack Day");
        assert_eq!(form.feedback, "Great!");
        assert_eq!(form.emoji, Some(Emoji::Positive));

        let current = notifier.current().unwrap();
        assert_eq!(current.severity, Severity::Error);
        assert_eq!(current.message, SUBMIT_FAILED);
    }
}

//! Sending forms.
//!
//! There is no backend: [`SimulatedSubmitter`] waits out a configured latency
//! and reports success. The [`Submitter`] trait is the seam a real transport
//! would plug into.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::inquiry::{ContactForm, InquiryForm, SubmissionStatus, ValidationErrors};
use crate::CommerceError;

/// Which form a submission came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormKind {
    Contact,
    ProductInquiry,
}

impl FormKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::Contact => "contact",
            FormKind::ProductInquiry => "product_inquiry",
        }
    }
}

/// A validated form, serialized for sending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub kind: FormKind,
    pub payload: serde_json::Value,
}

/// A form that can go through [`submit_form`].
pub trait FormPayload: Serialize {
    const KIND: FormKind;

    fn validate(&self) -> Result<(), ValidationErrors>;

    /// Clear the fields after a successful send.
    fn reset(&mut self);

    fn to_submission(&self) -> Result<Submission, CommerceError> {
        Ok(Submission {
            kind: Self::KIND,
            payload: serde_json::to_value(self)?,
        })
    }
}

impl FormPayload for ContactForm {
    const KIND: FormKind = FormKind::Contact;

    fn validate(&self) -> Result<(), ValidationErrors> {
        ContactForm::validate(self)
    }

    fn reset(&mut self) {
        ContactForm::reset(self)
    }
}

impl FormPayload for InquiryForm {
    const KIND: FormKind = FormKind::ProductInquiry;

    fn validate(&self) -> Result<(), ValidationErrors> {
        InquiryForm::validate(self)
    }

    fn reset(&mut self) {
        InquiryForm::reset(self)
    }
}

/// Delivers a submission somewhere.
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, submission: &Submission) -> Result<(), CommerceError>;
}

/// Validate a form and move its status to `Submitting`.
///
/// Returns the payload to hand to a [`Submitter`]. Invalid forms are rejected
/// before the status moves.
pub fn begin_submission<F: FormPayload>(
    form: &F,
    status: &mut SubmissionStatus,
) -> Result<Submission, CommerceError> {
    form.validate()?;
    let submission = form.to_submission()?;
    status.begin()?;
    Ok(submission)
}

/// Record what the submitter answered.
///
/// On success the form is reset and the status is left at `Submitted`; on
/// failure the fields are kept and the status is `Failed`, so the user can
/// retry. The submitter's error is returned unchanged.
pub fn finish_submission<F: FormPayload>(
    form: &mut F,
    status: &mut SubmissionStatus,
    outcome: Result<(), CommerceError>,
) -> Result<(), CommerceError> {
    match outcome {
        Ok(()) => {
            status.succeed()?;
            form.reset();
            tracing::info!(form = F::KIND.as_str(), "form submitted");
            Ok(())
        }
        Err(e) => {
            status.fail(e.to_string())?;
            tracing::warn!(form = F::KIND.as_str(), error = %e, "form submission failed");
            Err(e)
        }
    }
}

/// Validate, send and track one form submission.
pub async fn submit_form<F>(
    form: &mut F,
    status: &mut SubmissionStatus,
    submitter: &dyn Submitter,
) -> Result<(), CommerceError>
where
    F: FormPayload + Send,
{
    let submission = begin_submission(form, status)?;
    let outcome = submitter.submit(&submission).await;
    finish_submission(form, status, outcome)
}

#[cfg(feature = "tokio")]
pub use simulated::{hold_confirmation, SimulatedSubmitter};

#[cfg(feature = "tokio")]
mod simulated {
    use std::time::Duration;

    use async_trait::async_trait;

    use super::{Submission, Submitter};
    use crate::config::FormsConfig;
    use crate::inquiry::SubmissionStatus;
    use crate::CommerceError;

    /// Waits out a fixed latency and then succeeds, or fails if configured to.
    #[derive(Debug, Clone)]
    pub struct SimulatedSubmitter {
        latency: Duration,
        failure: Option<String>,
    }

    impl SimulatedSubmitter {
        pub fn new(latency: Duration) -> Self {
            Self {
                latency,
                failure: None,
            }
        }

        pub fn from_config(config: &FormsConfig) -> Self {
            Self::new(config.submission_latency())
        }

        /// Fail every submission with `message`.
        pub fn failing(mut self, message: impl Into<String>) -> Self {
            self.failure = Some(message.into());
            self
        }

        pub fn latency(&self) -> Duration {
            self.latency
        }
    }

    impl Default for SimulatedSubmitter {
        fn default() -> Self {
            Self::from_config(&FormsConfig::default())
        }
    }

    #[async_trait]
    impl Submitter for SimulatedSubmitter {
        async fn submit(&self, submission: &Submission) -> Result<(), CommerceError> {
            tracing::debug!(
                form = submission.kind.as_str(),
                latency_ms = self.latency.as_millis() as u64,
                "simulating submission"
            );
            tokio::time::sleep(self.latency).await;
            match &self.failure {
                Some(message) => Err(CommerceError::SubmissionFailed(message.clone())),
                None => Ok(()),
            }
        }
    }

    /// Keep the confirmation up for `period`, then return to `Idle`.
    pub async fn hold_confirmation(
        status: &mut SubmissionStatus,
        period: Duration,
    ) -> Result<(), CommerceError> {
        tokio::time::sleep(period).await;
        status.acknowledge()
    }
}

#[cfg(all(test, feature = "tokio"))]
mod tests {
    use super::*;
    use crate::inquiry::ContactSubject;
    use std::time::Duration;
    use tokio::time::Instant;

    fn contact() -> ContactForm {
        ContactForm {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            subject: Some(ContactSubject::PriceQuote),
            message: "Quote for 50 kg".to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_successful_submission_resets_form() {
        let submitter = SimulatedSubmitter::new(Duration::from_millis(1500));
        let mut form = contact();
        let mut status = SubmissionStatus::Idle;

        let started = Instant::now();
        submit_form(&mut form, &mut status, &submitter).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1500));
        assert!(status.is_submitted());
        assert_eq!(form, ContactForm::default());

        hold_confirmation(&mut status, Duration::from_secs(5)).await.unwrap();
        assert_eq!(status, SubmissionStatus::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_keeps_fields() {
        let submitter = SimulatedSubmitter::new(Duration::from_millis(10)).failing("network down");
        let mut form = contact();
        let mut status = SubmissionStatus::Idle;

        let err = submit_form(&mut form, &mut status, &submitter).await.unwrap_err();
        assert!(err.is_retryable());
        assert_eq!(status.error_message(), Some("Submission failed: network down"));
        assert_eq!(form, contact());

        let retry = SimulatedSubmitter::new(Duration::from_millis(10));
        submit_form(&mut form, &mut status, &retry).await.unwrap();
        assert!(status.is_submitted());
    }

    #[tokio::test]
    async fn test_invalid_form_never_starts() {
        let submitter = SimulatedSubmitter::new(Duration::ZERO);
        let mut form = ContactForm::default();
        let mut status = SubmissionStatus::Idle;

        let err = submit_form(&mut form, &mut status, &submitter).await.unwrap_err();
        assert!(matches!(err, CommerceError::Validation(ref e) if e.len() == 4));
        assert_eq!(status, SubmissionStatus::Idle);
    }

    #[tokio::test]
    async fn test_double_submit_rejected() {
        let submitter = SimulatedSubmitter::new(Duration::ZERO);
        let mut form = contact();
        let mut status = SubmissionStatus::Submitting;

        let err = submit_form(&mut form, &mut status, &submitter).await.unwrap_err();
        assert!(matches!(err, CommerceError::InvalidSubmissionTransition { .. }));
        assert_eq!(form, contact());
    }

    #[test]
    fn test_begin_submission_moves_to_submitting() {
        let form = contact();
        let mut status = SubmissionStatus::Idle;

        let submission = begin_submission(&form, &mut status).unwrap();
        assert_eq!(submission.kind, FormKind::Contact);
        assert!(status.is_busy());
    }

    #[test]
    fn test_finish_out_of_order_keeps_fields() {
        let mut form = contact();
        let mut status = SubmissionStatus::Idle;

        let err = finish_submission(&mut form, &mut status, Ok(())).unwrap_err();
        assert!(matches!(err, CommerceError::InvalidSubmissionTransition { .. }));
        assert_eq!(status, SubmissionStatus::Idle);
        assert_eq!(form, contact());
    }

    #[test]
    fn test_finish_failure_reports_submitter_error() {
        let mut form = contact();
        let mut status = SubmissionStatus::Submitting;

        let outcome = Err(CommerceError::SubmissionFailed("timeout".to_string()));
        let err = finish_submission(&mut form, &mut status, outcome).unwrap_err();
        assert!(err.is_retryable());
        assert_eq!(status.error_message(), Some("Submission failed: timeout"));
        assert_eq!(form, contact());
    }

    #[test]
    fn test_submission_payload() {
        let submission = contact().to_submission().unwrap();
        assert_eq!(submission.kind, FormKind::Contact);
        assert_eq!(submission.payload["subject"], "Price Quote");
        assert_eq!(submission.payload["email"], "asha@example.com");
    }
}

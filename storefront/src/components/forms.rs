//! Form sending in the browser.

use std::time::Duration;

use async_trait::async_trait;
use futures::channel::oneshot;
use harvest_commerce::inquiry::{
    begin_submission, finish_submission, FormPayload, Submission, SubmissionStatus, Submitter,
    ValidationErrors,
};
use harvest_commerce::CommerceError;
use harvest_observability::StructuredLogger;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::state::Storefront;

/// Waits out the configured latency on a browser timer, then succeeds.
#[derive(Debug, Clone, Copy)]
pub struct TimerSubmitter {
    latency: Duration,
}

impl TimerSubmitter {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl Submitter for TimerSubmitter {
    async fn submit(&self, _submission: &Submission) -> Result<(), CommerceError> {
        let (done, wait) = oneshot::channel();
        set_timeout(
            move || {
                let _ = done.send(());
            },
            self.latency,
        );
        wait.await
            .map_err(|_| CommerceError::SubmissionFailed("request timed out".to_string()))
    }
}

/// Signals behind one rendered form.
pub struct FormState<F: Send + Sync + 'static> {
    pub fields: RwSignal<F>,
    pub status: RwSignal<SubmissionStatus>,
    pub errors: RwSignal<ValidationErrors>,
}

impl<F: Send + Sync + 'static> Clone for FormState<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: Send + Sync + 'static> Copy for FormState<F> {}

impl<F: Send + Sync + 'static> FormState<F> {
    pub fn new(fields: F) -> Self {
        Self {
            fields: RwSignal::new(fields),
            status: RwSignal::new(SubmissionStatus::Idle),
            errors: RwSignal::new(ValidationErrors::new()),
        }
    }

    /// Message for a field, if it failed the last validation (tracked).
    pub fn error(&self, field: &'static str) -> Option<String> {
        self.errors
            .with(|errors| errors.message_for(field).map(str::to_string))
    }
}

/// Validate and send a form, then show the confirmation for the configured
/// period. A failed send leaves the fields in place for a retry.
pub fn send<F>(shop: Storefront, form: FormState<F>, log: StructuredLogger)
where
    F: FormPayload + Clone + Send + Sync + 'static,
{
    let draft = form.fields.get_untracked();
    let submission = match form.status.try_update(|status| begin_submission(&draft, status)) {
        Some(Ok(submission)) => submission,
        Some(Err(CommerceError::Validation(errors))) => {
            log.debug_builder("form invalid")
                .field_u64("errors", errors.len() as u64)
                .emit();
            form.errors.set(errors);
            return;
        }
        Some(Err(e)) => {
            log.warn_builder("submit ignored").field("reason", e.to_string()).emit();
            return;
        }
        // Form was unmounted.
        None => return,
    };
    form.errors.set(ValidationErrors::new());

    let timings = shop.forms();
    let submitter = TimerSubmitter::new(timings.submission_latency());
    spawn_local(async move {
        let outcome = submitter.submit(&submission).await;

        let mut fields = form.fields.get_untracked();
        let mut status = form.status.get_untracked();
        let result = finish_submission(&mut fields, &mut status, outcome);
        form.fields.set(fields);
        form.status.set(status);

        match result {
            Ok(()) => {
                log.info_builder("form submitted")
                    .field("form", submission.kind.as_str())
                    .emit();
                set_timeout(
                    move || {
                        if let Some(Err(e)) = form.status.try_update(SubmissionStatus::acknowledge) {
                            log.error_builder("confirmation not cleared")
                                .field("error", e.to_string())
                                .emit();
                        }
                    },
                    timings.confirmation_period(),
                );
            }
            Err(e) if e.is_retryable() => {
                log.warn_builder("form submission failed")
                    .field("error", e.to_string())
                    .emit();
            }
            Err(e) => {
                log.error_builder("submission status out of order")
                    .field("error", e.to_string())
                    .emit();
            }
        }
    });
}

/// Submit button that disables itself while sending.
#[component]
pub fn SubmitButton(
    status: RwSignal<SubmissionStatus>,
    #[prop(into)] label: String,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="btn btn-primary btn-block"
            disabled=move || status.with(SubmissionStatus::is_busy)
        >
            {move || {
                if status.with(SubmissionStatus::is_busy) {
                    "Sending...".to_string()
                } else {
                    label.clone()
                }
            }}
        </button>
    }
}

/// Inline field error.
#[component]
pub fn FieldMessage(message: Signal<Option<String>>) -> impl IntoView {
    move || message.get().map(|text| view! { <p class="field-error">{text}</p> })
}

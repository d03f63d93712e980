//! Contact and product inquiry forms.
//!
//! Forms validate locally, move through a [`SubmissionStatus`] and are sent
//! through a [`Submitter`].

mod contact;
mod product_inquiry;
mod status;
mod submit;
mod validation;

pub use contact::{ContactForm, ContactSubject};
pub use product_inquiry::{InquiryForm, QuantityOption, PRESET_KILOGRAMS};
pub use status::SubmissionStatus;
pub use submit::{
    begin_submission, finish_submission, submit_form, FormKind, FormPayload, Submission, Submitter,
};
#[cfg(feature = "tokio")]
pub use submit::{hold_confirmation, SimulatedSubmitter};
pub use validation::{is_valid_email, FieldError, ValidationErrors};

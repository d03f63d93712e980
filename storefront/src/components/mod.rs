//! Reusable view components.

mod forms;
mod inquiry_form;
mod product_card;

pub use forms::{send, FieldMessage, FormState, SubmitButton, TimerSubmitter};
pub use inquiry_form::InquiryForm;
pub use product_card::{ProductCard, ProductGrid};

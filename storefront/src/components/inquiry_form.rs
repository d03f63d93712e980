//! Inquiry form on the product page.

use harvest_commerce::catalog::Product;
use harvest_commerce::inquiry::{self, QuantityOption, SubmissionStatus};
use leptos::prelude::*;

use super::{send, FieldMessage, FormState, SubmitButton};
use crate::state::Storefront;

#[component]
pub fn InquiryForm(shop: Storefront, product: Product) -> impl IntoView {
    let form = FormState::new(inquiry::InquiryForm::for_product(&product));
    let log = shop.logger("inquiry").with_route(product.href());
    let title = form.fields.with_untracked(|fields| fields.title());
    let product_name = product.name.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        send(shop, form, log.clone());
    };

    view! {
        <div class="inquiry-form">
            <h3>{title}</h3>
            <Show
                when=move || !form.status.with(SubmissionStatus::is_submitted)
                fallback=move || {
                    let product_name = product_name.clone();
                    view! {
                        <div class="notice notice-success">
                            <p class="notice-title">"Thank you for your inquiry!"</p>
                            <p>"We'll get back to you shortly with details about " {product_name} "."</p>
                        </div>
                    }
                }
            >
                <form on:submit=on_submit.clone() novalidate=true>
                    <label for="inquiry-name">"Your Name"</label>
                    <input
                        id="inquiry-name"
                        type="text"
                        placeholder="John Doe"
                        prop:value=move || form.fields.with(|f| f.name.clone())
                        on:input=move |ev| form.fields.update(|f| f.name = event_target_value(&ev))
                    />
                    <FieldMessage message=Signal::derive(move || form.error("name"))/>

                    <label for="inquiry-email">"Email Address"</label>
                    <input
                        id="inquiry-email"
                        type="email"
                        placeholder="john@example.com"
                        prop:value=move || form.fields.with(|f| f.email.clone())
                        on:input=move |ev| form.fields.update(|f| f.email = event_target_value(&ev))
                    />
                    <FieldMessage message=Signal::derive(move || form.error("email"))/>

                    <label for="inquiry-phone">"Phone Number"</label>
                    <input
                        id="inquiry-phone"
                        type="tel"
                        placeholder="+91 98765 43210"
                        prop:value=move || form.fields.with(|f| f.phone.clone())
                        on:input=move |ev| form.fields.update(|f| f.phone = event_target_value(&ev))
                    />

                    <label for="inquiry-quantity">"Quantity (kg)"</label>
                    <select
                        id="inquiry-quantity"
                        prop:value=move || form.fields.with(|f| f.quantity.value())
                        on:change=move |ev| {
                            if let Some(quantity) = QuantityOption::from_value(&event_target_value(&ev)) {
                                form.fields.update(|f| f.quantity = quantity);
                            }
                        }
                    >
                        {QuantityOption::choices()
                            .map(|option| view! { <option value=option.value()>{option.label()}</option> })
                            .collect_view()}
                    </select>

                    <label for="inquiry-message">"Message"</label>
                    <textarea
                        id="inquiry-message"
                        rows="4"
                        placeholder="Tell us about your requirements..."
                        prop:value=move || form.fields.with(|f| f.message.clone())
                        on:input=move |ev| form.fields.update(|f| f.message = event_target_value(&ev))
                    ></textarea>

                    {move || form.status.with(|s| s.error_message().map(str::to_string)).map(|message| {
                        view! { <p class="notice notice-error">{message}</p> }
                    })}

                    <SubmitButton status=form.status label="Send Inquiry"/>
                </form>
            </Show>
        </div>
    }
}

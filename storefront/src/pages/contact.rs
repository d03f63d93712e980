//! Contact page.

use harvest_commerce::inquiry::{ContactForm, ContactSubject, SubmissionStatus};
use leptos::prelude::*;

use crate::components::{send, FieldMessage, FormState, SubmitButton};
use crate::state::Storefront;

#[component]
pub fn ContactPage(shop: Storefront) -> impl IntoView {
    let contact = shop.contact();
    let address = contact
        .address_lines
        .iter()
        .map(|line| view! { <span>{line.clone()}</span><br/> })
        .collect_view();

    view! {
        <section class="contact">
            <div class="banner">
                <h1>"Contact " <span class="accent">"Us"</span></h1>
                <p>"Have questions about our products? Get in touch with us."</p>
            </div>

            <div class="contact-grid">
                <div class="contact-info">
                    <h2>"Get in " <span class="accent">"Touch"</span></h2>
                    <p>
                        "We'd love to hear from you. Whether you have questions about our products, "
                        "pricing, or want to place a bulk order, our team is here to help."
                    </p>
                    <h3>"Email Us"</h3>
                    <a href=contact.mailto()>{contact.email.clone()}</a>
                    <h3>"Call Us"</h3>
                    <a href=contact.tel()>{contact.phone.clone()}</a>
                    <h3>"Visit Us"</h3>
                    <p>{address}</p>
                    <a href=contact.instagram_url.clone() target="_blank" rel="noopener noreferrer">"Instagram"</a>
                </div>
                <ContactFormView shop=shop/>
            </div>
        </section>
    }
}

#[component]
fn ContactFormView(shop: Storefront) -> impl IntoView {
    let form = FormState::new(ContactForm::new());
    let log = shop.logger("contact").with_route("/contact");

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        send(shop, form, log.clone());
    };

    let on_subject = move |ev: leptos::ev::Event| {
        let subject = ContactSubject::from_label(&event_target_value(&ev));
        form.fields.update(|f| f.subject = subject);
    };

    view! {
        <div class="contact-form">
            <h2>"Send us a " <span class="accent">"Message"</span></h2>

            <Show when=move || form.status.with(SubmissionStatus::is_submitted)>
                <div class="notice notice-success">
                    <p class="notice-title">"Thank you for your message!"</p>
                    <p>"We'll get back to you as soon as possible."</p>
                </div>
            </Show>

            <form on:submit=on_submit novalidate=true>
                <div class="field-row">
                    <div>
                        <label for="contact-name">"Your Name"</label>
                        <input
                            id="contact-name"
                            type="text"
                            placeholder="John Doe"
                            prop:value=move || form.fields.with(|f| f.name.clone())
                            on:input=move |ev| form.fields.update(|f| f.name = event_target_value(&ev))
                        />
                        <FieldMessage message=Signal::derive(move || form.error("name"))/>
                    </div>
                    <div>
                        <label for="contact-email">"Your Email"</label>
                        <input
                            id="contact-email"
                            type="email"
                            placeholder="john@example.com"
                            prop:value=move || form.fields.with(|f| f.email.clone())
                            on:input=move |ev| form.fields.update(|f| f.email = event_target_value(&ev))
                        />
                        <FieldMessage message=Signal::derive(move || form.error("email"))/>
                    </div>
                </div>

                <label for="contact-subject">"Subject"</label>
                <select
                    id="contact-subject"
                    prop:value=move || form.fields.with(|f| f.subject.map(|s| s.label()).unwrap_or_default())
                    on:change=on_subject
                >
                    <option value="" disabled=true>"Select a subject"</option>
                    {ContactSubject::ALL
                        .into_iter()
                        .map(|subject| view! { <option value=subject.label()>{subject.label()}</option> })
                        .collect_view()}
                </select>
                <FieldMessage message=Signal::derive(move || form.error("subject"))/>

                <label for="contact-message">"Message"</label>
                <textarea
                    id="contact-message"
                    rows="6"
                    placeholder="Your message here..."
                    prop:value=move || form.fields.with(|f| f.message.clone())
                    on:input=move |ev| form.fields.update(|f| f.message = event_target_value(&ev))
                ></textarea>
                <FieldMessage message=Signal::derive(move || form.error("message"))/>

                {move || form.status.with(|s| s.error_message().map(str::to_string)).map(|message| {
                    view! { <p class="notice notice-error">{message}</p> }
                })}

                <SubmitButton status=form.status label="Send Message"/>
            </form>
        </div>
    }
}

//! Contact form: inline validation on blur, full validation on submit, and a
//! single POST to the configured form backend.

mod state;
mod validation;

pub use state::*;
pub use validation::*;

use crate::api::HttpTransport;
use crate::components::Icon;
use crate::config::SiteConfig;
use dioxus::prelude::*;

const NEUTRAL_BORDER: &str = "#e2e8f0";
const ERROR_BORDER: &str = "#ef4444";

impl FormStore for Signal<ContactFormState> {
    fn update<R>(&mut self, f: impl FnOnce(&mut ContactFormState) -> R) -> R {
        f(&mut self.write())
    }
}

#[component]
pub fn ContactForm() -> Element {
    let config = use_context::<SiteConfig>();
    let form = use_signal(ContactFormState::default);

    let on_submit = {
        let action = config.contact_action.clone();
        let banner_lifetime_ms = config.banner_lifetime_ms;
        let mut form = form.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let Some(submission) = form.write().begin_submit() else {
                return;
            };
            let action = action.clone();
            spawn(async move {
                submit_and_expire(&HttpTransport, &action, submission, banner_lifetime_ms, form)
                    .await;
            });
        }
    };

    let banners = form.read().banners().to_vec();
    let submitting = form.read().is_submitting();

    rsx! {
        form {
            class: "contact-form",
            action: "{config.contact_action}",
            method: "POST",
            novalidate: true,
            onsubmit: on_submit,
            for banner in banners {
                div { key: "{banner.id}", class: banner.kind.class(),
                    div { class: "banner-body",
                        Icon { name: banner.kind.icon().to_string(), class: "banner-icon".to_string() }
                        " {banner.kind.text()}"
                    }
                }
            }
            FormField { field: Field::Name, label: "Name", form }
            FormField { field: Field::Email, label: "Email", form }
            FormField { field: Field::Message, label: "Message", form }
            button {
                r#type: "submit",
                class: if submitting { "submit-btn loading" } else { "submit-btn" },
                disabled: submitting,
                span { class: "btn-text", "Send Message" }
            }
        }
    }
}

#[component]
fn FormField(field: Field, label: &'static str, form: Signal<ContactFormState>) -> Element {
    let value = form.read().value(field).to_string();
    let error = form.read().error(field);
    let border = if error.is_some() { ERROR_BORDER } else { NEUTRAL_BORDER };
    let display = if error.is_some() { "block" } else { "none" };

    let on_input = {
        let mut form = form.clone();
        move |evt: FormEvent| form.write().set_value(field, evt.value())
    };
    let on_blur = {
        let mut form = form.clone();
        move |_: FocusEvent| {
            form.write().validate_field(field);
        }
    };

    rsx! {
        div { class: "form-group",
            label { r#for: field.id(), "{label}" }
            if field == Field::Message {
                textarea {
                    id: field.id(),
                    name: field.id(),
                    rows: "5",
                    value: "{value}",
                    style: "border-color: {border}",
                    oninput: on_input,
                    onblur: on_blur,
                }
            } else {
                input {
                    id: field.id(),
                    name: field.id(),
                    r#type: if field == Field::Email { "email" } else { "text" },
                    value: "{value}",
                    style: "border-color: {border}",
                    oninput: on_input,
                    onblur: on_blur,
                }
            }
            span {
                id: field.error_id(),
                class: "error-text",
                style: "display: {display}",
                "{error.unwrap_or_default()}"
            }
        }
    }
}

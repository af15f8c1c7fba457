//! Contact form: collects fields, posts them, and drives the button and
//! success banner.

use std::rc::Rc;

use autenticos_core::ContactSubmission;
use autenticos_core::contact::submit;
use autenticos_types::ContactConfig;
use gloo_timers::callback::Timeout;
use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, Event, FormData, HtmlButtonElement, HtmlFormElement};

use crate::dom;

/// Button parts swapped out while a submission is in flight
struct SubmitButton {
    button: HtmlButtonElement,
    text: Element,
    icon: Element,
}

impl SubmitButton {
    /// Show the sending state, returning the text and icon to restore
    fn begin(&self, config: &ContactConfig) -> (Option<String>, Option<String>) {
        let saved = (self.text.text_content(), self.icon.text_content());
        self.button.set_disabled(true);
        self.text.set_text_content(Some(&config.sending_label));
        self.icon.set_text_content(Some(&config.sending_icon));
        dom::set_style(&self.icon, "animation", "spin 1s linear infinite");
        saved
    }

    fn restore(&self, (text, icon): (Option<String>, Option<String>)) {
        self.button.set_disabled(false);
        self.text.set_text_content(text.as_deref());
        self.icon.set_text_content(icon.as_deref());
        dom::set_style(&self.icon, "animation", "");
    }
}

/// String-valued entries of the form; file inputs are skipped.
fn form_fields(form: &HtmlFormElement) -> Vec<(String, String)> {
    let Ok(data) = FormData::new_with_form(form) else {
        return Vec::new();
    };
    let Ok(Some(entries)) = js_sys::try_iter(&data) else {
        return Vec::new();
    };
    entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let pair: Array = entry.dyn_into().ok()?;
            Some((pair.get(0).as_string()?, pair.get(1).as_string()?))
        })
        .collect()
}

fn alert(message: &str) {
    if let Some(window) = dom::window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn mount(doc: &Document, config: &ContactConfig) -> bool {
    let Some(form) = dom::by_id(doc, "contactForm").and_then(|f| f.dyn_into::<HtmlFormElement>().ok())
    else {
        return false;
    };
    let (Some(success), Some(button)) = (
        dom::by_id(doc, "formSuccess"),
        dom::by_id(doc, "submitBtn").and_then(|b| b.dyn_into::<HtmlButtonElement>().ok()),
    ) else {
        return false;
    };
    let (Some(text), Some(icon)) = (
        dom::query_in(&button, ".btn-text"),
        dom::query_in(&button, ".btn-icon"),
    ) else {
        return false;
    };

    let button = Rc::new(SubmitButton { button, text, icon });
    let config = Rc::new(config.clone());
    let client = reqwest::Client::new();

    let target = form.clone();
    dom::listen(&target, "submit", move |e: Event| {
        e.prevent_default();
        let form = form.clone();
        let success = success.clone();
        let button = button.clone();
        let config = config.clone();
        let client = client.clone();

        spawn_local(async move {
            let saved = button.begin(&config);
            let submission = ContactSubmission::from_fields(form_fields(&form), &config);

            match submit(&client, &config.endpoint, &submission).await {
                Ok(()) => {
                    form.reset();
                    dom::set_class(&success, "show", true);
                    Timeout::new(config.success_display_ms, move || {
                        dom::set_class(&success, "show", false);
                    })
                    .forget();
                }
                Err(e) => {
                    tracing::error!(error = %e, "contact form submission failed");
                    alert(e.user_message(&config));
                }
            }

            button.restore(saved);
        });
    });
    true
}

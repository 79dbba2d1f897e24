//! Update function for the contact form component.
//!
//! Elm-style: receives the component state, the `Context` and a `Msg`,
//! mutates the state and returns whether the view should re-render.
//!
//! Key behaviors
//! - Field edits go through `ContactForm`, which rejects them while a send is
//!   in flight.
//! - Address edits arm a debounce timer; when it fires the pipeline decides
//!   between clearing the suggestions and running a Nominatim lookup.
//! - Blurring the address hides the suggestions after a grace delay so that a
//!   click on a suggestion still lands.
//! - Submitting hands the payload to EmailJS and settles the form with the
//!   outcome.

use common::config::{ADDRESS_DEBOUNCE_MS, SUGGESTION_HIDE_DELAY_MS};
use common::forms::autocomplete::PipelineStep;
use common::forms::validation::Field;
use gloo_console::{error, log};
use gloo_timers::future::TimeoutFuture;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::services::{emailjs, nominatim};

use super::messages::Msg;
use super::state::ContactComponent;

pub fn update(component: &mut ContactComponent, ctx: &Context<ContactComponent>, msg: Msg) -> bool {
    match msg {
        Msg::FullNameChanged(value) => component.form.set_full_name(value),
        Msg::EmailChanged(value) => component.form.set_email(value),
        Msg::CityChanged(value) => component.form.set_city(value),
        Msg::PostalCodeChanged(value) => component.form.set_postal_code(value),
        Msg::MessageChanged(value) => component.form.set_message(value),
        Msg::TermsChanged(accepted) => {
            component.touched.insert(Field::Terms);
            component.form.set_terms(accepted)
        }
        Msg::AddressChanged(value) => {
            if !component.form.set_address(value.clone()) {
                return false;
            }
            schedule_address_settle(component, ctx, value);
            true
        }
        Msg::Touched(field) => component.touched.insert(field),
        Msg::AddressSettled(ticket) => match component.autocomplete.debounce_elapsed(ticket) {
            Some(PipelineStep::Clear) => {
                component.autocomplete.clear();
                true
            }
            Some(PipelineStep::Lookup { generation, query }) => {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = nominatim::search(&query).await;
                    link.send_message(Msg::SuggestionsLoaded(generation, result));
                });
                false
            }
            None => false,
        },
        Msg::SuggestionsLoaded(generation, result) => {
            if let Err(e) = &result {
                error!(format!("Address lookup failed: {}", e));
            }
            component.autocomplete.lookup_resolved(generation, result).is_some()
        }
        Msg::SelectSuggestion(index) => {
            let Some(candidate) = component.autocomplete.suggestions().get(index).cloned() else {
                return false;
            };
            component.form.apply_selection(&candidate);
            component.autocomplete.hide();
            true
        }
        Msg::AddressBlurred => {
            component.touched.insert(Field::Address);
            // Fires even if the field regains focus in the meantime.
            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                TimeoutFuture::new(SUGGESTION_HIDE_DELAY_MS).await;
                link.send_message(Msg::HideSuggestions);
            });
            false
        }
        Msg::HideSuggestions => {
            component.autocomplete.hide();
            true
        }
        Msg::Submit => {
            component.touch_all();
            if let Some(params) = component.form.begin_submit() {
                let link = ctx.link().clone();
                spawn_local(async move {
                    let outcome = emailjs::send_contact(params).await;
                    link.send_message(Msg::SubmitFinished(outcome));
                });
            }
            true
        }
        Msg::SubmitFinished(outcome) => {
            let sent = outcome.is_ok();
            match &outcome {
                Ok(()) => log!("Contact message sent"),
                Err(e) => error!(format!("Contact message failed: {}", e)),
            }
            component.form.complete_submit(outcome);
            if sent {
                component.touched.clear();
                // The reset empties the address control like any other edit.
                schedule_address_settle(component, ctx, String::new());
            }
            true
        }
    }
}

/// Registers an address value with the pipeline and arms its debounce timer.
fn schedule_address_settle(
    component: &mut ContactComponent,
    ctx: &Context<ContactComponent>,
    value: String,
) {
    let ticket = component.autocomplete.input_changed(value);
    let link = ctx.link().clone();
    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(ADDRESS_DEBOUNCE_MS).await;
        link.send_message(Msg::AddressSettled(ticket));
    });
}

//! Contact form markup.

use common::forms::submission::SUCCESS_MESSAGE;
use common::forms::validation::Field;
use common::model::address::AddressCandidate;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::ContactComponent;

pub fn view(component: &ContactComponent, ctx: &Context<ContactComponent>) -> Html {
    let link = ctx.link();
    let values = component.form.values();
    let disabled = component.form.is_disabled();
    let can_submit = component.form.is_valid() && !component.form.is_submitting();
    let submit_label = if component.form.is_submitting() {
        "Sending..."
    } else {
        "Send message"
    };

    html! {
        <form class="contact-form" novalidate={true} onsubmit={link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        })}>
            { text_input(component, link, TextInput {
                field: Field::FullName,
                id: "fullName",
                label: "Full name *",
                input_type: "text",
                autocomplete: "name",
                value: values.full_name.clone(),
                on_input: Msg::FullNameChanged,
            }) }
            { text_input(component, link, TextInput {
                field: Field::Email,
                id: "email",
                label: "Email *",
                input_type: "email",
                autocomplete: "email",
                value: values.email.clone(),
                on_input: Msg::EmailChanged,
            }) }

            <div class="form-field address-field">
                <label for="address">{ "Address" }</label>
                <input
                    id="address"
                    type="text"
                    autocomplete="off"
                    disabled={disabled}
                    value={values.address.clone().unwrap_or_default()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::AddressChanged(e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                    onblur={link.callback(|_: FocusEvent| Msg::AddressBlurred)}
                />
                { suggestion_list(component, link) }
            </div>

            <div class="form-row">
                { text_input(component, link, TextInput {
                    field: Field::City,
                    id: "city",
                    label: "City",
                    input_type: "text",
                    autocomplete: "address-level2",
                    value: values.city.clone(),
                    on_input: Msg::CityChanged,
                }) }
                { text_input(component, link, TextInput {
                    field: Field::PostalCode,
                    id: "postalCode",
                    label: "Postal code",
                    input_type: "text",
                    autocomplete: "postal-code",
                    value: values.postal_code.clone(),
                    on_input: Msg::PostalCodeChanged,
                }) }
            </div>

            <div class="form-field">
                <label for="message">{ "Message" }</label>
                <textarea
                    id="message"
                    rows="5"
                    disabled={disabled}
                    value={values.message.clone().unwrap_or_default()}
                    oninput={link.callback(|e: InputEvent| {
                        Msg::MessageChanged(e.target_unchecked_into::<HtmlTextAreaElement>().value())
                    })}
                    onblur={link.callback(|_: FocusEvent| Msg::Touched(Field::Message))}
                />
            </div>

            <div class="form-field terms-field">
                <label>
                    <input
                        type="checkbox"
                        disabled={disabled}
                        checked={values.terms}
                        onchange={link.callback(|e: Event| {
                            Msg::TermsChanged(e.target_unchecked_into::<HtmlInputElement>().checked())
                        })}
                    />
                    { " I accept the terms and privacy policy *" }
                </label>
                { field_error(component, Field::Terms) }
            </div>

            <button type="submit" class="submit-btn" disabled={!can_submit}>
                { submit_label }
            </button>

            { submit_message(component.form.submit_message()) }
        </form>
    }
}

struct TextInput {
    field: Field,
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    autocomplete: &'static str,
    value: Option<String>,
    on_input: fn(String) -> Msg,
}

fn text_input(component: &ContactComponent, link: &Scope<ContactComponent>, input: TextInput) -> Html {
    let TextInput {
        field,
        id,
        label,
        input_type,
        autocomplete,
        value,
        on_input,
    } = input;
    let invalid = component.visible_error(field).is_some();

    html! {
        <div class={classes!("form-field", invalid.then_some("invalid"))}>
            <label for={id}>{ label }</label>
            <input
                id={id}
                type={input_type}
                autocomplete={autocomplete}
                disabled={component.form.is_disabled()}
                value={value.unwrap_or_default()}
                oninput={link.callback(move |e: InputEvent| {
                    on_input(e.target_unchecked_into::<HtmlInputElement>().value())
                })}
                onblur={link.callback(move |_: FocusEvent| Msg::Touched(field))}
            />
            { field_error(component, field) }
        </div>
    }
}

fn field_error(component: &ContactComponent, field: Field) -> Html {
    match component.visible_error(field) {
        Some(error) => html! { <small class="field-error">{ error.to_string() }</small> },
        None => html! {},
    }
}

fn suggestion_list(component: &ContactComponent, link: &Scope<ContactComponent>) -> Html {
    if !component.autocomplete.is_visible() {
        return html! {};
    }

    html! {
        <ul class="suggestions" role="listbox">
            { for component.autocomplete.suggestions().iter().enumerate().map(|(index, candidate)| {
                suggestion_item(link, index, candidate)
            }) }
        </ul>
    }
}

fn suggestion_item(link: &Scope<ContactComponent>, index: usize, candidate: &AddressCandidate) -> Html {
    html! {
        <li
            key={candidate.place_id.to_string()}
            role="option"
            onclick={link.callback(move |_: MouseEvent| Msg::SelectSuggestion(index))}
        >
            { candidate.display_name.clone() }
        </li>
    }
}

fn submit_message(message: &str) -> Html {
    if message.is_empty() {
        return html! {};
    }
    let class = if message == SUCCESS_MESSAGE {
        "submit-message success"
    } else {
        "submit-message error"
    };
    html! { <p class={class} role="status">{ message.to_string() }</p> }
}

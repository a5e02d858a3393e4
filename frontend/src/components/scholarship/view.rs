//! View rendering for the scholarship form component.
//!
//! Two screens: the editable form, and a confirmation panel shown after a
//! successful submission. Inputs rely on native constraints only (`required`,
//! `type="email"`, `type="number" min="1"`, the picker's `accept` filter).

use common::form::FormField;
use common::model::application::accept_filter;
use common::model::grade_level::GradeLevel;
use yew::html::Scope;
use yew::prelude::*;

use super::helpers::{changed_field, first_file};
use super::messages::Msg;
use super::state::ScholarshipForm;

pub fn view(component: &ScholarshipForm, ctx: &Context<ScholarshipForm>) -> Html {
    let link = ctx.link();
    if component.controller.is_succeeded() {
        build_success_panel(link)
    } else {
        build_form(component, link)
    }
}

fn build_success_panel(link: &Scope<ScholarshipForm>) -> Html {
    html! {
        <div class="card success">
            <div class="success-badge">
                <i class="material-icons">{"check"}</i>
            </div>
            <h2>{"Application Submitted!"}</h2>
            <p>
                {"Thank you for your scholarship application. We'll review it and get back to you soon."}
            </p>
            <button class="primary-btn" onclick={link.callback(|_| Msg::SubmitAnother)}>
                {"Submit Another Application"}
            </button>
        </div>
    }
}

fn build_form(component: &ScholarshipForm, link: &Scope<ScholarshipForm>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form class="card" {onsubmit}>
            <h1>{"Apply for a 100% "}<span class="accent">{"Scholarship"}</span></h1>
            <div class="stripes">
                <div class="stripe orange"></div>
                <div class="stripe teal"></div>
                <div class="stripe orange"></div>
            </div>

            <section>
                <h2>{"Organization Information"}</h2>
                <div class="grid">
                    { text_input(component, link, FormField::OrganizationName, "text", "Organization Name") }
                    { text_input(component, link, FormField::ContactPerson, "text", "Contact Person") }
                    { text_input(component, link, FormField::Email, "email", "Enter Email Address") }
                    { text_input(component, link, FormField::Phone, "tel", "Enter Phone Number") }
                </div>
            </section>

            <section>
                <h2>{"Student Information"}</h2>
                <div class="grid">
                    <input
                        type="number"
                        name={FormField::NumStudents.name()}
                        value={component.controller.fields().num_students.clone()}
                        oninput={input_callback(link)}
                        placeholder="Number of Students Applying for"
                        min="1"
                        required=true
                    />
                    { grade_select(component, link) }
                </div>
            </section>

            <section>
                <h2>{"Reason for Requesting 100% Off"}</h2>
                <textarea
                    name={FormField::Reason.name()}
                    value={component.controller.fields().reason.clone()}
                    oninput={input_callback(link)}
                    placeholder="Briefly explain your need"
                    rows="4"
                    required=true
                />
            </section>

            <section>
                <h2>{"Supporting Document (optional)"}</h2>
                { file_picker(component, link) }
            </section>

            <section>
                <label class="consent">
                    <input
                        type="checkbox"
                        checked={component.controller.fields().confirmed}
                        onchange={link.callback(|e: Event| {
                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                            Msg::ConfirmedChanged(input.checked())
                        })}
                        required=true
                    />
                    <span>
                        {"I confirm that the information provided is true and request consideration for a full scholarship."}
                    </span>
                </label>
            </section>

            <button
                type="submit"
                class="primary-btn wide"
                disabled={component.submit_disabled()}
            >
                { component.controller.submit_label() }
            </button>
        </form>
    }
}

/// Shared `oninput` handler for named inputs and the textarea: maps the
/// control's `name` back to a `FormField` and stores its value.
fn input_callback(link: &Scope<ScholarshipForm>) -> Callback<InputEvent> {
    link.batch_callback(|e: InputEvent| {
        changed_field(e.target()).map(|(field, value)| Msg::FieldChanged(field, value))
    })
}

/// `onchange` counterpart of [`input_callback`] for the grade select.
fn change_callback(link: &Scope<ScholarshipForm>) -> Callback<Event> {
    link.batch_callback(|e: Event| {
        changed_field(e.target()).map(|(field, value)| Msg::FieldChanged(field, value))
    })
}

fn text_input(
    component: &ScholarshipForm,
    link: &Scope<ScholarshipForm>,
    field: FormField,
    input_type: &'static str,
    placeholder: &'static str,
) -> Html {
    html! {
        <input
            type={input_type}
            name={field.name()}
            value={component.controller.fields().get(field).to_string()}
            oninput={input_callback(link)}
            placeholder={placeholder}
            required=true
        />
    }
}

fn grade_select(component: &ScholarshipForm, link: &Scope<ScholarshipForm>) -> Html {
    let current = component.controller.fields().grade_level.as_str();
    html! {
        <select
            name={FormField::GradeLevel.name()}
            onchange={change_callback(link)}
            required=true
        >
            <option value="" selected={current.is_empty()}>{"Grade Levels"}</option>
            { for GradeLevel::ALL.iter().map(|grade| html! {
                <option value={grade.as_str()} selected={current == grade.as_str()}>
                    { grade.as_str() }
                </option>
            }) }
        </select>
    }
}

fn file_picker(component: &ScholarshipForm, link: &Scope<ScholarshipForm>) -> Html {
    let label = component
        .file_label()
        .unwrap_or("Upload file (if available)")
        .to_string();

    html! {
        <label for="file-upload" class="dropzone">
            <div class="upload-badge">
                <i class="material-icons">{"upload"}</i>
            </div>
            <p>{ label }</p>
            <input
                id="file-upload"
                type="file"
                class="hidden"
                accept={accept_filter()}
                ref={component.file_input_ref.clone()}
                onchange={link.batch_callback(|e: Event| first_file(e.target()).map(Msg::FileChosen))}
            />
        </label>
    }
}

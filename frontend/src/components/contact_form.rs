use gloo_console::log;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::analytics::BrowserAnalytics;
use crate::config;
use crate::contact::{
    send_lead, ContactIntake, IntakeAction, IntakeError, IntakeStatus, LeadField, RevenueBracket,
};
use crate::http::GlooTransport;
use crate::i18n::{strings, use_locale};

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let text = &strings(use_locale()).contact;
    let intake = use_reducer(ContactIntake::default);
    let validation_error = use_state_eq(|| false);

    let on_text = |field: LeadField| {
        let intake = intake.clone();
        let validation_error = validation_error.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            validation_error.set(false);
            intake.dispatch(IntakeAction::Edit { field, value: input.value() });
        })
    };

    let on_revenue = {
        let intake = intake.clone();
        let validation_error = validation_error.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            validation_error.set(false);
            intake.dispatch(IntakeAction::Edit { field: LeadField::Revenue, value: select.value() });
        })
    };

    let onsubmit = {
        let intake = intake.clone();
        let validation_error = validation_error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let pending = match intake.prepare() {
                Ok(pending) => pending,
                Err(IntakeError::MissingField(field)) => {
                    log!("Lead form is missing", field.name());
                    validation_error.set(true);
                    return;
                }
                Err(IntakeError::AlreadySubmitting) => return,
            };

            intake.dispatch(IntakeAction::Begin { ticket: pending.ticket });
            let intake = intake.clone();
            spawn_local(async move {
                let outcome = send_lead(
                    &GlooTransport,
                    &BrowserAnalytics,
                    config::get_lead_endpoint(),
                    &pending.payload,
                )
                .await;
                intake.dispatch(IntakeAction::Settle { ticket: pending.ticket, outcome });
            });
        })
    };

    let send_another = {
        let intake = intake.clone();
        Callback::from(move |_: MouseEvent| intake.dispatch(IntakeAction::Reset))
    };

    let form = &intake.form;
    let selected_revenue = form.revenue.map(RevenueBracket::wire_value).unwrap_or_default();
    let submitting = intake.is_submitting();

    html! {
        <section id="contact-form" class="contact-section">
            <div class="contact-glow" />
            <div class="contact-inner">
                <div class="contact-heading">
                    <h2>{ text.title }</h2>
                    <p>{ text.description }</p>
                </div>

                <div class="contact-card">
                    if intake.status == IntakeStatus::Success {
                        <div class="contact-success">
                            <div class="success-icon">{"✓"}</div>
                            <h3>{ text.success_title }</h3>
                            <p>{ text.success_description }</p>
                            <button class="link-button" onclick={send_another}>{ text.send_another }</button>
                        </div>
                    } else {
                        <form onsubmit={onsubmit} novalidate=true>
                            <div class="field-row">
                                <div class="field">
                                    <label for="name">{ text.name }</label>
                                    <input
                                        type="text"
                                        id="name"
                                        name="name"
                                        required=true
                                        value={form.name.clone()}
                                        oninput={on_text(LeadField::Name)}
                                        placeholder={text.name_placeholder}
                                    />
                                </div>
                                <div class="field">
                                    <label for="company">{ text.company }</label>
                                    <input
                                        type="text"
                                        id="company"
                                        name="company"
                                        required=true
                                        value={form.company.clone()}
                                        oninput={on_text(LeadField::Company)}
                                        placeholder={text.company_placeholder}
                                    />
                                </div>
                            </div>

                            <div class="field-row">
                                <div class="field">
                                    <label for="phone">{ text.phone }</label>
                                    <input
                                        type="tel"
                                        id="phone"
                                        name="phone"
                                        required=true
                                        value={form.phone.clone()}
                                        oninput={on_text(LeadField::Phone)}
                                        placeholder={text.phone_placeholder}
                                    />
                                </div>
                                <div class="field">
                                    <label for="revenue">{ text.revenue }</label>
                                    <select id="revenue" name="revenue" required=true onchange={on_revenue}>
                                        <option value="" disabled=true selected={selected_revenue.is_empty()}>
                                            { text.revenue_default }
                                        </option>
                                        { for RevenueBracket::ALL.into_iter().map(|bracket| html! {
                                            <option
                                                key={bracket.wire_value()}
                                                value={bracket.wire_value()}
                                                selected={selected_revenue == bracket.wire_value()}
                                            >
                                                { text.revenue_options[bracket.index()] }
                                            </option>
                                        }) }
                                    </select>
                                </div>
                            </div>

                            <div class="field">
                                <label for="businessType">{ text.business_type }</label>
                                <input
                                    type="text"
                                    id="businessType"
                                    name="businessType"
                                    required=true
                                    value={form.business_type.clone()}
                                    oninput={on_text(LeadField::BusinessType)}
                                    placeholder={text.business_type_placeholder}
                                />
                            </div>

                            <button type="submit" class="submit-button" disabled={submitting}>
                                { if submitting { text.processing } else { text.submit } }
                            </button>

                            if *validation_error {
                                <p class="form-error">{ text.missing_field }</p>
                            } else if intake.status == IntakeStatus::Error {
                                <p class="form-error">{ text.error }</p>
                            }
                        </form>
                    }
                </div>
            </div>
            <style>
                {r#"
                .contact-section {
                    position: relative;
                    padding: 96px 24px;
                    background: #000;
                    overflow: hidden;
                }
                .contact-glow {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    background: radial-gradient(circle at center, rgba(59, 130, 246, 0.08) 0%, transparent 70%);
                }
                .contact-inner {
                    position: relative;
                    z-index: 10;
                    max-width: 896px;
                    margin: 0 auto;
                }
                .contact-heading {
                    text-align: center;
                    margin-bottom: 48px;
                }
                .contact-heading h2 {
                    color: #fff;
                    font-size: clamp(1.875rem, 4vw, 3rem);
                    font-weight: 300;
                    margin-bottom: 24px;
                }
                .contact-heading p {
                    color: rgba(255, 255, 255, 0.7);
                    font-size: 1.125rem;
                    font-weight: 300;
                    line-height: 1.6;
                }
                .contact-card {
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 24px;
                    padding: 48px;
                    backdrop-filter: blur(4px);
                }
                .contact-card form {
                    display: flex;
                    flex-direction: column;
                    gap: 24px;
                }
                .field-row {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                    gap: 24px;
                }
                .field {
                    display: flex;
                    flex-direction: column;
                    gap: 8px;
                }
                .field label {
                    color: rgba(255, 255, 255, 0.8);
                    font-size: 0.875rem;
                    font-weight: 300;
                    margin-left: 4px;
                }
                .field input,
                .field select {
                    background: rgba(255, 255, 255, 0.05);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    border-radius: 12px;
                    padding: 12px 16px;
                    color: #fff;
                    font-size: 1rem;
                }
                .field select option {
                    background: #171717;
                }
                .field input:focus,
                .field select:focus {
                    outline: none;
                    box-shadow: 0 0 0 2px rgba(59, 130, 246, 0.5);
                }
                .submit-button {
                    background: #fff;
                    color: #000;
                    border: none;
                    border-radius: 12px;
                    padding: 16px;
                    font-size: 1rem;
                    font-weight: 500;
                    cursor: pointer;
                    transition: background 0.2s;
                }
                .submit-button:hover {
                    background: rgba(255, 255, 255, 0.9);
                }
                .submit-button:disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }
                .form-error {
                    color: #f87171;
                    text-align: center;
                    font-size: 0.875rem;
                }
                .contact-success {
                    text-align: center;
                    padding: 48px 0;
                }
                .success-icon {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    width: 64px;
                    height: 64px;
                    border-radius: 50%;
                    background: rgba(34, 197, 94, 0.2);
                    color: #4ade80;
                    font-size: 2rem;
                    margin-bottom: 24px;
                }
                .contact-success h3 {
                    color: #fff;
                    font-size: 1.5rem;
                    font-weight: 300;
                    margin-bottom: 16px;
                }
                .contact-success p {
                    color: rgba(255, 255, 255, 0.6);
                }
                .link-button {
                    margin-top: 32px;
                    background: none;
                    border: none;
                    color: #60a5fa;
                    font-size: 0.875rem;
                    cursor: pointer;
                }
                "#}
            </style>
        </section>
    }
}

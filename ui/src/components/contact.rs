use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

use crate::components::Reveal;
use crate::core::config::SiteConfig;
use crate::core::contact::{self, ContactError, ContactRequest};
use crate::hooks::use_language;
use crate::i18n;
use crate::t;

#[derive(Debug, Clone, PartialEq)]
enum ContactStatus {
    Idle,
    Sending,
    Sent,
    Failed(ContactError),
}

fn error_message(err: &ContactError) -> String {
    match err {
        ContactError::Missing(_) => t!("contact-error-missing"),
        ContactError::InvalidEmail(_) => t!("contact-error-email"),
        ContactError::ConsentRequired => t!("contact-error-consent"),
        ContactError::Encode(_) | ContactError::Transport(_) | ContactError::Status(_) => {
            t!("contact-error-network")
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let _language = use_language();
    let config = use_hook(SiteConfig::from_build_env);
    let mut form = use_signal(ContactRequest::default);
    let status = use_signal(|| ContactStatus::Idle);

    let feedback = match &status() {
        ContactStatus::Idle | ContactStatus::Sending => None,
        ContactStatus::Sent => Some((
            "contact-form__status contact-form__status--success",
            format!(
                "{} {}",
                t!("contact-form-success"),
                t!("contact-form-success-description")
            ),
        )),
        ContactStatus::Failed(err) => Some((
            "contact-form__status contact-form__status--error",
            error_message(err),
        )),
    };
    let sending = status() == ContactStatus::Sending;

    let on_submit = {
        let config = config.clone();
        let mut status_signal = status;
        move |evt: FormEvent| {
            evt.prevent_default();
            if status_signal() == ContactStatus::Sending {
                return;
            }
            let request = form().normalized();
            if let Err(err) = request.validate() {
                debug!("[contact] Rejected submission: {err}");
                status_signal.set(ContactStatus::Failed(err));
                return;
            }
            status_signal.set(ContactStatus::Sending);
            let config = config.clone();
            spawn(async move {
                match contact::submit(&config, request).await {
                    Ok(()) => {
                        form.set(ContactRequest::default());
                        status_signal.set(ContactStatus::Sent);
                    }
                    Err(err) => {
                        warn!("[contact] Submission failed: {err}");
                        status_signal.set(ContactStatus::Failed(err));
                    }
                }
            });
        }
    };

    let services = i18n::lines(&t!("contact-form-service-options"));
    let budgets = i18n::lines(&t!("contact-form-budget-options"));
    let submit_label = if sending {
        t!("contact-form-sending")
    } else {
        t!("contact-form-submit")
    };

    rsx! {
        section { id: "contact", class: "section section--alt",
            div { class: "section__inner",
                Reveal { section: "contact",
                    header { class: "section__header",
                        h2 { class: "section__title", {t!("contact-title")} }
                        p { class: "section__subtitle", {t!("contact-subtitle")} }
                    }
                    div { class: "card-grid",
                        form { class: "card contact-form", novalidate: true, onsubmit: on_submit,
                            label { r#for: "name", {t!("contact-form-name")} }
                            input {
                                id: "name",
                                name: "name",
                                r#type: "text",
                                required: true,
                                value: form.read().name.clone(),
                                oninput: move |evt| form.write().name = evt.value(),
                            }
                            label { r#for: "email", {t!("contact-form-email")} }
                            input {
                                id: "email",
                                name: "email",
                                r#type: "email",
                                required: true,
                                value: form.read().email.clone(),
                                oninput: move |evt| form.write().email = evt.value(),
                            }
                            label { r#for: "phone", {t!("contact-form-phone")} }
                            input {
                                id: "phone",
                                name: "phone",
                                r#type: "tel",
                                value: form.read().phone.clone(),
                                oninput: move |evt| form.write().phone = evt.value(),
                            }
                            label { r#for: "company", {t!("contact-form-company")} }
                            input {
                                id: "company",
                                name: "company",
                                r#type: "text",
                                value: form.read().company.clone(),
                                oninput: move |evt| form.write().company = evt.value(),
                            }
                            label { r#for: "service", {t!("contact-form-service")} }
                            select {
                                id: "service",
                                name: "service",
                                required: true,
                                value: form.read().service.clone(),
                                oninput: move |evt| form.write().service = evt.value(),
                                option { value: "", {t!("contact-form-service-placeholder")} }
                                for service in services {
                                    option { key: "{service}", value: "{service}", "{service}" }
                                }
                            }
                            label { r#for: "budget", {t!("contact-form-budget")} }
                            select {
                                id: "budget",
                                name: "budget",
                                value: form.read().budget.clone(),
                                oninput: move |evt| form.write().budget = evt.value(),
                                option { value: "", {t!("contact-form-budget-placeholder")} }
                                for budget in budgets {
                                    option { key: "{budget}", value: "{budget}", "{budget}" }
                                }
                            }
                            label { r#for: "message", {t!("contact-form-message")} }
                            textarea {
                                id: "message",
                                name: "message",
                                rows: "5",
                                required: true,
                                placeholder: t!("contact-form-message-placeholder"),
                                value: form.read().message.clone(),
                                oninput: move |evt| form.write().message = evt.value(),
                            }
                            label { class: "contact-form__consent",
                                input {
                                    id: "consent",
                                    name: "consent",
                                    r#type: "checkbox",
                                    checked: form.read().consent,
                                    oninput: move |evt| form.write().consent = evt.checked(),
                                }
                                " "
                                {t!("contact-form-consent")}
                                " "
                                a { href: "#privacy", {t!("contact-form-privacy")} }
                            }
                            button {
                                class: "button button--primary",
                                r#type: "submit",
                                disabled: sending,
                                "{submit_label}"
                            }
                            if let Some((class, message)) = feedback {
                                p { class: "{class}", role: "status", "{message}" }
                            }
                        }
                        ContactDetails { config }
                    }
                }
            }
        }
    }
}

#[component]
fn ContactDetails(config: SiteConfig) -> Element {
    rsx! {
        aside { class: "card contact-details",
            h3 { {t!("contact-info-title")} }
            dl {
                dt { {t!("contact-info-label-email")} }
                dd { a { href: config.email_href(), "{config.contact_email}" } }
                dt { {t!("contact-info-label-phone")} }
                dd { a { href: config.phone_href(), "{config.contact_phone}" } }
                dt { {t!("contact-info-label-location")} }
                dd { {t!("contact-info-address")} }
                dt { {t!("contact-info-label-response-time")} }
                dd { {t!("contact-info-response")} }
            }
            h3 { {t!("contact-cta-title")} }
            p { {t!("contact-cta-description")} }
        }
    }
}

use dioxus::prelude::*;

use crate::{
    server::model::{page, session::journey::EditUserDetails, validation::ModelState},
    view::components::{ErrorSummary, Layout, SubmitButton, SummaryRow, TextInput},
};

#[derive(Clone, Debug, PartialEq)]
pub struct WhatAreYourDetailsViewModel {
    pub back_link: String,
    pub details: EditUserDetails,
    pub errors: ModelState,
}

#[component]
pub fn WhatAreYourDetailsPage(model: WhatAreYourDetailsViewModel) -> Element {
    let errors = &model.errors;
    let first_name_error = errors.error_for("first_name").map(str::to_string);
    let last_name_error = errors.error_for("last_name").map(str::to_string);
    let job_title_error = errors.error_for("job_title").map(str::to_string);
    let telephone_error = errors.error_for("telephone").map(str::to_string);
    let details = &model.details;

    rsx! {
        Layout { title: "What are your details".to_string(), back_link: Some(model.back_link.clone()),
            ErrorSummary { errors: model.errors.clone() }
            h1 { class: "govuk-heading-l", "What are your details?" }
            form { method: "post", novalidate: true,
                TextInput {
                    name: "first_name",
                    label: "First name",
                    value: details.first_name.clone(),
                    error: first_name_error,
                    autocomplete: "given-name",
                }
                TextInput {
                    name: "last_name",
                    label: "Last name",
                    value: details.last_name.clone(),
                    error: last_name_error,
                    autocomplete: "family-name",
                }
                TextInput {
                    name: "job_title",
                    label: "Job title",
                    value: details.job_title.clone().unwrap_or_default(),
                    error: job_title_error,
                    autocomplete: "organization-title",
                }
                TextInput {
                    name: "telephone",
                    label: "Telephone number",
                    value: details.telephone.clone(),
                    error: telephone_error,
                    hint: "For international numbers include the country code",
                    input_type: "tel",
                    autocomplete: "tel",
                }
                SubmitButton { label: "Continue" }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CheckYourDetailsViewModel {
    pub back_link: String,
    pub original: EditUserDetails,
    pub updated: EditUserDetails,
    /// The change goes to the regulator for approval before it applies.
    pub requires_approval: bool,
}

#[component]
pub fn CheckYourDetailsPage(model: CheckYourDetailsViewModel) -> Element {
    let change_link = Some(page::WHAT_ARE_YOUR_DETAILS.to_string());
    let original_name = format!("{} {}", model.original.first_name, model.original.last_name);
    let updated_name = format!("{} {}", model.updated.first_name, model.updated.last_name);
    let original_job_title = model.original.job_title.clone().unwrap_or_default();
    let updated_job_title = model.updated.job_title.clone().unwrap_or_default();
    let button = if model.requires_approval {
        "Continue"
    } else {
        "Confirm and update details"
    };

    rsx! {
        Layout { title: "Check your details".to_string(), back_link: Some(model.back_link.clone()),
            h1 { class: "govuk-heading-l", "Check your details" }
            h2 { class: "govuk-heading-m", "Current details" }
            dl { class: "govuk-summary-list",
                SummaryRow { label: "Name".to_string(), value: original_name, change_link: None }
                SummaryRow { label: "Job title".to_string(), value: original_job_title, change_link: None }
                SummaryRow { label: "Telephone".to_string(), value: model.original.telephone.clone(), change_link: None }
            }
            h2 { class: "govuk-heading-m", "New details" }
            dl { class: "govuk-summary-list",
                SummaryRow { label: "Name".to_string(), value: updated_name, change_link: change_link.clone() }
                SummaryRow { label: "Job title".to_string(), value: updated_job_title, change_link: change_link.clone() }
                SummaryRow { label: "Telephone".to_string(), value: model.updated.telephone.clone(), change_link: change_link }
            }
            if model.requires_approval {
                div { class: "govuk-inset-text",
                    "Changes to your name or job title must be approved by the regulator before they are applied."
                }
            }
            form { method: "post",
                SubmitButton { label: button }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DeclarationViewModel {
    pub back_link: String,
}

#[component]
pub fn DeclarationPage(model: DeclarationViewModel) -> Element {
    rsx! {
        Layout { title: "Declaration".to_string(), back_link: Some(model.back_link.clone()),
            h1 { class: "govuk-heading-l", "Declaration" }
            p { class: "govuk-body",
                "I confirm that the details I have provided are correct and that I am authorised to make this change on behalf of my organisation."
            }
            form { method: "post",
                SubmitButton { label: "Agree and send request" }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DetailsChangeRequestedViewModel {
    pub user_name: String,
}

#[component]
pub fn DetailsChangeRequestedPage(model: DetailsChangeRequestedViewModel) -> Element {
    rsx! {
        Layout { title: "Details change requested".to_string(), back_link: None,
            div { class: "govuk-panel govuk-panel--confirmation",
                h1 { class: "govuk-panel__title", "Change request sent" }
            }
            p { class: "govuk-body",
                "Thank you, {model.user_name}. We will email you once the regulator has reviewed your request."
            }
            a { class: "govuk-link", href: page::MANAGE_ACCOUNT, "Return to your account" }
        }
    }
}

use dioxus::prelude::*;

use crate::server::model::validation::ModelState;

/// Lists every field error at the top of the form, each linking to its field.
#[component]
pub fn ErrorSummary(errors: ModelState) -> Element {
    if errors.is_valid() {
        return rsx! {};
    }

    rsx! {
        div { class: "govuk-error-summary",
            h2 { class: "govuk-error-summary__title", "There is a problem" }
            ul { class: "govuk-list govuk-error-summary__list",
                for error in errors.errors() {
                    li { key: "{error.field}",
                        a { href: "#{error.field}", "{error.message}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn TextInput(
    name: &'static str,
    label: &'static str,
    value: String,
    error: Option<String>,
    #[props(default)] hint: &'static str,
    #[props(default = "text")] input_type: &'static str,
    #[props(default)] autocomplete: &'static str,
) -> Element {
    let group_class = if error.is_some() {
        "govuk-form-group govuk-form-group--error"
    } else {
        "govuk-form-group"
    };

    rsx! {
        div { class: group_class,
            label { class: "govuk-label", r#for: name, "{label}" }
            if !hint.is_empty() {
                div { class: "govuk-hint", "{hint}" }
            }
            if let Some(error) = error {
                p { class: "govuk-error-message", "{error}" }
            }
            input {
                class: "govuk-input",
                id: name,
                name: name,
                r#type: input_type,
                autocomplete: autocomplete,
                value: "{value}",
            }
        }
    }
}

/// One choice in a [`RadioGroup`].
#[derive(Clone, Debug, PartialEq)]
pub struct RadioOption {
    pub value: String,
    pub label: String,
    pub hint: Option<String>,
}

impl RadioOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

#[component]
pub fn RadioGroup(
    name: &'static str,
    heading: String,
    options: Vec<RadioOption>,
    selected: Option<String>,
    error: Option<String>,
) -> Element {
    let group_class = if error.is_some() {
        "govuk-form-group govuk-form-group--error"
    } else {
        "govuk-form-group"
    };

    rsx! {
        div { class: group_class, id: name,
            fieldset { class: "govuk-fieldset",
                legend { class: "govuk-fieldset__legend govuk-fieldset__legend--l",
                    h1 { class: "govuk-fieldset__heading", "{heading}" }
                }
                if let Some(error) = error {
                    p { class: "govuk-error-message", "{error}" }
                }
                div { class: "govuk-radios",
                    for (index, option) in options.iter().enumerate() {
                        div { class: "govuk-radios__item", key: "{option.value}",
                            input {
                                class: "govuk-radios__input",
                                id: "{name}-{index}",
                                name: name,
                                r#type: "radio",
                                value: "{option.value}",
                                checked: selected.as_deref() == Some(option.value.as_str()),
                            }
                            label { class: "govuk-label govuk-radios__label", r#for: "{name}-{index}",
                                "{option.label}"
                            }
                            if let Some(hint) = &option.hint {
                                div { class: "govuk-hint govuk-radios__hint", "{hint}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// A row of a check-your-answers summary list, with an optional change link.
#[component]
pub fn SummaryRow(label: String, value: String, change_link: Option<String>) -> Element {
    rsx! {
        div { class: "govuk-summary-list__row",
            dt { class: "govuk-summary-list__key", "{label}" }
            dd { class: "govuk-summary-list__value", "{value}" }
            if let Some(change_link) = change_link {
                dd { class: "govuk-summary-list__actions",
                    a { class: "govuk-link", href: "{change_link}", "Change" }
                }
            }
        }
    }
}

#[component]
pub fn SubmitButton(label: &'static str) -> Element {
    rsx! {
        button { class: "govuk-button", r#type: "submit", "{label}" }
    }
}

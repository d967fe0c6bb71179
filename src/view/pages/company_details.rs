use dioxus::prelude::*;

use crate::{
    model::address::{Address, Nation},
    server::model::{page, validation::ModelState},
    view::components::{
        ErrorSummary, Layout, RadioGroup, RadioOption, SubmitButton, SummaryRow, TextInput,
    },
};

#[derive(Clone, Debug, PartialEq)]
pub struct UkNationViewModel {
    pub back_link: String,
    pub selected: Option<Nation>,
    pub errors: ModelState,
}

#[component]
pub fn UkNationPage(model: UkNationViewModel) -> Element {
    let options: Vec<RadioOption> = Nation::ALL
        .into_iter()
        .map(|nation| RadioOption::new(nation.key(), nation.to_string()))
        .collect();
    let selected = model.selected.map(|nation| nation.key().to_string());
    let error = model.errors.error_for("uk_nation").map(str::to_string);

    rsx! {
        Layout { title: "UK nation".to_string(), back_link: Some(model.back_link.clone()),
            ErrorSummary { errors: model.errors.clone() }
            form { method: "post", novalidate: true,
                RadioGroup {
                    name: "uk_nation",
                    heading: "Which UK nation is your organisation based in?".to_string(),
                    options: options,
                    selected: selected,
                    error: error,
                }
                SubmitButton { label: "Continue" }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BusinessAddressPostcodeViewModel {
    pub back_link: String,
    pub postcode: String,
    pub errors: ModelState,
}

#[component]
pub fn BusinessAddressPostcodePage(model: BusinessAddressPostcodeViewModel) -> Element {
    let error = model.errors.error_for("postcode").map(str::to_string);

    rsx! {
        Layout { title: "Business address postcode".to_string(), back_link: Some(model.back_link.clone()),
            ErrorSummary { errors: model.errors.clone() }
            h1 { class: "govuk-heading-l", "What is your business address postcode?" }
            form { method: "post", novalidate: true,
                TextInput {
                    name: "postcode",
                    label: "Postcode",
                    value: model.postcode.clone(),
                    error: error,
                    autocomplete: "postal-code",
                }
                SubmitButton { label: "Find address" }
            }
            a { class: "govuk-link", href: page::BUSINESS_ADDRESS, "Enter the address manually" }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SelectBusinessAddressViewModel {
    pub back_link: String,
    pub postcode: String,
    /// Addresses found for the postcode, one line each, in lookup order.
    pub addresses: Vec<String>,
    pub errors: ModelState,
}

#[component]
pub fn SelectBusinessAddressPage(model: SelectBusinessAddressViewModel) -> Element {
    let options: Vec<RadioOption> = model
        .addresses
        .iter()
        .enumerate()
        .map(|(index, address)| RadioOption::new(index.to_string(), address.clone()))
        .collect();
    let error = model.errors.error_for("selected_index").map(str::to_string);
    let heading = format!("Select your business address in {}", model.postcode);

    rsx! {
        Layout { title: "Select business address".to_string(), back_link: Some(model.back_link.clone()),
            ErrorSummary { errors: model.errors.clone() }
            form { method: "post", novalidate: true,
                RadioGroup {
                    name: "selected_index",
                    heading: heading,
                    options: options,
                    selected: None,
                    error: error,
                }
                SubmitButton { label: "Continue" }
            }
            a { class: "govuk-link", href: page::BUSINESS_ADDRESS, "I cannot find the address in the list" }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BusinessAddressViewModel {
    pub back_link: String,
    pub address: Address,
    /// The postcode lookup failed so the user was sent here to type the address.
    pub show_lookup_failed_warning: bool,
    pub errors: ModelState,
}

#[component]
pub fn BusinessAddressPage(model: BusinessAddressViewModel) -> Element {
    let errors = &model.errors;
    let address = &model.address;
    let field = |name: &str| errors.error_for(name).map(str::to_string);
    let value = |part: &Option<String>| part.clone().unwrap_or_default();

    rsx! {
        Layout { title: "Business address".to_string(), back_link: Some(model.back_link.clone()),
            ErrorSummary { errors: model.errors.clone() }
            if model.show_lookup_failed_warning {
                div { class: "govuk-warning-text",
                    strong { class: "govuk-warning-text__text",
                        "We could not look up addresses right now. Enter your business address below."
                    }
                }
            }
            h1 { class: "govuk-heading-l", "What is your business address?" }
            form { method: "post", novalidate: true,
                TextInput {
                    name: "building_number",
                    label: "Building number (optional)",
                    value: value(&address.building_number),
                    error: field("building_number"),
                }
                TextInput {
                    name: "building_name",
                    label: "Building name (optional)",
                    value: value(&address.building_name),
                    error: field("building_name"),
                }
                TextInput {
                    name: "street",
                    label: "Street",
                    value: value(&address.street),
                    error: field("street"),
                    autocomplete: "address-line1",
                }
                TextInput {
                    name: "town",
                    label: "Town or city",
                    value: value(&address.town),
                    error: field("town"),
                    autocomplete: "address-level2",
                }
                TextInput {
                    name: "county",
                    label: "County (optional)",
                    value: value(&address.county),
                    error: field("county"),
                }
                TextInput {
                    name: "postcode",
                    label: "Postcode",
                    value: value(&address.postcode),
                    error: field("postcode"),
                    autocomplete: "postal-code",
                }
                SubmitButton { label: "Continue" }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CheckCompanyDetailsViewModel {
    pub back_link: String,
    pub nation: Nation,
    pub address_lines: Vec<String>,
}

#[component]
pub fn CheckCompanyDetailsPage(model: CheckCompanyDetailsViewModel) -> Element {
    rsx! {
        Layout { title: "Check company details".to_string(), back_link: Some(model.back_link.clone()),
            h1 { class: "govuk-heading-l", "Check your company details" }
            dl { class: "govuk-summary-list",
                SummaryRow {
                    label: "UK nation".to_string(),
                    value: model.nation.to_string(),
                    change_link: Some(page::UK_NATION.to_string()),
                }
                SummaryRow {
                    label: "Business address".to_string(),
                    value: model.address_lines.join(", "),
                    change_link: Some(page::BUSINESS_ADDRESS_POSTCODE.to_string()),
                }
            }
            form { method: "post",
                SubmitButton { label: "Confirm and update" }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CompanyDetailsUpdatedViewModel {
    pub organisation_name: String,
}

#[component]
pub fn CompanyDetailsUpdatedPage(model: CompanyDetailsUpdatedViewModel) -> Element {
    rsx! {
        Layout { title: "Company details updated".to_string(), back_link: None,
            div { class: "govuk-panel govuk-panel--confirmation",
                h1 { class: "govuk-panel__title", "Company details updated" }
                div { class: "govuk-panel__body", "{model.organisation_name}" }
            }
            a { class: "govuk-link", href: page::MANAGE_ACCOUNT, "Return to your account" }
        }
    }
}

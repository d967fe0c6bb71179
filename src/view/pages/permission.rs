use dioxus::prelude::*;
use uuid::Uuid;

use crate::{
    model::permission::{PermissionType, RelationshipWithOrganisation},
    server::model::{page, validation::ModelState},
    view::components::{
        ErrorSummary, Layout, RadioGroup, RadioOption, SubmitButton, SummaryRow, TextInput,
    },
};

#[derive(Clone, Debug, PartialEq)]
pub struct ChangeAccountPermissionsViewModel {
    pub back_link: String,
    pub id: Uuid,
    pub person_name: String,
    /// Permissions the signed-in user may grant, in display order.
    pub options: Vec<PermissionType>,
    pub selected: Option<PermissionType>,
    pub errors: ModelState,
}

#[component]
pub fn ChangeAccountPermissionsPage(model: ChangeAccountPermissionsViewModel) -> Element {
    let options: Vec<RadioOption> = model
        .options
        .iter()
        .map(|permission| {
            RadioOption::new(permission.key(), permission.to_string())
                .with_hint(permission.description())
        })
        .collect();
    let selected = model.selected.map(|permission| permission.key().to_string());
    let error = model.errors.error_for("permission_type").map(str::to_string);
    let heading = format!("What permissions should {} have?", model.person_name);

    rsx! {
        Layout { title: "Change account permissions".to_string(), back_link: Some(model.back_link.clone()),
            ErrorSummary { errors: model.errors.clone() }
            form { method: "post", novalidate: true,
                RadioGroup {
                    name: "permission_type",
                    heading: heading,
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
pub struct RelationshipWithOrganisationViewModel {
    pub back_link: String,
    pub person_name: String,
    pub selected: Option<RelationshipWithOrganisation>,
    pub additional_information: String,
    pub errors: ModelState,
}

#[component]
pub fn RelationshipWithOrganisationPage(model: RelationshipWithOrganisationViewModel) -> Element {
    let options: Vec<RadioOption> = RelationshipWithOrganisation::ALL
        .into_iter()
        .map(|relationship| RadioOption::new(relationship.key(), relationship.to_string()))
        .collect();
    let selected = model.selected.map(|relationship| relationship.key().to_string());
    let error = model
        .errors
        .error_for("relationship_with_organisation")
        .map(str::to_string);
    let additional_error = model
        .errors
        .error_for("additional_relationship_information")
        .map(str::to_string);
    let heading = format!(
        "What is {}'s relationship with the organisation?",
        model.person_name
    );

    rsx! {
        Layout { title: "Relationship with the organisation".to_string(), back_link: Some(model.back_link.clone()),
            ErrorSummary { errors: model.errors.clone() }
            form { method: "post", novalidate: true,
                RadioGroup {
                    name: "relationship_with_organisation",
                    heading: heading,
                    options: options,
                    selected: selected,
                    error: error,
                }
                TextInput {
                    name: "additional_relationship_information",
                    label: "If other, describe the relationship",
                    value: model.additional_information.clone(),
                    error: additional_error,
                }
                SubmitButton { label: "Continue" }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct JobTitleViewModel {
    pub back_link: String,
    pub person_name: String,
    pub job_title: String,
    pub errors: ModelState,
}

#[component]
pub fn JobTitlePage(model: JobTitleViewModel) -> Element {
    let error = model.errors.error_for("job_title").map(str::to_string);

    rsx! {
        Layout { title: "Job title".to_string(), back_link: Some(model.back_link.clone()),
            ErrorSummary { errors: model.errors.clone() }
            h1 { class: "govuk-heading-l", "What is {model.person_name}'s job title?" }
            form { method: "post", novalidate: true,
                TextInput {
                    name: "job_title",
                    label: "Job title",
                    value: model.job_title.clone(),
                    error: error,
                    autocomplete: "organization-title",
                }
                SubmitButton { label: "Continue" }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NameOfConsultancyViewModel {
    pub back_link: String,
    pub person_name: String,
    pub name_of_consultancy: String,
    pub errors: ModelState,
}

#[component]
pub fn NameOfConsultancyPage(model: NameOfConsultancyViewModel) -> Element {
    let error = model
        .errors
        .error_for("name_of_consultancy")
        .map(str::to_string);

    rsx! {
        Layout { title: "Name of consultancy".to_string(), back_link: Some(model.back_link.clone()),
            ErrorSummary { errors: model.errors.clone() }
            h1 { class: "govuk-heading-l", "What is the name of {model.person_name}'s consultancy?" }
            form { method: "post", novalidate: true,
                TextInput {
                    name: "name_of_consultancy",
                    label: "Consultancy name",
                    value: model.name_of_consultancy.clone(),
                    error: error,
                }
                SubmitButton { label: "Continue" }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CheckDetailsSendInviteViewModel {
    pub back_link: String,
    pub id: Uuid,
    pub person_name: String,
    pub relationship: RelationshipWithOrganisation,
    pub additional_information: Option<String>,
    pub job_title: Option<String>,
    pub name_of_consultancy: Option<String>,
}

#[component]
pub fn CheckDetailsSendInvitePage(model: CheckDetailsSendInviteViewModel) -> Element {
    let relationship_link = page::with_id(page::RELATIONSHIP_WITH_ORGANISATION, model.id);
    let job_title_link = page::with_id(page::JOB_TITLE, model.id);
    let consultancy_link = page::with_id(page::NAME_OF_CONSULTANCY, model.id);

    rsx! {
        Layout { title: "Check details".to_string(), back_link: Some(model.back_link.clone()),
            h1 { class: "govuk-heading-l", "Check the details before nominating {model.person_name}" }
            dl { class: "govuk-summary-list",
                SummaryRow {
                    label: "Relationship with the organisation".to_string(),
                    value: model.relationship.to_string(),
                    change_link: Some(relationship_link.clone()),
                }
                if let Some(information) = &model.additional_information {
                    SummaryRow {
                        label: "Relationship details".to_string(),
                        value: information.clone(),
                        change_link: Some(relationship_link),
                    }
                }
                if let Some(job_title) = &model.job_title {
                    SummaryRow {
                        label: "Job title".to_string(),
                        value: job_title.clone(),
                        change_link: Some(job_title_link),
                    }
                }
                if let Some(consultancy) = &model.name_of_consultancy {
                    SummaryRow {
                        label: "Consultancy".to_string(),
                        value: consultancy.clone(),
                        change_link: Some(consultancy_link),
                    }
                }
            }
            p { class: "govuk-body",
                "We will email {model.person_name} and ask them to accept the nomination as a delegated person."
            }
            form { method: "post",
                SubmitButton { label: "Send nomination" }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::{
    model::team::InviteRole,
    server::model::{page, validation::ModelState},
    view::components::{
        ErrorSummary, Layout, RadioGroup, RadioOption, SubmitButton, SummaryRow, TextInput,
    },
};

#[derive(Clone, Debug, PartialEq)]
pub struct TeamMemberEmailViewModel {
    pub back_link: String,
    pub email: String,
    pub errors: ModelState,
}

#[component]
pub fn TeamMemberEmailPage(model: TeamMemberEmailViewModel) -> Element {
    let error = model.errors.error_for("email").map(str::to_string);

    rsx! {
        Layout { title: "Team member email".to_string(), back_link: Some(model.back_link.clone()),
            ErrorSummary { errors: model.errors.clone() }
            h1 { class: "govuk-heading-l", "What is the team member's email address?" }
            form { method: "post", novalidate: true,
                TextInput {
                    name: "email",
                    label: "Email address",
                    value: model.email.clone(),
                    error: error,
                    hint: "We will send an invitation to this address",
                    input_type: "email",
                    autocomplete: "email",
                }
                SubmitButton { label: "Continue" }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TeamMemberPermissionsViewModel {
    pub back_link: String,
    pub email: String,
    pub role_key: Option<String>,
    pub errors: ModelState,
}

#[component]
pub fn TeamMemberPermissionsPage(model: TeamMemberPermissionsViewModel) -> Element {
    let options: Vec<RadioOption> = InviteRole::ALL
        .into_iter()
        .map(|role| RadioOption::new(role.key(), role.label()).with_hint(role.hint()))
        .collect();
    let error = model.errors.error_for("role_key").map(str::to_string);
    let heading = format!("What permissions should {} have?", model.email);

    rsx! {
        Layout { title: "Team member permissions".to_string(), back_link: Some(model.back_link.clone()),
            ErrorSummary { errors: model.errors.clone() }
            form { method: "post", novalidate: true,
                RadioGroup {
                    name: "role_key",
                    heading: heading,
                    options: options,
                    selected: model.role_key.clone(),
                    error: error,
                }
                SubmitButton { label: "Continue" }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TeamMemberCheckDetailsViewModel {
    pub back_link: String,
    pub email: String,
    pub role_label: String,
    /// The facade refused the invitation because the address is already in use.
    pub invite_failed: bool,
}

#[component]
pub fn TeamMemberCheckDetailsPage(model: TeamMemberCheckDetailsViewModel) -> Element {
    rsx! {
        Layout { title: "Check invitation details".to_string(), back_link: Some(model.back_link.clone()),
            if model.invite_failed {
                div { class: "govuk-error-summary",
                    h2 { class: "govuk-error-summary__title", "There is a problem" }
                    p { class: "govuk-body",
                        "{model.email} has already been invited or is already a member of a team."
                    }
                }
            }
            h1 { class: "govuk-heading-l", "Check the details before sending the invitation" }
            dl { class: "govuk-summary-list",
                SummaryRow {
                    label: "Email address".to_string(),
                    value: model.email.clone(),
                    change_link: Some(page::TEAM_MEMBER_EMAIL.to_string()),
                }
                SummaryRow {
                    label: "Permissions".to_string(),
                    value: model.role_label.clone(),
                    change_link: Some(page::TEAM_MEMBER_PERMISSIONS.to_string()),
                }
            }
            form { method: "post",
                SubmitButton { label: "Send invitation" }
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RemoveTeamMemberViewModel {
    pub back_link: String,
    pub name: String,
    pub errors: ModelState,
}

#[component]
pub fn RemoveTeamMemberPage(model: RemoveTeamMemberViewModel) -> Element {
    let options = vec![RadioOption::new("yes", "Yes"), RadioOption::new("no", "No")];
    let error = model.errors.error_for("remove").map(str::to_string);
    let heading = format!("Are you sure you want to remove {} from your team?", model.name);

    rsx! {
        Layout { title: "Remove team member".to_string(), back_link: Some(model.back_link.clone()),
            ErrorSummary { errors: model.errors.clone() }
            form { method: "post", novalidate: true,
                RadioGroup {
                    name: "remove",
                    heading: heading,
                    options: options,
                    selected: None,
                    error: error,
                }
                SubmitButton { label: "Continue" }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::{
    server::model::page,
    view::components::{Layout, SummaryRow},
};

/// Landing page content for the signed-in user.
#[derive(Clone, Debug, PartialEq)]
pub struct ManageAccountViewModel {
    pub user_name: String,
    pub email: String,
    pub job_title: Option<String>,
    pub telephone: Option<String>,
    pub service_role: String,
    pub organisation_name: String,
    pub organisation_number: String,
    pub nation: Option<String>,
    pub organisation_address: Vec<String>,
    pub show_team_management: bool,
    pub show_company_details_change: bool,
    pub team_members: Vec<TeamMemberRow>,
    /// The team list could not be loaded from the facade.
    pub team_members_unavailable: bool,
    pub added_user_email: Option<String>,
    pub removed_user_name: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TeamMemberRow {
    pub name: String,
    pub email: String,
    pub permission: String,
    pub change_link: Option<String>,
    pub remove_link: Option<String>,
}

#[component]
pub fn ManageAccountPage(model: ManageAccountViewModel) -> Element {
    let job_title = model.job_title.clone().unwrap_or_default();
    let telephone = model.telephone.clone().unwrap_or_default();
    let nation = model.nation.clone().unwrap_or_default();
    let address = model.organisation_address.join(", ");
    let change_details_link = Some(page::WHAT_ARE_YOUR_DETAILS.to_string());
    let change_company_link = model
        .show_company_details_change
        .then(|| page::UK_NATION.to_string());

    rsx! {
        Layout { title: "Manage your account".to_string(), back_link: None,
            if let Some(email) = &model.added_user_email {
                div { class: "govuk-notification-banner govuk-notification-banner--success",
                    p { class: "govuk-notification-banner__heading",
                        "Invitation sent to {email}"
                    }
                }
            }
            if let Some(name) = &model.removed_user_name {
                div { class: "govuk-notification-banner govuk-notification-banner--success",
                    p { class: "govuk-notification-banner__heading",
                        "{name} has been removed from your team"
                    }
                }
            }

            h1 { class: "govuk-heading-xl", "Manage your account" }

            h2 { class: "govuk-heading-m", "Your details" }
            dl { class: "govuk-summary-list",
                SummaryRow { label: "Name".to_string(), value: model.user_name.clone(), change_link: change_details_link.clone() }
                SummaryRow { label: "Email".to_string(), value: model.email.clone(), change_link: None }
                SummaryRow { label: "Job title".to_string(), value: job_title, change_link: change_details_link.clone() }
                SummaryRow { label: "Telephone".to_string(), value: telephone, change_link: change_details_link }
                SummaryRow { label: "Account permissions".to_string(), value: model.service_role.clone(), change_link: None }
            }

            h2 { class: "govuk-heading-m", "Company details" }
            dl { class: "govuk-summary-list",
                SummaryRow { label: "Organisation name".to_string(), value: model.organisation_name.clone(), change_link: None }
                SummaryRow { label: "Organisation ID".to_string(), value: model.organisation_number.clone(), change_link: None }
                SummaryRow { label: "UK nation".to_string(), value: nation, change_link: change_company_link.clone() }
                SummaryRow { label: "Business address".to_string(), value: address, change_link: change_company_link }
            }

            if model.show_team_management {
                h2 { class: "govuk-heading-m", "Your team" }
                if model.team_members_unavailable {
                    p { class: "govuk-body", "Your team members cannot be shown right now. Try again later." }
                } else if model.team_members.is_empty() {
                    p { class: "govuk-body", "You have not added any team members yet." }
                } else {
                    table { class: "govuk-table",
                        thead { class: "govuk-table__head",
                            tr { class: "govuk-table__row",
                                th { class: "govuk-table__header", "Name" }
                                th { class: "govuk-table__header", "Email" }
                                th { class: "govuk-table__header", "Permissions" }
                                th { class: "govuk-table__header" }
                            }
                        }
                        tbody { class: "govuk-table__body",
                            for member in model.team_members.iter() {
                                tr { class: "govuk-table__row", key: "{member.email}",
                                    td { class: "govuk-table__cell", "{member.name}" }
                                    td { class: "govuk-table__cell", "{member.email}" }
                                    td { class: "govuk-table__cell", "{member.permission}" }
                                    td { class: "govuk-table__cell",
                                        if let Some(link) = &member.change_link {
                                            a { class: "govuk-link", href: "{link}", "Change permissions" }
                                        }
                                        if let Some(link) = &member.remove_link {
                                            a { class: "govuk-link", href: "{link}", "Remove" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                a { class: "govuk-button", href: page::TEAM_MEMBER_EMAIL, "Invite a team member" }
            }
        }
    }
}

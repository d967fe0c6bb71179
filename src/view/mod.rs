//! Server-rendered views.
//!
//! Each page is a dioxus component taking a typed view model. Controller actions return a
//! [`Page`] holding the view model; it is only rendered to HTML with `dioxus-ssr` when the
//! response is built, so tests can assert on the view model itself.

pub mod components;
pub mod pages;

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use dioxus::prelude::*;

use crate::view::pages::{
    auth::{SignedOutPage, SignedOutViewModel},
    company_details::{
        BusinessAddressPage, BusinessAddressPostcodePage, BusinessAddressPostcodeViewModel,
        BusinessAddressViewModel, CheckCompanyDetailsPage, CheckCompanyDetailsViewModel,
        CompanyDetailsUpdatedPage, CompanyDetailsUpdatedViewModel, SelectBusinessAddressPage,
        SelectBusinessAddressViewModel, UkNationPage, UkNationViewModel,
    },
    error::{ErrorPage, ErrorViewModel},
    manage_account::{ManageAccountPage, ManageAccountViewModel},
    permission::{
        ChangeAccountPermissionsPage, ChangeAccountPermissionsViewModel,
        CheckDetailsSendInvitePage, CheckDetailsSendInviteViewModel, JobTitlePage,
        JobTitleViewModel, NameOfConsultancyPage, NameOfConsultancyViewModel,
        RelationshipWithOrganisationPage, RelationshipWithOrganisationViewModel,
    },
    team::{
        RemoveTeamMemberPage, RemoveTeamMemberViewModel, TeamMemberCheckDetailsPage,
        TeamMemberCheckDetailsViewModel, TeamMemberEmailPage, TeamMemberEmailViewModel,
        TeamMemberPermissionsPage, TeamMemberPermissionsViewModel,
    },
    user_details::{
        CheckYourDetailsPage, CheckYourDetailsViewModel, DeclarationPage, DeclarationViewModel,
        DetailsChangeRequestedPage, DetailsChangeRequestedViewModel, WhatAreYourDetailsPage,
        WhatAreYourDetailsViewModel,
    },
};

/// Declares the [`Page`] enum, one variant per view model, along with the `From`
/// conversions and the rendering of each variant through its component.
macro_rules! pages {
    ($($variant:ident($model:ty) => $component:ident),* $(,)?) => {
        /// A page ready to be rendered.
        #[derive(Clone, Debug, PartialEq)]
        pub enum Page {
            $($variant($model),)*
        }

        $(
            impl From<$model> for Page {
                fn from(model: $model) -> Self {
                    Page::$variant(model)
                }
            }
        )*

        impl Page {
            /// Renders the page to a complete HTML document.
            pub fn render(self) -> String {
                let body = match self {
                    $(
                        Page::$variant(model) => {
                            dioxus_ssr::render_element(rsx! { $component { model: model } })
                        }
                    )*
                };

                format!("<!DOCTYPE html>{}", body)
            }
        }
    };
}

pages! {
    ManageAccount(ManageAccountViewModel) => ManageAccountPage,

    TeamMemberEmail(TeamMemberEmailViewModel) => TeamMemberEmailPage,
    TeamMemberPermissions(TeamMemberPermissionsViewModel) => TeamMemberPermissionsPage,
    TeamMemberCheckDetails(TeamMemberCheckDetailsViewModel) => TeamMemberCheckDetailsPage,
    RemoveTeamMember(RemoveTeamMemberViewModel) => RemoveTeamMemberPage,

    ChangeAccountPermissions(ChangeAccountPermissionsViewModel) => ChangeAccountPermissionsPage,
    RelationshipWithOrganisation(RelationshipWithOrganisationViewModel) => RelationshipWithOrganisationPage,
    JobTitle(JobTitleViewModel) => JobTitlePage,
    NameOfConsultancy(NameOfConsultancyViewModel) => NameOfConsultancyPage,
    CheckDetailsSendInvite(CheckDetailsSendInviteViewModel) => CheckDetailsSendInvitePage,

    WhatAreYourDetails(WhatAreYourDetailsViewModel) => WhatAreYourDetailsPage,
    CheckYourDetails(CheckYourDetailsViewModel) => CheckYourDetailsPage,
    Declaration(DeclarationViewModel) => DeclarationPage,
    DetailsChangeRequested(DetailsChangeRequestedViewModel) => DetailsChangeRequestedPage,

    UkNation(UkNationViewModel) => UkNationPage,
    BusinessAddressPostcode(BusinessAddressPostcodeViewModel) => BusinessAddressPostcodePage,
    SelectBusinessAddress(SelectBusinessAddressViewModel) => SelectBusinessAddressPage,
    BusinessAddress(BusinessAddressViewModel) => BusinessAddressPage,
    CheckCompanyDetails(CheckCompanyDetailsViewModel) => CheckCompanyDetailsPage,
    CompanyDetailsUpdated(CompanyDetailsUpdatedViewModel) => CompanyDetailsUpdatedPage,

    SignedOut(SignedOutViewModel) => SignedOutPage,
    Error(ErrorViewModel) => ErrorPage,
}

impl Page {
    /// HTTP status the page is served with.
    pub fn status(&self) -> StatusCode {
        match self {
            Page::Error(model) => {
                StatusCode::from_u16(model.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            _ => StatusCode::OK,
        }
    }
}

impl IntoResponse for Page {
    fn into_response(self) -> Response {
        let status = self.status();

        (status, Html(self.render())).into_response()
    }
}

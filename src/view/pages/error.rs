use dioxus::prelude::*;

use crate::{server::model::page, view::components::Layout};

#[derive(Clone, Debug, PartialEq)]
pub struct ErrorViewModel {
    pub status_code: u16,
}

impl ErrorViewModel {
    pub fn new(status_code: u16) -> Self {
        Self { status_code }
    }

    pub fn title(&self) -> &'static str {
        match self.status_code {
            403 => "You do not have permission to view this page",
            404 => "Page not found",
            _ => "Sorry, there is a problem with the service",
        }
    }

    pub fn message(&self) -> &'static str {
        match self.status_code {
            403 => "Ask an approved or delegated person in your organisation for access.",
            404 => "If you typed the web address, check it is correct.",
            _ => "Try again later.",
        }
    }
}

#[component]
pub fn ErrorPage(model: ErrorViewModel) -> Element {
    let title = model.title();
    let message = model.message();

    rsx! {
        Layout { title: title.to_string(), back_link: None,
            h1 { class: "govuk-heading-l", "{title}" }
            p { class: "govuk-body", "{message}" }
            a { class: "govuk-link", href: page::MANAGE_ACCOUNT, "Return to your account" }
        }
    }
}

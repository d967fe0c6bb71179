use dioxus::prelude::*;

use crate::view::components::Layout;

#[derive(Clone, Debug, PartialEq)]
pub struct SignedOutViewModel {
    pub sign_in_link: String,
}

#[component]
pub fn SignedOutPage(model: SignedOutViewModel) -> Element {
    rsx! {
        Layout { title: "You have signed out".to_string(), back_link: None, show_sign_out: false,
            h1 { class: "govuk-heading-l", "You have signed out" }
            a { class: "govuk-link", href: "{model.sign_in_link}", "Sign in again" }
        }
    }
}

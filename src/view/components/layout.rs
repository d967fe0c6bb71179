use dioxus::prelude::*;

use crate::server::model::page;

/// Page chrome: document head, service header, optional back link and main content.
#[component]
pub fn Layout(
    title: String,
    back_link: Option<String>,
    #[props(default = true)] show_sign_out: bool,
    children: Element,
) -> Element {
    rsx! {
        html { lang: "en",
            head {
                meta { charset: "utf-8" }
                meta { name: "viewport", content: "width=device-width, initial-scale=1" }
                title { "{title} - Manage your account" }
            }
            body { class: "govuk-template__body",
                header { class: "govuk-header",
                    div { class: "govuk-header__container govuk-width-container",
                        a { class: "govuk-header__link govuk-header__service-name",
                            href: page::MANAGE_ACCOUNT,
                            "Manage your account"
                        }
                        if show_sign_out {
                            a { class: "govuk-header__link", href: page::AUTH_LOGOUT,
                                "Sign out"
                            }
                        }
                    }
                }
                div { class: "govuk-width-container",
                    if let Some(back_link) = back_link {
                        a { class: "govuk-back-link", href: "{back_link}", "Back" }
                    }
                    main { class: "govuk-main-wrapper", id: "main-content",
                        {children}
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::hooks::use_language;
use crate::t;

/// Above-the-fold pitch. Always visible, so no reveal wrapper.
#[component]
pub fn Hero() -> Element {
    let _language = use_language();

    rsx! {
        section { id: "hero", class: "section hero",
            div { class: "section__inner",
                h1 { class: "hero__title",
                    {t!("hero-title")}
                    " "
                    span { class: "hero__highlight", {t!("hero-title-highlight")} }
                    " "
                    {t!("hero-title-end")}
                }
                p { class: "hero__description", {t!("hero-description")} }
                div { class: "hero__actions",
                    a { class: "button button--primary", href: "#contact", {t!("hero-cta-quote")} }
                    a { class: "button button--ghost", href: "#portfolio", {t!("hero-cta-projects")} }
                }
            }
        }
    }
}

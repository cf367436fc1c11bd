use dioxus::prelude::*;

use crate::components::header::nav_items;
use crate::core::config::SiteConfig;
use crate::hooks::use_language;
use crate::t;

#[component]
pub fn Footer() -> Element {
    let _language = use_language();
    let config = use_hook(SiteConfig::from_build_env);

    rsx! {
        footer { id: "footer", class: "site-footer",
            div { class: "section__inner site-footer__grid",
                div { class: "site-footer__about",
                    a { class: "site-header__brand", href: "#hero", "mozart_way" }
                    p { {t!("footer-description")} }
                    p {
                        a { href: config.email_href(), "{config.contact_email}" }
                        br {}
                        a { href: config.phone_href(), "{config.contact_phone}" }
                    }
                }
                nav { class: "site-footer__links",
                    h4 { {t!("footer-links")} }
                    ul {
                        for (anchor, label) in nav_items() {
                            li { key: "{anchor}", a { href: "#{anchor}", "{label}" } }
                        }
                    }
                }
                div { class: "site-footer__legal",
                    h4 { {t!("footer-legal")} }
                    ul {
                        li { a { id: "privacy", href: "#privacy", {t!("footer-privacy")} } }
                        li { a { href: "#terms", {t!("footer-terms")} } }
                        li { a { href: "#rodo", {t!("footer-rodo")} } }
                    }
                }
            }
            div { class: "section__inner site-footer__bottom",
                p { {t!("footer-copyright")} }
                p { class: "site-footer__notice", {t!("footer-rodo-notice")} }
            }
        }
    }
}

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::core::locale::Language;
use crate::hooks::{use_language, use_locale};
use crate::t;

// Landing stylesheet (inlined as well for release native builds)
const LANDING_CSS: Asset = asset!("/assets/styling/landing.css");
const LANDING_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/landing.css"
));

/// In-page navigation targets paired with their localized labels, in display
/// order. The anchor is the `id` of the section it scrolls to.
pub fn nav_items() -> [(&'static str, String); 5] {
    [
        ("services", t!("nav-services")),
        ("portfolio", t!("nav-portfolio")),
        ("testimonials", t!("nav-testimonials")),
        ("process", t!("nav-process")),
        ("contact", t!("nav-contact")),
    ]
}

/// Sticky site header: brand, section anchors, PL/EN toggle and the mobile
/// menu button. Every render pulls fresh strings, and reading the language
/// signal re-renders the header after a switch.
#[component]
pub fn SiteHeader() -> Element {
    let current = use_language();
    let mut menu_open = use_signal(|| false);

    debug!("[i18n] SiteHeader render lang={current}");

    let header_class = if menu_open() {
        "site-header site-header--open"
    } else {
        "site-header"
    };
    let menu_label = if menu_open() {
        t!("nav-menu-close")
    } else {
        t!("nav-menu-open")
    };

    rsx! {
        document::Link { rel: "stylesheet", href: LANDING_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{LANDING_CSS_INLINE}" }
        }

        a { class: "skip-link", href: "#main", {t!("skip-to-content")} }

        header { id: "header", class: "{header_class}",
            div { class: "site-header__inner",
                a { class: "site-header__brand", href: "#hero", "mozart_way" }

                nav { class: "site-header__links",
                    for (anchor, label) in nav_items() {
                        a {
                            key: "{anchor}",
                            class: "site-header__link",
                            href: "#{anchor}",
                            onclick: move |_| menu_open.set(false),
                            "{label}"
                        }
                    }
                    a {
                        class: "button button--primary",
                        href: "#contact",
                        onclick: move |_| menu_open.set(false),
                        {t!("nav-get-quote")}
                    }
                }

                div { class: "site-header__locale", role: "group",
                    span { class: "visually-hidden", {t!("nav-language-label")} }
                    for language in Language::ALL {
                        LocaleToggle { key: "{language}", language, active: language == current }
                    }
                }

                button {
                    class: "site-header__menu-toggle",
                    r#type: "button",
                    aria_expanded: "{menu_open()}",
                    aria_label: "{menu_label}",
                    onclick: move |_| {
                        let open = menu_open();
                        menu_open.set(!open);
                    },
                    "☰"
                }
            }
        }
    }
}

#[component]
fn LocaleToggle(language: Language, active: bool) -> Element {
    let locale = use_locale();
    let class = if active {
        "locale-toggle locale-toggle--active"
    } else {
        "locale-toggle"
    };

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            lang: language.code(),
            aria_pressed: "{active}",
            onclick: move |_| {
                locale.set_language(language);
            },
            "{language.toggle_label()}"
        }
    }
}

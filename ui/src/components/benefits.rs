use dioxus::prelude::*;

use crate::components::Reveal;
use crate::hooks::use_language;
use crate::t;

/// Stagger between consecutive benefit cards.
const STAGGER_MS: u32 = 100;

fn benefits() -> [(&'static str, String, String); 6] {
    [
        ("design", t!("benefit-design-title"), t!("benefit-design-description")),
        ("responsive", t!("benefit-responsive-title"), t!("benefit-responsive-description")),
        ("seo", t!("benefit-seo-title"), t!("benefit-seo-description")),
        ("cms", t!("benefit-cms-title"), t!("benefit-cms-description")),
        ("security", t!("benefit-security-title"), t!("benefit-security-description")),
        ("support", t!("benefit-support-title"), t!("benefit-support-description")),
    ]
}

#[component]
pub fn Benefits() -> Element {
    let _language = use_language();

    rsx! {
        section { id: "benefits", class: "section section--alt",
            div { class: "section__inner",
                Reveal {
                    header { class: "section__header",
                        span { class: "section__badge", {t!("benefits-badge")} }
                        h2 { class: "section__title", {t!("benefits-title")} }
                        p { class: "section__subtitle", {t!("benefits-subtitle")} }
                    }
                }
                div { class: "card-grid",
                    for (index, (id, title, description)) in benefits().into_iter().enumerate() {
                        Reveal { key: "{id}", delay_ms: index as u32 * STAGGER_MS,
                            div { class: "card benefit benefit--{id}",
                                h3 { "{title}" }
                                p { "{description}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

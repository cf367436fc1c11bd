use dioxus::prelude::*;

use crate::components::Reveal;
use crate::hooks::use_language;
use crate::i18n;
use crate::t;

struct Package {
    name: &'static str,
    price: String,
    description: String,
    features: Vec<String>,
    featured: bool,
}

fn packages() -> [Package; 3] {
    [
        Package {
            name: "Standard",
            price: t!("service-standard-price"),
            description: t!("service-standard-description"),
            features: i18n::lines(&t!("service-standard-features")),
            featured: false,
        },
        Package {
            name: "Pro",
            price: t!("service-pro-price"),
            description: t!("service-pro-description"),
            features: i18n::lines(&t!("service-pro-features")),
            featured: true,
        },
        Package {
            name: "Max",
            price: t!("service-max-price"),
            description: t!("service-max-description"),
            features: i18n::lines(&t!("service-max-features")),
            featured: false,
        },
    ]
}

#[component]
pub fn Services() -> Element {
    let _language = use_language();
    let price_note = t!("services-price-note");

    rsx! {
        section { id: "services", class: "section",
            div { class: "section__inner",
                Reveal { section: "services",
                    header { class: "section__header",
                        h2 { class: "section__title", {t!("services-title")} }
                        p { class: "section__subtitle", {t!("services-subtitle")} }
                    }
                    div { class: "card-grid",
                        for package in packages() {
                            article {
                                key: "{package.name}",
                                class: if package.featured { "card card--featured" } else { "card" },
                                if package.featured {
                                    span { class: "card__badge", {t!("services-most-popular")} }
                                }
                                h3 { "{package.name}" }
                                p { class: "card__price",
                                    "{package.price} "
                                    small { "{price_note}" }
                                }
                                p { "{package.description}" }
                                ul { class: "card__features",
                                    for feature in package.features.iter() {
                                        li { "{feature}" }
                                    }
                                }
                                a { class: "button button--primary", href: "#contact", {t!("services-cta")} }
                            }
                        }
                    }
                }
            }
        }
    }
}

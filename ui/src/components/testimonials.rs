use dioxus::prelude::*;

use crate::components::Reveal;
use crate::hooks::use_language;
use crate::t;

const RATING: usize = 5;

struct Testimonial {
    author: &'static str,
    quote: String,
    role: String,
}

fn testimonials() -> [Testimonial; 3] {
    [
        Testimonial {
            author: "Anna Kowalska",
            quote: t!("testimonial-1-quote"),
            role: t!("testimonial-1-role"),
        },
        Testimonial {
            author: "Piotr Nowak",
            quote: t!("testimonial-2-quote"),
            role: t!("testimonial-2-role"),
        },
        Testimonial {
            author: "Maria Wiśniewska",
            quote: t!("testimonial-3-quote"),
            role: t!("testimonial-3-role"),
        },
    ]
}

#[component]
pub fn Testimonials() -> Element {
    let _language = use_language();
    let stars = "★".repeat(RATING);

    rsx! {
        section { id: "testimonials", class: "section section--alt",
            div { class: "section__inner",
                Reveal {
                    header { class: "section__header",
                        span { class: "section__badge", {t!("nav-testimonials")} }
                        h2 { class: "section__title", {t!("testimonials-title")} }
                        p { class: "section__subtitle", {t!("testimonials-subtitle")} }
                    }
                    div { class: "card-grid",
                        for testimonial in testimonials() {
                            figure { key: "{testimonial.author}", class: "card testimonial",
                                div { class: "testimonial__rating", aria_label: "{RATING}/5", "{stars}" }
                                blockquote { "“{testimonial.quote}”" }
                                figcaption {
                                    strong { "{testimonial.author}" }
                                    span { class: "testimonial__role", "{testimonial.role}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::components::Reveal;
use crate::hooks::use_language;
use crate::t;

struct Step {
    title: String,
    description: String,
    duration: String,
}

fn steps() -> [Step; 4] {
    [
        Step {
            title: t!("process-step-1-title"),
            description: t!("process-step-1-description"),
            duration: t!("process-step-1-duration"),
        },
        Step {
            title: t!("process-step-2-title"),
            description: t!("process-step-2-description"),
            duration: t!("process-step-2-duration"),
        },
        Step {
            title: t!("process-step-3-title"),
            description: t!("process-step-3-description"),
            duration: t!("process-step-3-duration"),
        },
        Step {
            title: t!("process-step-4-title"),
            description: t!("process-step-4-description"),
            duration: t!("process-step-4-duration"),
        },
    ]
}

#[component]
pub fn Process() -> Element {
    let _language = use_language();

    rsx! {
        section { id: "process", class: "section",
            div { class: "section__inner",
                Reveal {
                    header { class: "section__header",
                        h2 { class: "section__title", {t!("process-title")} }
                        p { class: "section__subtitle", {t!("process-subtitle")} }
                    }
                    ol { class: "process",
                        for (index, step) in steps().into_iter().enumerate() {
                            li { key: "{index}", class: "card process__step",
                                span { class: "process__number", {format!("{:02}", index + 1)} }
                                h3 { "{step.title}" }
                                p { "{step.description}" }
                                span { class: "process__duration", "{step.duration}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::components::Reveal;
use crate::hooks::use_language;
use crate::i18n;
use crate::t;

struct CaseStudy {
    title: &'static str,
    subtitle: String,
    category: String,
    description: String,
    results: Vec<String>,
    technologies: &'static [&'static str],
    /// Served from `public/images`; `mozartway-optimize` produces the `.webp`.
    image: &'static str,
    link: &'static str,
}

fn case_studies() -> [CaseStudy; 3] {
    [
        CaseStudy {
            title: "AutoElite",
            subtitle: t!("case-autoelite-subtitle"),
            category: t!("case-autoelite-category"),
            description: t!("case-autoelite-description"),
            results: i18n::lines(&t!("case-autoelite-results")),
            technologies: &["React", "Next.js", "Tailwind"],
            image: "/images/case-autoelite.webp",
            link: "https://elitemetro.mozartway.com/",
        },
        CaseStudy {
            title: "GreenGarden",
            subtitle: t!("case-greengarden-subtitle"),
            category: t!("case-greengarden-category"),
            description: t!("case-greengarden-description"),
            results: i18n::lines(&t!("case-greengarden-results")),
            technologies: &["React", "Tailwind", "Vite"],
            image: "/images/case-greengarden.webp",
            link: "https://greengarden.mozartway.com/",
        },
        CaseStudy {
            title: "Sigma Study",
            subtitle: t!("case-sigma-subtitle"),
            category: t!("case-sigma-category"),
            description: t!("case-sigma-description"),
            results: i18n::lines(&t!("case-sigma-results")),
            technologies: &[],
            image: "/images/case-sigma.webp",
            link: "https://www.sigma-study.net/",
        },
    ]
}

#[component]
pub fn CaseStudies() -> Element {
    let _language = use_language();
    let results_label = t!("cases-results");
    let technologies_label = t!("cases-technologies");
    let view_label = t!("cases-view-project");

    rsx! {
        section { id: "portfolio", class: "section",
            div { class: "section__inner",
                Reveal {
                    header { class: "section__header",
                        h2 { class: "section__title", {t!("cases-title")} }
                        p { class: "section__subtitle", {t!("cases-subtitle")} }
                    }
                    div { class: "card-grid",
                        for study in case_studies() {
                            article { key: "{study.title}", class: "card case-study",
                                img {
                                    class: "case-study__image",
                                    src: study.image,
                                    alt: study.title,
                                    loading: "lazy",
                                }
                                span { class: "case-study__category", "{study.category}" }
                                h3 { "{study.title}" }
                                p { class: "case-study__subtitle", "{study.subtitle}" }
                                p { "{study.description}" }
                                h4 { "{results_label}" }
                                ul { class: "case-study__results",
                                    for result in study.results.iter() {
                                        li { "{result}" }
                                    }
                                }
                                if !study.technologies.is_empty() {
                                    h4 { "{technologies_label}" }
                                    p { class: "case-study__technologies", {study.technologies.join(" · ")} }
                                }
                                a {
                                    class: "button button--ghost",
                                    href: study.link,
                                    target: "_blank",
                                    rel: "noopener noreferrer",
                                    "{view_label}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

use dioxus::logger::tracing::debug;
use dioxus::prelude::*;

use crate::components::{
    Benefits, CaseStudies, Contact, Footer, Hero, Process, ScrollToTop, Services, SiteHeader,
    Testimonials,
};
use crate::hooks::use_language;

/// The whole single-page site. Expects [`crate::hooks::use_locale_provider`]
/// to have run in an ancestor.
#[component]
pub fn Landing() -> Element {
    let language = use_language();
    debug!("[i18n] Landing render lang={language}");

    rsx! {
        div { class: "landing", lang: language.code(),
            SiteHeader {}
            main { id: "main",
                Hero {}
                Testimonials {}
                Services {}
                CaseStudies {}
                Benefits {}
                Process {}
                Contact {}
            }
            Footer {}
            ScrollToTop {}
        }
    }
}

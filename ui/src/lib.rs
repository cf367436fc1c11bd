//! Shared UI crate for the mozart_way landing page. The core (scroll reveal,
//! URL-driven language, contact form) and every section live here; platform
//! crates only launch the app.

pub mod core;
pub mod hooks;
pub mod i18n;
pub mod views;

pub mod components {
    // Site chrome
    pub mod footer;
    pub mod header;
    pub mod scroll_to_top;
    pub use footer::Footer;
    pub use header::SiteHeader;
    pub use scroll_to_top::ScrollToTop;

    // Scroll-reveal wrapper shared by the sections below the hero
    mod reveal;
    pub use reveal::Reveal;

    // Landing sections, in page order
    mod benefits;
    mod case_studies;
    mod contact;
    mod hero;
    mod process;
    mod services;
    mod testimonials;
    pub use benefits::Benefits;
    pub use case_studies::CaseStudies;
    pub use contact::Contact;
    pub use hero::Hero;
    pub use process::Process;
    pub use services::Services;
    pub use testimonials::Testimonials;
}

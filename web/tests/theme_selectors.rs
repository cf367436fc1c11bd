#![cfg(test)]
/*!
Stylesheet selector lint for the web build.

Components in `ui` toggle classes (reveal state, open mobile menu, active
language, form feedback) that only have an effect if the shared stylesheet
defines them. A renamed or dropped selector fails here instead of silently
leaving sections invisible at runtime.

If you intentionally rename a selector, update the component markup and
REQUIRED_SELECTORS together.
*/

const LANDING_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/landing.css"
));

const MAIN_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/main.css"));

/// Selectors the `ui` components depend on.
const REQUIRED_SELECTORS: &[&str] = &[
    ":root",
    // Reveal transitions
    ".reveal {",
    ".reveal--visible",
    "@media (prefers-reduced-motion: reduce)",
    // Header
    ".site-header {",
    ".site-header--open",
    ".site-header__menu-toggle",
    ".locale-toggle--active",
    ".skip-link",
    ".visually-hidden",
    // Sections
    ".section {",
    ".section--alt",
    ".card--featured",
    ".button--primary",
    ".button--ghost",
    // Scroll-to-top button
    ".scroll-top {",
    ".scroll-top--visible",
    // Contact feedback
    ".contact-form__status--error",
    ".contact-form__status--success",
];

#[test]
fn landing_stylesheet_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !LANDING_CSS.contains(*sel))
        .copied()
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in landing.css:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn hidden_reveal_state_is_overridden_for_reduced_motion() {
    let reduced = LANDING_CSS
        .split("@media (prefers-reduced-motion: reduce)")
        .nth(1)
        .unwrap_or_default();
    assert!(
        reduced.contains(".reveal") && reduced.contains("opacity: 1"),
        "Reduced-motion block must force revealed sections visible"
    );
}

#[test]
fn main_stylesheet_not_trivially_empty() {
    assert!(
        MAIN_CSS.contains("body {"),
        "web/assets/main.css lost its body rules; did the file get truncated?"
    );
}

use dioxus::prelude::*;

use crate::core::visibility::VisibilityConfig;
use crate::hooks::use_section_visibility;

/// Fades its children in the first time they scroll into view.
///
/// With `section` set the reveal is remembered for the browser session, so a
/// visitor returning to the page (or switching language) sees the section
/// immediately.
#[component]
pub fn Reveal(
    section: Option<&'static str>,
    #[props(default)] delay_ms: u32,
    children: Element,
) -> Element {
    let visibility = use_section_visibility(match section {
        Some(key) => VisibilityConfig::section(key),
        None => VisibilityConfig::default(),
    });

    let class = if visibility.is_visible() {
        "reveal reveal--visible"
    } else {
        "reveal"
    };

    rsx! {
        div {
            class: "{class}",
            style: "transition-delay: {delay_ms}ms",
            onmounted: visibility.onmounted(),
            {children}
        }
    }
}

use dioxus::prelude::*;

use crate::hooks::{use_language, use_scroll_to_top};
use crate::t;

/// Floating button that appears once the visitor has scrolled down and
/// smooth-scrolls back to the top.
#[component]
pub fn ScrollToTop() -> Element {
    let _language = use_language();
    let scroll = use_scroll_to_top();
    let label = t!("scroll-to-top");
    let (class, hidden, tabindex) = if scroll.is_shown() {
        ("scroll-top scroll-top--visible", "false", "0")
    } else {
        ("scroll-top", "true", "-1")
    };

    rsx! {
        button {
            r#type: "button",
            class: "{class}",
            aria_label: "{label}",
            aria_hidden: "{hidden}",
            tabindex: "{tabindex}",
            onclick: move |_| scroll.scroll_to_top(),
            "↑"
        }
    }
}

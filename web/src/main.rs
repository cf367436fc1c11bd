use dioxus::prelude::*;

use ui::hooks::use_locale_provider;
use ui::views::Landing;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Language comes from the URL (`/en...` or Polish) and follows back/forward.
    use_locale_provider();

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Title { "mozart_way" }

        Landing {}
    }
}

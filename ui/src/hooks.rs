//! Dioxus hooks exposing the core to components.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::core::locale::{language_from_path, Language, LocaleResolver};
use crate::core::platform;
use crate::core::scroll::{shows_scroll_to_top, watch_scroll_to_top, ScrollHost};
use crate::core::visibility::{SectionWatch, VisibilityConfig};
use crate::i18n;

/// Process-wide language, shared through context by [`use_locale_provider`].
#[derive(Clone)]
pub struct LocaleContext {
    language: Signal<Language>,
    resolver: Rc<LocaleResolver>,
}

impl LocaleContext {
    /// Current language; reading it subscribes the calling component.
    pub fn language(&self) -> Language {
        *self.language.read()
    }

    pub fn set_language(&self, target: Language) {
        self.resolver.set_language(target);
    }
}

impl PartialEq for LocaleContext {
    fn eq(&self, other: &Self) -> bool {
        self.language == other.language && Rc::ptr_eq(&self.resolver, &other.resolver)
    }
}

fn select_bundle(language: Language) {
    if let Err(err) = i18n::set_language(language) {
        warn!("[i18n] Failed selecting {language} bundle ({err}); keeping previous");
    }
}

/// Resolve the language from the URL once, keep it in sync with the history
/// stack and provide it to every descendant. Call this at the root.
pub fn use_locale_provider() -> LocaleContext {
    let location = use_hook(platform::location);
    let language = use_signal({
        let location = location.clone();
        move || language_from_path(&location.pathname())
    });

    let resolver = use_hook(move || {
        i18n::init();
        let resolver = LocaleResolver::initialize(location, move |next| {
            select_bundle(next);
            let mut language = language;
            language.set(next);
        });
        select_bundle(resolver.language());
        Rc::new(resolver)
    });

    use_context_provider(|| LocaleContext { language, resolver })
}

pub fn use_locale() -> LocaleContext {
    use_context::<LocaleContext>()
}

/// Current language, subscribing the component so its `t!` lookups refresh
/// after a switch.
pub fn use_language() -> Language {
    use_locale().language()
}

/// Visibility state for one revealable section.
#[derive(Clone)]
pub struct SectionVisibility {
    visible: Signal<bool>,
    watch: Rc<SectionWatch>,
}

impl SectionVisibility {
    pub fn is_visible(&self) -> bool {
        *self.visible.read()
    }

    /// Handler for the region's `onmounted` event; attaches the observer.
    pub fn onmounted(&self) -> impl FnMut(MountedEvent) + 'static {
        let watch = self.watch.clone();
        let visible = self.visible;
        move |event: MountedEvent| {
            let mut visible = visible;
            let host = platform::intersection_host();
            let region = platform::region_of(&event);
            watch.attach(&host, region.as_ref(), move |now| visible.set(now));
        }
    }
}

/// Track when the section's region scrolls into view. With a section key the
/// result is remembered for the rest of the browser session.
pub fn use_section_visibility(config: VisibilityConfig) -> SectionVisibility {
    let watch = use_hook(move || Rc::new(SectionWatch::new(config, platform::session_store())));
    let visible = use_signal({
        let watch = watch.clone();
        move || watch.is_visible()
    });

    use_drop({
        let watch = watch.clone();
        move || watch.detach()
    });

    SectionVisibility { visible, watch }
}

/// State behind the floating scroll-to-top button.
#[derive(Clone)]
pub struct ScrollToTopState {
    shown: Signal<bool>,
    host: Rc<dyn ScrollHost>,
}

impl ScrollToTopState {
    pub fn is_shown(&self) -> bool {
        *self.shown.read()
    }

    pub fn scroll_to_top(&self) {
        self.host.scroll_to_top();
    }
}

/// Show the button once the page is scrolled far enough down.
pub fn use_scroll_to_top() -> ScrollToTopState {
    let host = use_hook(platform::scroll_host);
    let mut shown = use_signal({
        let host = host.clone();
        move || shows_scroll_to_top(host.offset())
    });

    let subscription = use_hook({
        let host = host.clone();
        move || {
            let (_, subscription) = watch_scroll_to_top(&*host, move |now| shown.set(now));
            Rc::new(RefCell::new(subscription))
        }
    });

    use_drop(move || subscription.borrow_mut().unsubscribe());

    ScrollToTopState { shown, host }
}

//! Window scroll position capability and the scroll-to-top button rule.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::subscription::Subscription;

/// Vertical offset (px) past which the scroll-to-top button is shown.
pub const SCROLL_TOP_THRESHOLD: f64 = 500.0;

pub type ScrollCallback = Box<dyn FnMut(f64)>;

pub trait ScrollHost {
    /// Current vertical scroll offset in CSS pixels.
    fn offset(&self) -> f64;

    /// Run `callback` with the new offset after every scroll.
    fn on_scroll(&self, callback: ScrollCallback) -> Subscription;

    /// Scroll (smoothly, where supported) back to the top of the page.
    fn scroll_to_top(&self);
}

pub fn shows_scroll_to_top(offset: f64) -> bool {
    offset > SCROLL_TOP_THRESHOLD
}

/// Whether the button should show right now, plus a subscription calling
/// `on_change` on every scroll that crosses the threshold.
pub fn watch_scroll_to_top(
    host: &dyn ScrollHost,
    mut on_change: impl FnMut(bool) + 'static,
) -> (bool, Subscription) {
    let initial = shows_scroll_to_top(host.offset());
    let shown = Rc::new(Cell::new(initial));
    let subscription = host.on_scroll(Box::new(move |offset| {
        let now = shows_scroll_to_top(offset);
        if shown.replace(now) != now {
            on_change(now);
        }
    }));
    (initial, subscription)
}

struct Listener {
    id: u64,
    callback: Rc<RefCell<ScrollCallback>>,
}

/// Scroll position kept in memory; stands in for the window off the browser
/// and in tests. Clones share state.
#[derive(Clone, Default)]
pub struct MemoryScroll {
    offset: Rc<Cell<f64>>,
    listeners: Rc<RefCell<Vec<Listener>>>,
    next_id: Rc<Cell<u64>>,
}

impl MemoryScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump to `offset` and notify listeners like a scroll event would.
    pub fn scroll_to(&self, offset: f64) {
        self.offset.set(offset);
        let callbacks: Vec<_> = self
            .listeners
            .borrow()
            .iter()
            .map(|l| l.callback.clone())
            .collect();
        for callback in callbacks {
            (callback.borrow_mut())(offset);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl ScrollHost for MemoryScroll {
    fn offset(&self) -> f64 {
        self.offset.get()
    }

    fn on_scroll(&self, callback: ScrollCallback) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push(Listener {
            id,
            callback: Rc::new(RefCell::new(callback)),
        });

        let listeners = Rc::downgrade(&self.listeners);
        Subscription::new(move || {
            if let Some(listeners) = listeners.upgrade() {
                listeners.borrow_mut().retain(|l| l.id != id);
            }
        })
    }

    fn scroll_to_top(&self) {
        self.scroll_to(0.0);
    }
}

/// `window.scrollY`, passive `scroll` listener and smooth `scrollTo`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserScroll;

#[cfg(target_arch = "wasm32")]
impl ScrollHost for BrowserScroll {
    fn offset(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn on_scroll(&self, mut callback: ScrollCallback) -> Subscription {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return Subscription::inert();
        };

        let reader = window.clone();
        let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            callback(reader.scroll_y().unwrap_or(0.0));
        });
        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(true);
        if window
            .add_event_listener_with_callback_and_add_event_listener_options(
                "scroll",
                handler.as_ref().unchecked_ref(),
                &options,
            )
            .is_err()
        {
            return Subscription::inert();
        }

        let function: js_sys::Function = handler.as_ref().unchecked_ref::<js_sys::Function>().clone();
        Subscription::new(move || {
            window
                .remove_event_listener_with_callback("scroll", &function)
                .ok();
        })
        .retaining(handler)
    }

    fn scroll_to_top(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorded(host: &MemoryScroll) -> (bool, Rc<RefCell<Vec<bool>>>, Subscription) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let (initial, sub) = watch_scroll_to_top(host, move |shown| log.borrow_mut().push(shown));
        (initial, seen, sub)
    }

    #[test]
    fn threshold_is_exclusive() {
        assert!(!shows_scroll_to_top(0.0));
        assert!(!shows_scroll_to_top(500.0));
        assert!(shows_scroll_to_top(500.5));
    }

    #[test]
    fn reports_only_threshold_crossings() {
        let host = MemoryScroll::new();
        let (initial, seen, _sub) = recorded(&host);
        assert!(!initial);
        host.scroll_to(120.0);
        host.scroll_to(800.0);
        host.scroll_to(1600.0);
        host.scroll_to_top();
        assert_eq!(*seen.borrow(), vec![true, false]);
        assert_eq!(host.offset(), 0.0);
    }

    #[test]
    fn starts_shown_when_already_scrolled() {
        let host = MemoryScroll::new();
        host.scroll_to(900.0);
        let (initial, seen, _sub) = recorded(&host);
        assert!(initial);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn dropping_the_subscription_stops_updates() {
        let host = MemoryScroll::new();
        let (_, seen, sub) = recorded(&host);
        assert_eq!(host.listener_count(), 1);
        drop(sub);
        assert_eq!(host.listener_count(), 0);
        host.scroll_to(900.0);
        assert!(seen.borrow().is_empty());
    }
}

//! Browser location / history capability used by the locale resolver.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::locale::Language;
use super::subscription::Subscription;

pub type NavigationCallback = Box<dyn FnMut()>;

pub trait LocationHost {
    /// Current URL path (no query, no hash).
    fn pathname(&self) -> String;

    /// Push `path` as a new history entry without reloading.
    fn push_path(&self, path: &str);

    /// Mirror `language` into the document's `lang` attribute.
    fn set_document_language(&self, language: Language);

    /// Run `callback` after every back/forward navigation.
    fn on_history_navigation(&self, callback: NavigationCallback) -> Subscription;
}

struct Listener {
    id: u64,
    active: Rc<Cell<bool>>,
    callback: Rc<RefCell<NavigationCallback>>,
}

#[derive(Default)]
struct MemoryState {
    entries: Vec<String>,
    index: usize,
    document_language: Option<Language>,
    document_language_writes: usize,
}

/// In-memory history stack with browser push/back/forward semantics.
///
/// Used as the location off the browser and by tests. Clones share state.
#[derive(Clone)]
pub struct MemoryLocation {
    state: Rc<RefCell<MemoryState>>,
    listeners: Rc<RefCell<Vec<Listener>>>,
    next_id: Rc<Cell<u64>>,
}

impl MemoryLocation {
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            state: Rc::new(RefCell::new(MemoryState {
                entries: vec![initial_path.into()],
                ..MemoryState::default()
            })),
            listeners: Rc::new(RefCell::new(Vec::new())),
            next_id: Rc::new(Cell::new(0)),
        }
    }

    pub fn history_len(&self) -> usize {
        self.state.borrow().entries.len()
    }

    pub fn entries(&self) -> Vec<String> {
        self.state.borrow().entries.clone()
    }

    pub fn document_language(&self) -> Option<Language> {
        self.state.borrow().document_language
    }

    pub fn document_language_writes(&self) -> usize {
        self.state.borrow().document_language_writes
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Browser "back". Returns false at the start of history.
    pub fn back(&self) -> bool {
        self.step(-1)
    }

    /// Browser "forward". Returns false at the end of history.
    pub fn forward(&self) -> bool {
        self.step(1)
    }

    fn step(&self, delta: isize) -> bool {
        {
            let mut state = self.state.borrow_mut();
            let Some(target) = state.index.checked_add_signed(delta) else {
                return false;
            };
            if target >= state.entries.len() {
                return false;
            }
            state.index = target;
        }
        self.fire_navigation();
        true
    }

    fn fire_navigation(&self) {
        let targets: Vec<(Rc<Cell<bool>>, Rc<RefCell<NavigationCallback>>)> = self
            .listeners
            .borrow()
            .iter()
            .map(|l| (l.active.clone(), l.callback.clone()))
            .collect();
        for (active, callback) in targets {
            if active.get() {
                (callback.borrow_mut())();
            }
        }
    }
}

impl LocationHost for MemoryLocation {
    fn pathname(&self) -> String {
        let state = self.state.borrow();
        state.entries.get(state.index).cloned().unwrap_or_else(|| "/".to_string())
    }

    fn push_path(&self, path: &str) {
        let mut state = self.state.borrow_mut();
        let keep = state.index + 1;
        state.entries.truncate(keep);
        state.entries.push(path.to_string());
        state.index = keep;
    }

    fn set_document_language(&self, language: Language) {
        let mut state = self.state.borrow_mut();
        state.document_language = Some(language);
        state.document_language_writes += 1;
    }

    fn on_history_navigation(&self, callback: NavigationCallback) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let active = Rc::new(Cell::new(true));
        self.listeners.borrow_mut().push(Listener {
            id,
            active: active.clone(),
            callback: Rc::new(RefCell::new(callback)),
        });

        let listeners = Rc::downgrade(&self.listeners);
        Subscription::new(move || {
            active.set(false);
            if let Some(listeners) = listeners.upgrade() {
                listeners.borrow_mut().retain(|l| l.id != id);
            }
        })
    }
}

/// `window.location` + `window.history` + `<html lang>`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserLocation;

#[cfg(target_arch = "wasm32")]
impl LocationHost for BrowserLocation {
    fn pathname(&self) -> String {
        web_sys::window()
            .and_then(|w| w.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    fn push_path(&self, path: &str) {
        let pushed = web_sys::window()
            .ok_or_else(|| wasm_bindgen::JsValue::from_str("window unavailable"))
            .and_then(|w| w.history())
            .and_then(|h| h.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path)));
        if let Err(err) = pushed {
            dioxus::logger::tracing::warn!("[i18n] history.pushState({path}) failed: {err:?}");
        }
    }

    fn set_document_language(&self, language: Language) {
        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());
        if let Some(root) = root {
            root.set_attribute("lang", language.code()).ok();
        }
    }

    fn on_history_navigation(&self, mut callback: NavigationCallback) -> Subscription {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return Subscription::inert();
        };

        let handler = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            callback();
        });
        if window
            .add_event_listener_with_callback("popstate", handler.as_ref().unchecked_ref())
            .is_err()
        {
            return Subscription::inert();
        }

        let function: js_sys::Function = handler.as_ref().unchecked_ref::<js_sys::Function>().clone();
        Subscription::new(move || {
            window
                .remove_event_listener_with_callback("popstate", &function)
                .ok();
        })
        .retaining(handler)
    }
}

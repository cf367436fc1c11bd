//! Platform selection for the capabilities the core consumes.
//!
//! On `wasm32` every capability is backed by the browser. Elsewhere the
//! in-memory implementations stand in so the crate builds, renders and tests
//! natively; there is no viewport there, so sections keep their seeded state.

use std::rc::Rc;

use dioxus::prelude::MountedEvent;

use super::intersection::IntersectionHost;
use super::location::LocationHost;
use super::scroll::ScrollHost;
use super::storage::SessionStore;

#[cfg(target_arch = "wasm32")]
pub type PlatformIntersectionHost = super::intersection::BrowserIntersectionHost;
#[cfg(not(target_arch = "wasm32"))]
pub type PlatformIntersectionHost = super::intersection::ManualIntersectionHost;

pub type PlatformRegion = <PlatformIntersectionHost as IntersectionHost>::Region;

#[cfg(target_arch = "wasm32")]
pub fn session_store() -> Rc<dyn SessionStore> {
    Rc::new(super::storage::BrowserSessionStore)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn session_store() -> Rc<dyn SessionStore> {
    Rc::new(super::storage::MemorySessionStore::new())
}

#[cfg(target_arch = "wasm32")]
pub fn location() -> Rc<dyn LocationHost> {
    Rc::new(super::location::BrowserLocation)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn location() -> Rc<dyn LocationHost> {
    Rc::new(super::location::MemoryLocation::new("/"))
}

#[cfg(target_arch = "wasm32")]
pub fn scroll_host() -> Rc<dyn ScrollHost> {
    Rc::new(super::scroll::BrowserScroll)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_host() -> Rc<dyn ScrollHost> {
    Rc::new(super::scroll::MemoryScroll::new())
}

pub fn intersection_host() -> PlatformIntersectionHost {
    PlatformIntersectionHost::default()
}

/// Region handle behind a mounted element, if the renderer exposes one.
#[cfg(target_arch = "wasm32")]
pub fn region_of(event: &MountedEvent) -> Option<PlatformRegion> {
    event.data().downcast::<web_sys::Element>().cloned()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn region_of(_event: &MountedEvent) -> Option<PlatformRegion> {
    None
}

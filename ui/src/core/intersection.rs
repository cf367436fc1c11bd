//! Viewport-intersection capability.
//!
//! [`IntersectionHost`] is the seam between the visibility tracker and the
//! environment. On the web it is backed by `IntersectionObserver`; everywhere
//! else (and in tests) [`ManualIntersectionHost`] lets the caller deliver
//! samples by hand.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use thiserror::Error;

use super::subscription::Subscription;
use super::visibility::RootMargin;

/// One intersection-changed notification for an observed region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub is_intersecting: bool,
    /// Visible fraction of the region, 0.0..=1.0.
    pub ratio: f64,
}

impl IntersectionSample {
    pub fn entering(ratio: f64) -> Self {
        Self {
            is_intersecting: true,
            ratio,
        }
    }

    pub fn leaving() -> Self {
        Self {
            is_intersecting: false,
            ratio: 0.0,
        }
    }

    /// Intersecting at or above `threshold`.
    pub fn meets(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio >= threshold
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObserveOptions {
    pub threshold: f64,
    pub root_margin: RootMargin,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ObserveError {
    #[error("intersection observation is not supported here")]
    Unsupported,
    #[error("intersection observer rejected the region: {0}")]
    Rejected(String),
}

pub type SampleCallback = Box<dyn FnMut(IntersectionSample)>;

pub trait IntersectionHost {
    type Region;

    /// Start delivering samples for `region` until the returned handle is
    /// unsubscribed or dropped.
    fn observe(
        &self,
        region: &Self::Region,
        options: &ObserveOptions,
        on_sample: SampleCallback,
    ) -> Result<Subscription, ObserveError>;
}

/// Region handle understood by [`ManualIntersectionHost`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ManualRegion(pub u32);

struct Registration {
    id: u64,
    region: ManualRegion,
    options: ObserveOptions,
    active: Rc<Cell<bool>>,
    callback: Rc<RefCell<SampleCallback>>,
}

/// Host whose samples are pushed explicitly with [`ManualIntersectionHost::emit`].
///
/// Cloning shares the registry, so a test can keep one handle while the
/// tracker holds another.
#[derive(Clone, Default)]
pub struct ManualIntersectionHost {
    registrations: Rc<RefCell<Vec<Registration>>>,
    next_id: Rc<Cell<u64>>,
    total_registrations: Rc<Cell<usize>>,
}

impl ManualIntersectionHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `sample` to every active registration for `region`.
    /// Returns how many callbacks ran.
    pub fn emit(&self, region: ManualRegion, sample: IntersectionSample) -> usize {
        // Snapshot first: callbacks may unsubscribe (and so mutate the registry).
        let targets: Vec<(Rc<Cell<bool>>, Rc<RefCell<SampleCallback>>)> = self
            .registrations
            .borrow()
            .iter()
            .filter(|r| r.region == region)
            .map(|r| (r.active.clone(), r.callback.clone()))
            .collect();

        let mut delivered = 0;
        for (active, callback) in targets {
            if !active.get() {
                continue;
            }
            (callback.borrow_mut())(sample);
            delivered += 1;
        }
        delivered
    }

    /// Registrations that are still receiving samples.
    pub fn active_observations(&self) -> usize {
        self.registrations.borrow().len()
    }

    /// Every `observe` call ever made, including released ones.
    pub fn total_registrations(&self) -> usize {
        self.total_registrations.get()
    }

    pub fn options_for(&self, region: ManualRegion) -> Option<ObserveOptions> {
        self.registrations
            .borrow()
            .iter()
            .find(|r| r.region == region)
            .map(|r| r.options.clone())
    }
}

impl IntersectionHost for ManualIntersectionHost {
    type Region = ManualRegion;

    fn observe(
        &self,
        region: &ManualRegion,
        options: &ObserveOptions,
        on_sample: SampleCallback,
    ) -> Result<Subscription, ObserveError> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.total_registrations
            .set(self.total_registrations.get() + 1);

        let active = Rc::new(Cell::new(true));
        self.registrations.borrow_mut().push(Registration {
            id,
            region: *region,
            options: options.clone(),
            active: active.clone(),
            callback: Rc::new(RefCell::new(on_sample)),
        });

        let registrations = Rc::downgrade(&self.registrations);
        Ok(Subscription::new(move || {
            active.set(false);
            if let Some(registrations) = registrations.upgrade() {
                registrations.borrow_mut().retain(|r| r.id != id);
            }
        }))
    }
}

/// `IntersectionObserver`-backed host; regions are DOM elements.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserIntersectionHost;

#[cfg(target_arch = "wasm32")]
impl IntersectionHost for BrowserIntersectionHost {
    type Region = web_sys::Element;

    fn observe(
        &self,
        region: &web_sys::Element,
        options: &ObserveOptions,
        mut on_sample: SampleCallback,
    ) -> Result<Subscription, ObserveError> {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::{JsCast, JsValue};
        use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    on_sample(IntersectionSample {
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    });
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin.to_string());

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|err| ObserveError::Rejected(format!("{err:?}")))?;
        observer.observe(region);

        let element = region.clone();
        Ok(Subscription::new(move || {
            observer.unobserve(&element);
            observer.disconnect();
        })
        .retaining(callback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> ObserveOptions {
        ObserveOptions {
            threshold: 0.1,
            root_margin: RootMargin::default(),
        }
    }

    #[test]
    fn sample_meets_threshold_inclusively() {
        assert!(IntersectionSample::entering(0.1).meets(0.1));
        assert!(!IntersectionSample::entering(0.05).meets(0.1));
        assert!(!IntersectionSample::leaving().meets(0.0));
    }

    #[test]
    fn emit_reaches_only_matching_region() {
        let host = ManualIntersectionHost::new();
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let _sub = host
            .observe(
                &ManualRegion(1),
                &options(),
                Box::new(move |_| counter.set(counter.get() + 1)),
            )
            .unwrap();

        assert_eq!(host.emit(ManualRegion(2), IntersectionSample::entering(1.0)), 0);
        assert_eq!(host.emit(ManualRegion(1), IntersectionSample::entering(1.0)), 1);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let host = ManualIntersectionHost::new();
        let mut sub = host
            .observe(&ManualRegion(1), &options(), Box::new(|_| {}))
            .unwrap();
        assert_eq!(host.active_observations(), 1);
        sub.unsubscribe();
        assert_eq!(host.active_observations(), 0);
        assert_eq!(host.emit(ManualRegion(1), IntersectionSample::entering(1.0)), 0);
        assert_eq!(host.total_registrations(), 1);
    }
}

//! Scroll-triggered section visibility with session persistence.
//!
//! A [`VisibilityTracker`] is the pure state machine: it is seeded from the
//! session store and folds intersection samples into a single `visible` flag.
//! A [`SectionWatch`] owns the tracker for one mounted region and manages the
//! observation lifecycle (attach, release on first hit, release on unmount).
//!
//! Sections that were already scrolled past earlier in the session start
//! visible and are never observed again, so remounting them (e.g. after a
//! language switch) does not replay their entrance transition.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use dioxus::logger::tracing::{debug, warn};

use super::intersection::{IntersectionHost, IntersectionSample, ObserveOptions};
use super::storage::{mark_seen, was_seen, SessionStore};
use super::subscription::Subscription;

pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// A single `rootMargin` component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MarginLength {
    Px(f64),
    Percent(f64),
}

impl fmt::Display for MarginLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarginLength::Px(v) => write!(f, "{v}px"),
            MarginLength::Percent(v) => write!(f, "{v}%"),
        }
    }
}

/// Offsets that grow (positive) or shrink (negative) the viewport test box,
/// in CSS margin shorthand order: 1 to 4 components.
#[derive(Debug, Clone, PartialEq)]
pub struct RootMargin(Vec<MarginLength>);

impl Default for RootMargin {
    fn default() -> Self {
        Self(vec![MarginLength::Px(0.0)])
    }
}

impl FromStr for RootMargin {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let parts = raw
            .split_whitespace()
            .map(parse_length)
            .collect::<Result<Vec<_>, _>>()?;
        match parts.len() {
            1..=4 => Ok(Self(parts)),
            0 => Err("empty rootMargin".to_string()),
            n => Err(format!("rootMargin takes 1-4 values, got {n}")),
        }
    }
}

fn parse_length(token: &str) -> Result<MarginLength, String> {
    let (number, ctor): (&str, fn(f64) -> MarginLength) =
        if let Some(n) = token.strip_suffix("px") {
            (n, MarginLength::Px)
        } else if let Some(n) = token.strip_suffix('%') {
            (n, MarginLength::Percent)
        } else {
            return Err(format!("`{token}` must be in px or %"));
        };
    number
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(ctor)
        .ok_or_else(|| format!("`{token}` is not a number"))
}

impl fmt::Display for RootMargin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{part}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityConfig {
    pub threshold: f64,
    pub root_margin: RootMargin,
    pub trigger_once: bool,
    /// Stable id enabling "already seen" persistence across remounts.
    pub section_key: Option<String>,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin: RootMargin::default(),
            trigger_once: true,
            section_key: None,
        }
    }
}

impl VisibilityConfig {
    pub fn section(key: impl Into<String>) -> Self {
        Self {
            section_key: Some(key.into()),
            ..Self::default()
        }
    }

    /// Clamped into 0..=1; NaN falls back to the default.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = if threshold.is_nan() {
            DEFAULT_THRESHOLD
        } else {
            threshold.clamp(0.0, 1.0)
        };
        self
    }

    /// Unparsable margins are logged and replaced by `0px`.
    pub fn with_root_margin(mut self, raw: &str) -> Self {
        self.root_margin = raw.parse().unwrap_or_else(|err| {
            warn!("[visibility] invalid rootMargin {raw:?} ({err}); using 0px");
            RootMargin::default()
        });
        self
    }

    pub fn repeating(mut self) -> Self {
        self.trigger_once = false;
        self
    }

    pub fn observe_options(&self) -> ObserveOptions {
        ObserveOptions {
            threshold: self.threshold,
            root_margin: self.root_margin.clone(),
        }
    }
}

/// Effect of folding one sample into the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SampleOutcome {
    pub changed: bool,
    /// Observation must stop now.
    pub release: bool,
}

#[derive(Debug, Clone)]
pub struct VisibilityTracker {
    config: VisibilityConfig,
    visible: bool,
    done: bool,
}

impl VisibilityTracker {
    pub fn seed(config: VisibilityConfig, store: &dyn SessionStore) -> Self {
        let seen = config
            .section_key
            .as_deref()
            .is_some_and(|key| was_seen(store, key));
        Self {
            config,
            visible: seen,
            done: seen,
        }
    }

    pub fn config(&self) -> &VisibilityConfig {
        &self.config
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn needs_observation(&self) -> bool {
        !self.done
    }

    pub fn apply(&mut self, sample: IntersectionSample, store: &dyn SessionStore) -> SampleOutcome {
        if self.done {
            return SampleOutcome::default();
        }

        let mut outcome = SampleOutcome::default();
        if sample.meets(self.config.threshold) {
            if !self.visible {
                self.visible = true;
                outcome.changed = true;
                if let Some(key) = self.config.section_key.as_deref() {
                    mark_seen(store, key);
                }
            }
            if self.config.trigger_once {
                self.done = true;
                outcome.release = true;
            }
        } else if !self.config.trigger_once && self.visible {
            self.visible = false;
            outcome.changed = true;
        }
        outcome
    }
}

/// Observation lifecycle for one mounted region.
pub struct SectionWatch {
    tracker: Rc<RefCell<VisibilityTracker>>,
    store: Rc<dyn SessionStore>,
    subscription: Rc<RefCell<Option<Subscription>>>,
}

impl SectionWatch {
    pub fn new(config: VisibilityConfig, store: Rc<dyn SessionStore>) -> Self {
        let tracker = VisibilityTracker::seed(config, &*store);
        Self {
            tracker: Rc::new(RefCell::new(tracker)),
            store,
            subscription: Rc::new(RefCell::new(None)),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.tracker.borrow().is_visible()
    }

    pub fn is_observing(&self) -> bool {
        self.subscription
            .borrow()
            .as_ref()
            .is_some_and(Subscription::is_active)
    }

    /// Begin observing `region`. `on_change` receives every new visibility
    /// value. A missing region, an already-visible section or a host that
    /// refuses the observation are all silent no-ops.
    pub fn attach<H: IntersectionHost>(
        &self,
        host: &H,
        region: Option<&H::Region>,
        mut on_change: impl FnMut(bool) + 'static,
    ) {
        self.detach();

        if !self.tracker.borrow().needs_observation() {
            return;
        }
        let Some(region) = region else {
            debug!("[visibility] no region to observe");
            return;
        };

        let options = self.tracker.borrow().config().observe_options();
        let tracker = Rc::downgrade(&self.tracker);
        let store = Rc::downgrade(&self.store);
        let slot = Rc::downgrade(&self.subscription);

        let on_sample = Box::new(move |sample: IntersectionSample| {
            let (Some(tracker), Some(store), Some(slot)) =
                (tracker.upgrade(), store.upgrade(), slot.upgrade())
            else {
                return;
            };
            if !slot.borrow().as_ref().is_some_and(Subscription::is_active) {
                return;
            }

            let (outcome, visible) = {
                let mut tracker = tracker.borrow_mut();
                let outcome = tracker.apply(sample, &*store);
                (outcome, tracker.is_visible())
            };
            if outcome.changed {
                on_change(visible);
            }
            if outcome.release {
                if let Some(sub) = slot.borrow_mut().as_mut() {
                    sub.unsubscribe();
                }
            }
        });

        match host.observe(region, &options, on_sample) {
            Ok(sub) => *self.subscription.borrow_mut() = Some(sub),
            Err(err) => debug!("[visibility] observation unavailable: {err}"),
        }
    }

    /// Stop observing (unmount). Safe to call repeatedly.
    pub fn detach(&self) {
        let taken = self.subscription.borrow_mut().take();
        if let Some(mut sub) = taken {
            sub.unsubscribe();
        }
    }
}

impl Drop for SectionWatch {
    fn drop(&mut self) {
        self.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemorySessionStore;

    #[test]
    fn root_margin_parses_shorthand() {
        let margin: RootMargin = "0px 0px -50px 0px".parse().unwrap();
        assert_eq!(margin.to_string(), "0px 0px -50px 0px");
        let margin: RootMargin = "10%".parse().unwrap();
        assert_eq!(margin, RootMargin(vec![MarginLength::Percent(10.0)]));
    }

    #[test]
    fn root_margin_rejects_garbage() {
        for raw in ["", "10", "1px 2px 3px 4px 5px", "abcpx"] {
            assert!(raw.parse::<RootMargin>().is_err(), "{raw:?} should be rejected");
        }
    }

    #[test]
    fn invalid_margin_falls_back_to_zero() {
        let config = VisibilityConfig::default().with_root_margin("nope");
        assert_eq!(config.root_margin.to_string(), "0px");
    }

    #[test]
    fn threshold_is_clamped() {
        assert_eq!(VisibilityConfig::default().with_threshold(2.0).threshold, 1.0);
        assert_eq!(VisibilityConfig::default().with_threshold(-1.0).threshold, 0.0);
        assert_eq!(
            VisibilityConfig::default().with_threshold(f64::NAN).threshold,
            DEFAULT_THRESHOLD
        );
    }

    #[test]
    fn defaults_match_contract() {
        let config = VisibilityConfig::default();
        assert_eq!(config.threshold, 0.1);
        assert_eq!(config.root_margin.to_string(), "0px");
        assert!(config.trigger_once);
        assert!(config.section_key.is_none());
    }

    #[test]
    fn seen_section_seeds_visible_and_done() {
        let store = MemorySessionStore::new().with_entry("section-seen-hero", "true");
        let tracker = VisibilityTracker::seed(VisibilityConfig::section("hero"), &store);
        assert!(tracker.is_visible());
        assert!(!tracker.needs_observation());
    }

    #[test]
    fn below_threshold_does_not_count() {
        let store = MemorySessionStore::new();
        let mut tracker =
            VisibilityTracker::seed(VisibilityConfig::default().with_threshold(0.5), &store);
        let outcome = tracker.apply(IntersectionSample::entering(0.3), &store);
        assert_eq!(outcome, SampleOutcome::default());
        assert!(!tracker.is_visible());
    }

    #[test]
    fn first_hit_releases_when_triggering_once() {
        let store = MemorySessionStore::new();
        let mut tracker = VisibilityTracker::seed(VisibilityConfig::section("services"), &store);
        let outcome = tracker.apply(IntersectionSample::entering(0.4), &store);
        assert!(outcome.changed && outcome.release);
        assert_eq!(store.peek("section-seen-services").as_deref(), Some("true"));

        let after = tracker.apply(IntersectionSample::leaving(), &store);
        assert_eq!(after, SampleOutcome::default());
        assert!(tracker.is_visible());
    }

    #[test]
    fn repeating_tracker_follows_intersection() {
        let store = MemorySessionStore::new();
        let mut tracker = VisibilityTracker::seed(VisibilityConfig::default().repeating(), &store);
        assert!(tracker.apply(IntersectionSample::entering(0.2), &store).changed);
        assert!(!tracker.apply(IntersectionSample::entering(0.6), &store).changed);
        assert!(tracker.apply(IntersectionSample::leaving(), &store).changed);
        assert!(!tracker.is_visible());
        assert!(tracker.needs_observation());
    }
}

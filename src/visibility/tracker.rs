use crate::section::SectionId;

/// Registration side of an intersection observer.
///
/// Implementations share one observation context across every region and
/// deliver [`IntersectionEntry`](super::IntersectionEntry) batches through
/// whatever callback they were constructed with.
pub trait RegionObserver {
    /// Start observing the element whose DOM id is `id`.
    ///
    /// Returns `false` (and observes nothing) when no such element is
    /// attached to the page.
    fn observe(&mut self, id: &str) -> bool;

    /// Stop observing the element whose DOM id is `id`.
    fn unobserve(&mut self, id: &str);

    /// Release the shared observation context.
    fn disconnect(&mut self);
}

/// Owns the observer for the page's sections from mount to unmount.
///
/// Registration happens once, in [`SectionId::ALL`] order. Sections not yet
/// in the page are skipped and never retried. Teardown runs at most once,
/// either explicitly or when the tracker is dropped.
pub struct VisibilityTracker<O: RegionObserver> {
    observer: Option<O>,
    observed: Vec<SectionId>,
}

impl<O: RegionObserver> VisibilityTracker<O> {
    /// Register every section with `observer`.
    pub fn mount(mut observer: O) -> Self {
        let mut observed = Vec::with_capacity(SectionId::COUNT);
        for section in SectionId::ALL {
            if observer.observe(section.as_str()) {
                observed.push(section);
            } else {
                log::debug!("section #{section} not attached, not observed");
            }
        }
        log::debug!(
            "visibility tracker mounted ({}/{} sections)",
            observed.len(),
            SectionId::COUNT
        );
        Self {
            observer: Some(observer),
            observed,
        }
    }

    /// Sections that were attached at mount and are being observed.
    #[must_use]
    pub fn observed(&self) -> &[SectionId] {
        &self.observed
    }

    /// `true` until [`teardown`](Self::teardown) has run.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.observer.is_some()
    }

    /// Unobserve every registered section and release the observer.
    /// Subsequent calls do nothing.
    pub fn teardown(&mut self) {
        let Some(mut observer) = self.observer.take() else {
            return;
        };
        for section in self.observed.drain(..) {
            observer.unobserve(section.as_str());
        }
        observer.disconnect();
        log::debug!("visibility tracker torn down");
    }
}

impl<O: RegionObserver> Drop for VisibilityTracker<O> {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Observe(String),
        Unobserve(String),
        Disconnect,
    }

    /// Observer over a fixed set of attached ids that records every call.
    struct FakeObserver {
        attached: Vec<&'static str>,
        calls: Rc<RefCell<Vec<Call>>>,
    }

    impl RegionObserver for FakeObserver {
        fn observe(&mut self, id: &str) -> bool {
            self.calls.borrow_mut().push(Call::Observe(id.to_owned()));
            self.attached.contains(&id)
        }

        fn unobserve(&mut self, id: &str) {
            self.calls.borrow_mut().push(Call::Unobserve(id.to_owned()));
        }

        fn disconnect(&mut self) {
            self.calls.borrow_mut().push(Call::Disconnect);
        }
    }

    fn fake(attached: Vec<&'static str>) -> (FakeObserver, Rc<RefCell<Vec<Call>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        (
            FakeObserver {
                attached,
                calls: Rc::clone(&calls),
            },
            calls,
        )
    }

    #[test]
    fn registers_all_sections_in_order() {
        let all: Vec<&'static str> = SectionId::ALL.iter().map(|s| s.as_str()).collect();
        let (observer, calls) = fake(all.clone());
        let tracker = VisibilityTracker::mount(observer);
        assert_eq!(tracker.observed(), SectionId::ALL);
        let expected: Vec<Call> =
            all.iter().map(|id| Call::Observe((*id).to_owned())).collect();
        assert_eq!(*calls.borrow(), expected);
    }

    #[test]
    fn missing_sections_are_skipped() {
        let (observer, _calls) = fake(vec!["summary", "education"]);
        let tracker = VisibilityTracker::mount(observer);
        assert_eq!(
            tracker.observed(),
            [SectionId::Summary, SectionId::Education]
        );
    }

    #[test]
    fn teardown_unobserves_then_disconnects_once() {
        let (observer, calls) = fake(vec!["skills", "projects"]);
        let mut tracker = VisibilityTracker::mount(observer);
        calls.borrow_mut().clear();

        tracker.teardown();
        tracker.teardown();

        assert!(!tracker.is_active());
        assert!(tracker.observed().is_empty());
        assert_eq!(
            *calls.borrow(),
            [
                Call::Unobserve("skills".to_owned()),
                Call::Unobserve("projects".to_owned()),
                Call::Disconnect,
            ]
        );
    }

    #[test]
    fn drop_tears_down() {
        let (observer, calls) = fake(vec!["achievements"]);
        drop(VisibilityTracker::mount(observer));
        let calls = calls.borrow();
        assert_eq!(calls.last(), Some(&Call::Disconnect));
        assert!(calls.contains(&Call::Unobserve("achievements".to_owned())));
    }

    #[test]
    fn drop_after_teardown_does_not_repeat() {
        let (observer, calls) = fake(vec![]);
        let mut tracker = VisibilityTracker::mount(observer);
        tracker.teardown();
        drop(tracker);
        let disconnects = calls
            .borrow()
            .iter()
            .filter(|c| **c == Call::Disconnect)
            .count();
        assert_eq!(disconnects, 1);
    }
}

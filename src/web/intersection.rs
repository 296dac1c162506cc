use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use super::{document, js_error};
use crate::error::VitaeError;
use crate::options::RevealOptions;
use crate::visibility::{IntersectionEntry, RegionObserver};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// [`RegionObserver`] backed by one browser `IntersectionObserver` whose
/// root is the viewport.
pub struct DomObserver {
    document: Document,
    observer: IntersectionObserver,
    observed: Vec<(String, Element)>,
    _callback: ObserverCallback,
}

impl DomObserver {
    /// Create the shared observer. `on_entries` receives every batch of
    /// changes the browser reports.
    ///
    /// # Errors
    ///
    /// Returns [`VitaeError::Dom`] if there is no document or the browser
    /// rejects the observer options.
    pub fn new(
        options: &RevealOptions,
        mut on_entries: impl FnMut(Vec<IntersectionEntry>) + 'static,
    ) -> Result<Self, VitaeError> {
        let document = document()?;
        let callback = ObserverCallback::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                let batch = entries
                    .iter()
                    .filter_map(|entry| {
                        entry.dyn_into::<IntersectionObserverEntry>().ok()
                    })
                    .map(|entry| {
                        IntersectionEntry::new(
                            entry.target().id(),
                            entry.is_intersecting(),
                        )
                    })
                    .collect();
                on_entries(batch);
            },
        );

        // No root: observe against the viewport.
        let init = IntersectionObserverInit::new();
        init.set_root_margin(&options.root_margin());
        init.set_threshold(&JsValue::from_f64(options.threshold));
        let observer = IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        )
        .map_err(|e| js_error("IntersectionObserver", &e))?;

        Ok(Self {
            document,
            observer,
            observed: Vec::new(),
            _callback: callback,
        })
    }
}

impl RegionObserver for DomObserver {
    fn observe(&mut self, id: &str) -> bool {
        let Some(element) = self.document.get_element_by_id(id) else {
            return false;
        };
        self.observer.observe(&element);
        self.observed.push((id.to_owned(), element));
        true
    }

    fn unobserve(&mut self, id: &str) {
        if let Some(pos) = self.observed.iter().position(|(i, _)| i == id) {
            let (_, element) = self.observed.swap_remove(pos);
            self.observer.unobserve(&element);
        }
    }

    fn disconnect(&mut self) {
        self.observed.clear();
        self.observer.disconnect();
    }
}

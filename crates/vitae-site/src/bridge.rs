//! Hooks tying the library's browser adapters to the Dioxus component
//! lifecycle.
//!
//! Each hook mounts its adapter in `use_effect` (after the first render,
//! once the DOM nodes exist) and tears it down in `use_drop`. Setup errors
//! are logged and the page carries on without the affected behaviour.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use vitae::options::{NavigationOptions, RevealOptions, SceneOptions};
use vitae::scroll::ScrollState;
use vitae::visibility::{SectionVisibility, VisibilityTracker};
use vitae::web::{self, DomObserver, HeaderScene};

type Slot<T> = Rc<RefCell<Option<T>>>;

fn use_slot<T: 'static>() -> Slot<T> {
    use_hook(|| Rc::new(RefCell::new(None)))
}

// ── Section reveal ───────────────────────────────────────────────────────

/// Per-section reveal flags, kept current by an intersection observer on
/// the six page sections.
pub fn use_section_visibility(options: RevealOptions) -> Signal<SectionVisibility> {
    let mut visibility = use_signal(SectionVisibility::new);
    let tracker: Slot<VisibilityTracker<DomObserver>> = use_slot();

    let slot = Rc::clone(&tracker);
    use_effect(move || {
        if slot.borrow().is_some() {
            return;
        }
        let observer = DomObserver::new(&options, move |entries| {
            let mut next = *visibility.peek();
            if next.apply_all(&entries) {
                visibility.set(next);
            }
        });
        match observer {
            Ok(observer) => {
                *slot.borrow_mut() = Some(VisibilityTracker::mount(observer));
            }
            Err(e) => log::warn!("section reveal disabled: {e}"),
        }
    });

    use_drop(move || {
        if let Some(mut tracker) = tracker.borrow_mut().take() {
            tracker.teardown();
        }
    });

    visibility
}

// ── Scroll ───────────────────────────────────────────────────────────────

/// Navbar and back-to-top flags derived from the window's scroll offset.
pub fn use_scroll_state(options: NavigationOptions) -> Signal<ScrollState> {
    let mut state =
        use_signal(|| ScrollState::from_offset(web::scroll_offset(), &options));
    let listener: Slot<EventListener> = use_slot();

    let slot = Rc::clone(&listener);
    use_effect(move || {
        if slot.borrow().is_some() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let passive = EventListenerOptions {
            phase: EventListenerPhase::Bubble,
            passive: true,
        };
        let listener = EventListener::new_with_options(&window, "scroll", passive, move |_| {
            let next = ScrollState::from_offset(web::scroll_offset(), &options);
            if *state.peek() != next {
                state.set(next);
            }
        });
        *slot.borrow_mut() = Some(listener);
    });

    use_drop(move || drop(listener.borrow_mut().take()));

    state
}

// ── Header scene ─────────────────────────────────────────────────────────

/// Mount the rotating solid behind the element with DOM id `header_id` for
/// the lifetime of the calling component.
pub fn use_header_scene(header_id: &'static str, options: SceneOptions) {
    let scene: Slot<HeaderScene> = use_slot();

    let slot = Rc::clone(&scene);
    use_effect(move || {
        if slot.borrow().is_none() {
            *slot.borrow_mut() = Some(HeaderScene::mount(header_id, &options));
        }
    });

    use_drop(move || {
        if let Some(mut scene) = scene.borrow_mut().take() {
            scene.unmount();
        }
    });
}

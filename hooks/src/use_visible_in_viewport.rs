use std::cell::Cell;

use leptos_use::core::ElementsMaybeSignal;
use leptos_use::use_intersection_observer;

/// Runs `callback` whenever `target` enters the viewport.
///
/// With `once`, the callback runs a single time and the element is no longer observed.
pub fn use_visible_in_viewport<El, T>(target: El, callback: impl Fn() + 'static, once: bool)
where
    El: Into<ElementsMaybeSignal<T, web_sys::Element>>,
    T: Into<web_sys::Element> + Clone + 'static,
{
    let trigger = VisibilityTrigger::new(once);

    let _ = use_intersection_observer(target, move |entries, observer| {
        for entry in entries {
            if trigger.observe(entry.is_intersecting()) {
                callback();
                if once {
                    observer.unobserve(&entry.target());
                }
            }
        }
    });
}

/// Decides whether an intersection change should fire the callback.
#[derive(Debug)]
pub(crate) struct VisibilityTrigger {
    once: bool,
    fired: Cell<bool>,
}

impl VisibilityTrigger {
    pub(crate) fn new(once: bool) -> Self {
        Self {
            once,
            fired: Cell::new(false),
        }
    }

    pub(crate) fn observe(&self, is_intersecting: bool) -> bool {
        if !is_intersecting || (self.once && self.fired.get()) {
            return false;
        }
        self.fired.set(true);
        true
    }
}

use std::cell::Cell;
use std::rc::Rc;

use leptos::*;
use wasm_bindgen::JsCast;

/// Options for [`use_make_inert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InertOptions {
    /// CSS selector for the elements to make inert, e.g. `"main, header"`.
    /// Default is `"body"`.
    pub selector: String,
    /// Class added to `<body>` to prevent scrolling.
    pub prevent_body_scroll_class: Option<String>,
    /// Prevent body scrolling with an inline `overflow-y` style.
    /// Ignored when a class is given.
    pub prevent_body_scroll_inline: bool,
}

impl Default for InertOptions {
    fn default() -> Self {
        Self {
            selector: "body".to_string(),
            prevent_body_scroll_class: None,
            prevent_body_scroll_inline: false,
        }
    }
}

impl InertOptions {
    /// Set the selector.
    pub fn set_selector(self, selector: impl Into<String>) -> Self {
        InertOptions {
            selector: selector.into(),
            ..self
        }
    }

    /// Set the body scroll class.
    pub fn set_prevent_body_scroll_class(self, class: Option<String>) -> Self {
        InertOptions {
            prevent_body_scroll_class: class,
            ..self
        }
    }

    /// Set inline body scroll prevention.
    pub fn set_prevent_body_scroll_inline(self, inline: bool) -> Self {
        InertOptions {
            prevent_body_scroll_inline: inline,
            ..self
        }
    }

    pub(crate) fn body_scroll_lock(&self) -> BodyScrollLock {
        match (&self.prevent_body_scroll_class, self.prevent_body_scroll_inline) {
            (Some(class), _) => BodyScrollLock::Class(class.clone()),
            (None, true) => BodyScrollLock::Inline,
            (None, false) => BodyScrollLock::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum BodyScrollLock {
    Class(String),
    Inline,
    None,
}

impl BodyScrollLock {
    fn apply(&self, locked: bool) {
        let Some(body) = document().body() else {
            logging::debug_warn!("use_make_inert: document has no body");
            return;
        };
        let result = match self {
            BodyScrollLock::Class(class) if locked => body.class_list().add_1(class),
            BodyScrollLock::Class(class) => body.class_list().remove_1(class),
            BodyScrollLock::Inline => body
                .style()
                .set_property("overflow-y", if locked { "hidden" } else { "initial" }),
            BodyScrollLock::None => Ok(()),
        };
        if let Err(error) = result {
            logging::error!("use_make_inert: failed to update body scroll lock: {error:?}");
        }
    }
}

/// Makes the elements matching [`InertOptions::selector`] inert while the calling component
/// is mounted, optionally locking body scrolling as well. Typical for modals and drawers.
pub fn use_make_inert(options: InertOptions) {
    let lock = options.body_scroll_lock();
    let selector = options.selector;

    // Effects never run on the server, neither may the cleanup.
    let applied = Rc::new(Cell::new(false));

    create_effect({
        let selector = selector.clone();
        let lock = lock.clone();
        let applied = applied.clone();
        move |_| {
            toggle_inert(&selector, true);
            lock.apply(true);
            applied.set(true);
        }
    });

    on_cleanup(move || {
        if applied.get() {
            toggle_inert(&selector, false);
            lock.apply(false);
        }
    });
}

fn toggle_inert(selector: &str, inert: bool) {
    let elements = match document().query_selector_all(selector) {
        Ok(elements) => elements,
        Err(error) => {
            logging::error!("use_make_inert: invalid selector {selector}: {error:?}");
            return;
        }
    };

    if elements.length() == 0 {
        logging::warn!("No elements found matching selector: {selector}");
        return;
    }

    for index in 0..elements.length() {
        let Some(element) = elements
            .get(index)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        else {
            continue;
        };
        let result = if inert {
            element.set_attribute("inert", "")
        } else {
            element.remove_attribute("inert")
        };
        if let Err(error) = result {
            logging::error!("use_make_inert: failed to toggle inert: {error:?}");
        }
    }
}

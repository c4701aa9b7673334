use leptos::*;
use leptos_use::{use_event_listener, use_throttle_fn, use_window};

const THROTTLE_MS: f64 = 150.0;

/// Window scroll position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollPosition {
    /// Vertical scroll offset in CSS pixels.
    pub position: f64,
    /// How far the page is scrolled, from 0 to 100.
    pub percentage: f64,
}

impl ScrollPosition {
    /// Position from the current offset, the document height and the viewport height.
    pub fn measure(scroll_y: f64, scroll_height: f64, window_height: f64) -> Self {
        let scrollable = scroll_height - window_height;
        let percentage = if scrollable > 0.0 {
            (scroll_y / scrollable * 100.0).min(100.0)
        } else {
            0.0
        };
        Self {
            position: scroll_y,
            percentage,
        }
    }
}

/// Tracks the window scroll position, updated at most every 150ms.
pub fn use_scroll_position() -> Signal<ScrollPosition> {
    let position = create_rw_signal(ScrollPosition::default());

    let update = use_throttle_fn(
        move || {
            let window = window();
            let scroll_y = window.scroll_y().unwrap_or_default();
            let window_height = window
                .inner_height()
                .ok()
                .and_then(|height| height.as_f64())
                .unwrap_or_default();
            let scroll_height = document()
                .document_element()
                .map(|element| f64::from(element.scroll_height()))
                .unwrap_or_default();
            position.set(ScrollPosition::measure(
                scroll_y,
                scroll_height,
                window_height,
            ));
        },
        THROTTLE_MS,
    );

    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        update();
    });

    position.into()
}

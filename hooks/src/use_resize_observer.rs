use leptos::*;
use leptos_use::core::ElementsMaybeSignal;

/// Observed size of an element. Unset until the first observation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Dimensions {
    /// Content box width in CSS pixels.
    pub width: Option<f64>,
    /// Content box height in CSS pixels.
    pub height: Option<f64>,
}

impl Dimensions {
    /// Measured dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// Keeps an existing measurement, otherwise measures as `width` by `height`.
    pub(crate) fn seeded(self, width: f64, height: f64) -> Self {
        if self.width.is_some() && self.height.is_some() {
            self
        } else {
            Self::new(width, height)
        }
    }
}

/// Tracks the content box size of `target` with a `ResizeObserver`.
///
/// Seeded from the bounding client rect as soon as the target mounts.
///
/// ```
/// use leptos::*;
/// use leptos_hooks::*;
///
/// #[component]
/// fn Measured() -> impl IntoView {
///     let target = create_node_ref::<html::Div>();
///     let dimensions = use_resize_observer(target);
///
///     view! {
///         <div node_ref=target>
///             {move || format!("{:?} x {:?}", dimensions.get().width, dimensions.get().height)}
///         </div>
///     }
/// }
/// ```
pub fn use_resize_observer<El, T>(target: El) -> Signal<Dimensions>
where
    El: Into<ElementsMaybeSignal<T, web_sys::Element>>,
    T: Into<web_sys::Element> + Clone + 'static,
{
    let dimensions = create_rw_signal(Dimensions::default());
    let targets: ElementsMaybeSignal<T, web_sys::Element> = target.into();

    create_effect({
        let targets = targets.clone();
        move |_| {
            let target = targets.get().into_iter().flatten().next();
            if let Some(target) = target {
                let element: web_sys::Element = target.into();
                let rect = element.get_bounding_client_rect();
                dimensions.update(|current| {
                    *current = current.seeded(rect.width(), rect.height());
                });
            }
        }
    });

    leptos_use::use_resize_observer(targets, move |entries, _| {
        if let Some(entry) = entries.first() {
            let rect = entry.content_rect();
            dimensions.set(Dimensions::new(rect.width(), rect.height()));
        }
    });

    dimensions.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmeasured_by_default() {
        let dimensions = Dimensions::default();
        assert_eq!(dimensions.width, None);
        assert_eq!(dimensions.height, None);
        assert_eq!(Dimensions::new(10.0, 20.0).height, Some(20.0));
    }

    #[test]
    fn seed_only_fills_unmeasured() {
        assert_eq!(
            Dimensions::default().seeded(10.0, 20.0),
            Dimensions::new(10.0, 20.0)
        );
        assert_eq!(
            Dimensions::new(30.0, 40.0).seeded(10.0, 20.0),
            Dimensions::new(30.0, 40.0),
            "Observed size should win over the seed"
        );
    }
}

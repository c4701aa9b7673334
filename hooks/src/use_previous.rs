use leptos::*;

/// Tracks the value `value` held before its latest change.
///
/// Returns `None` until the tracked value changes for the first time.
pub fn use_previous<T>(value: impl Fn() -> T + 'static) -> Signal<Option<T>>
where
    T: Clone + 'static,
{
    let previous = create_rw_signal(None::<T>);

    create_isomorphic_effect(move |last: Option<T>| {
        let current = value();
        if let Some(last) = last {
            previous.set(Some(last));
        }
        current
    });

    previous.into()
}

#[cfg(all(test, not(any(feature = "csr", feature = "hydrate"))))]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let _ = create_runtime();

        let value = create_rw_signal(1);
        let previous = use_previous(move || value.get());

        assert_eq!(previous.get_untracked(), None);
    }

    #[test]
    fn follows_changes() {
        let _ = create_runtime();

        let value = create_rw_signal(1);
        let previous = use_previous(move || value.get());

        value.set(2);
        assert_eq!(previous.get_untracked(), Some(1));

        value.set(3);
        assert_eq!(previous.get_untracked(), Some(2));
    }
}

use crate::{FetchError, FetchState};
use leptos::*;

/// Reactive query result.
#[derive(Clone)]
pub struct QueryResult<T, R>
where
    T: 'static,
    R: RefetchFn,
{
    /// The fetched value. None until the current attempt succeeds.
    pub data: Signal<Option<T>>,
    /// The failure of the current attempt, if it failed.
    pub error: Signal<Option<FetchError>>,
    /// Whether an attempt is in flight.
    pub loading: Signal<bool>,
    /// The full state of the query.
    pub state: Signal<FetchState<T>>,

    /// Start a new attempt for the current url.
    pub refetch: R,
}

/// Convenience Trait alias for a Query Result's refetch function.
pub trait RefetchFn: Fn() + Clone {}
impl<R: Fn() + Clone> RefetchFn for R {}

use crate::fetch_controller::FetchController;
use crate::query_result::QueryResult;
use crate::{BrowserTransport, FetchOptions, RefetchFn, RequestIdentity, Transport};
use leptos::*;
use serde::de::DeserializeOwned;

/// Fetches the resource at `url` and tracks the request as reactive state.
///
/// - One request per distinct `url` value. Setting the same value again does not re-fetch,
///   call [`QueryResult::refetch`] for that.
/// - An empty `url` issues nothing and leaves the query idle.
/// - Changing `url`, or unmounting the component, aborts the request in flight. Its result is
///   never observed.
/// - With a timeout, an attempt that takes too long is aborted and fails with
///   [`FetchError::Timeout`](crate::FetchError::Timeout).
///
/// Example
/// ```
/// use leptos::*;
/// use leptos_hooks::*;
/// use std::time::Duration;
/// use serde::*;
///
/// #[derive(Debug, Clone, Deserialize)]
/// struct Todo {
///     id: u32,
///     title: String,
/// }
///
/// #[component]
/// fn TodoView(id: ReadSignal<u32>) -> impl IntoView {
///     let QueryResult {
///         data,
///         error,
///         loading,
///         ..
///     } = use_query::<Todo>(
///         move || format!("https://jsonplaceholder.typicode.com/todos/{}", id.get()),
///         FetchOptions::default().set_timeout(Some(Duration::from_secs(5))),
///     );
///
///     view! {
///         <div>
///             {move || error.get().map(|error| view! { <p>{error.to_string()}</p> })}
///             {move || data.get().map(|todo| todo.title)}
///             <Show when=move || loading.get()>
///                 <p>"Loading..."</p>
///             </Show>
///         </div>
///     }
/// }
/// ```
///
pub fn use_query<T>(
    url: impl Fn() -> String + 'static,
    options: FetchOptions,
) -> QueryResult<T, impl RefetchFn>
where
    T: DeserializeOwned + Clone + 'static,
{
    use_query_with_transport(url, options, BrowserTransport)
}

/// [`use_query`] with a custom [`Transport`].
pub fn use_query_with_transport<T, Tr>(
    url: impl Fn() -> String + 'static,
    options: FetchOptions,
    transport: Tr,
) -> QueryResult<T, impl RefetchFn>
where
    T: DeserializeOwned + Clone + 'static,
    Tr: Transport + 'static,
{
    register_controller(url, options, FetchController::new(transport))
}

fn register_controller<T, Tr>(
    url: impl Fn() -> String + 'static,
    options: FetchOptions,
    controller: FetchController<T, Tr>,
) -> QueryResult<T, impl RefetchFn>
where
    T: DeserializeOwned + Clone + 'static,
    Tr: Transport + 'static,
{
    let options = options.validate();

    let state = create_rw_signal(controller.state());
    let listener = controller.subscribe(move |next| state.set(next.clone()));

    let url = create_memo(move |_| url());
    let refetch = create_trigger();

    // Re-runs on every url change. Starting a new attempt supersedes the previous one.
    create_effect({
        let controller = controller.clone();
        move |_| {
            refetch.track();
            let identity = RequestIdentity::new(url.get(), options.clone());
            if let Some(attempt) = controller.start(identity) {
                spawn_local(attempt);
            }
        }
    });

    on_cleanup(move || {
        if !controller.unsubscribe(listener) {
            logging::debug_warn!("Failed to remove listener.");
        }
        controller.teardown();
    });

    QueryResult {
        data: Signal::derive(move || state.with(|state| state.data().cloned())),
        error: Signal::derive(move || state.with(|state| state.error().cloned())),
        loading: Signal::derive(move || state.with(|state| state.is_loading())),
        state: state.into(),
        refetch: move || refetch.notify(),
    }
}

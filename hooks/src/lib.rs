#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # About Leptos Hooks
//!
//! Reusable reactive hooks for [Leptos](https://github.com/leptos-rs/leptos).
//!
//! The main entry point is [`use_query`][crate::use_query::use_query()], a cancellable data
//! fetching primitive:
//! - one request per distinct url
//! - `{data, error, loading}` state as signals
//! - cancellation when the url changes or the component unmounts
//! - optional request timeout
//!
//! Alongside it, a handful of thin adapters over browser APIs:
//! - [`use_make_inert`] - make elements inert and lock body scrolling, e.g. behind a modal.
//! - [`use_previous`] - the previous value of a reactive input.
//! - [`use_resize_observer`] - element dimensions.
//! - [`use_scroll_position`] - throttled window scroll position.
//! - [`use_visible_in_viewport`] - run a callback when an element becomes visible.
//!
//! # Feature Flags
//! - `csr` Client-side rendering: Use browser timers.
//! - `hydrate` Hydration: Use browser timers.
//!
//! # A Simple Example
//!
//! Optionally, provide defaults for every query in the root of your App:
//!
//! ```rust
//! use leptos::*;
//! use leptos_hooks::*;
//! use std::time::Duration;
//!
//! #[component]
//! pub fn App() -> impl IntoView {
//!     provide_fetch_options(DefaultFetchOptions {
//!         timeout: Some(Duration::from_secs(10)),
//!         headers: vec![("Accept".into(), "application/json".into())],
//!     });
//!
//!     // Rest of App...
//! }
//! ```
//!
//! Then query from any component:
//!
//! ```rust
//! use leptos::*;
//! use leptos_hooks::*;
//!
//! #[derive(Debug, Clone, serde::Deserialize)]
//! struct Post {
//!     title: String,
//! }
//!
//! #[component]
//! fn PostView(id: u32) -> impl IntoView {
//!     let QueryResult { data, error, loading, .. } = use_query::<Post>(
//!         move || format!("https://jsonplaceholder.typicode.com/posts/{id}"),
//!         FetchOptions::default(),
//!     );
//!
//!     view! {
//!         <div>
//!             {move || error.get().map(|error| error.to_string())}
//!             {move || data.get().map(|post| post.title)}
//!             {move || loading.get().then(|| "Loading...")}
//!         </div>
//!     }
//! }
//! ```
//!

mod cancellation;
mod fetch_controller;
mod fetch_error;
mod fetch_state;
mod query_result;
mod request;
mod timeout;
/// Network transports for queries.
pub mod transport;
mod use_make_inert;
mod use_previous;
mod use_query;
mod use_resize_observer;
mod use_scroll_position;
mod use_visible_in_viewport;

pub use cancellation::AbortSignal;
pub use fetch_controller::*;
pub use fetch_error::*;
pub use fetch_state::*;
pub use query_result::*;
pub use request::*;
pub use transport::{BrowserResponse, BrowserTransport, Transport, TransportResponse};
pub use use_make_inert::*;
pub use use_previous::*;
pub use use_query::*;
pub use use_resize_observer::*;
pub use use_scroll_position::*;
pub use use_visible_in_viewport::*;

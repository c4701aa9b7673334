use leptos::*;
use leptos_hooks::{provide_fetch_options, DefaultFetchOptions};
use std::time::Duration;

// Modules
mod components;

use crate::components::modal::ModalDemo;
use crate::components::observers::ObserversDemo;
use crate::components::todo::TodoDemo;

/// Demo screen for every hook.
#[component]
pub fn App() -> impl IntoView {
    // Every query in the demo gives up after five seconds.
    provide_fetch_options(DefaultFetchOptions {
        timeout: Some(Duration::from_secs(5)),
        ..DefaultFetchOptions::default()
    });

    view! {
        <main>
            <h1>"Leptos Hooks"</h1>
            <TodoDemo/>
            <ModalDemo/>
            <ObserversDemo/>
        </main>
    }
}

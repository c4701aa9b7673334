use std::time::Duration;

/// Waits for `duration` using the timer of the current platform.
pub(crate) async fn sleep(duration: Duration) {
    use cfg_if::cfg_if;
    cfg_if! {
        if #[cfg(any(feature = "hydrate", feature = "csr"))] {
            gloo_timers::future::sleep(duration).await;
        } else if #[cfg(not(target_arch = "wasm32"))] {
            tokio::time::sleep(duration).await;
        } else {
            let _ = duration;
            leptos::logging::debug_warn!("You are missing a Cargo feature for leptos_hooks. Please enable one of 'hydrate' or 'csr'.");
            futures::future::pending::<()>().await;
        }
    }
}

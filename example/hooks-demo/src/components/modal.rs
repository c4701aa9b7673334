use leptos::*;
use leptos_hooks::{use_make_inert, InertOptions};

#[component]
pub fn ModalDemo() -> impl IntoView {
    let open = create_rw_signal(false);

    view! {
        <section>
            <h2>"use_make_inert"</h2>
            <button on:click=move |_| open.set(true)>"Open modal"</button>
            <Show when=move || open.get()>
                <Modal on_close=move |_| open.set(false)/>
            </Show>
        </section>
    }
}

#[component]
fn Modal(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    use_make_inert(
        InertOptions::default()
            .set_selector("main")
            .set_prevent_body_scroll_class(Some("no-scroll".to_string())),
    );

    // Rendered outside of <main>, so it stays interactive.
    view! {
        <Portal>
            <div role="dialog">
                <p>"Everything behind this dialog is inert."</p>
                <button on:click=move |_| on_close.call(())>"Close"</button>
            </div>
        </Portal>
    }
}

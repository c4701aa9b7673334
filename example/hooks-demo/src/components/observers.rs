use leptos::*;
use leptos_hooks::{use_resize_observer, use_scroll_position, use_visible_in_viewport};

#[component]
pub fn ObserversDemo() -> impl IntoView {
    let scroll = use_scroll_position();

    let resized = create_node_ref::<html::Textarea>();
    let dimensions = use_resize_observer(resized);

    let footer = create_node_ref::<html::Div>();
    let seen = create_rw_signal(0_u32);
    use_visible_in_viewport(footer, move || seen.update(|seen| *seen += 1), false);

    view! {
        <section>
            <h2>"Observers"</h2>
            <p>
                {move || {
                    let scroll = scroll.get();
                    format!("Scrolled {:.0}px ({:.0}%)", scroll.position, scroll.percentage)
                }}
            </p>
            <textarea node_ref=resized>"Resize me"</textarea>
            <p>
                {move || {
                    let dimensions = dimensions.get();
                    match (dimensions.width, dimensions.height) {
                        (Some(width), Some(height)) => format!("{width:.0} x {height:.0}"),
                        _ => "Not measured yet".to_string(),
                    }
                }}
            </p>
            <div class="spacer"></div>
            <div node_ref=footer>{move || format!("Footer seen {} times", seen.get())}</div>
        </section>
    }
}

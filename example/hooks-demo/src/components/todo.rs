use leptos::*;
use leptos_hooks::{use_previous, use_query, FetchOptions, Method, QueryResult, RequestOptions};
use serde::{Deserialize, Serialize};

const API: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Todo {
    user_id: u64,
    id: u32,
    title: String,
    #[serde(default)]
    completed: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NewPost {
    title: &'static str,
    body: &'static str,
    user_id: u64,
}

/// Fetches a todo per id, and creates a post on mount.
#[component]
pub fn TodoDemo() -> impl IntoView {
    let id = create_rw_signal(1_u32);
    let previous_id = use_previous(move || id.get());

    let QueryResult {
        data,
        error,
        loading,
        refetch,
        ..
    } = use_query::<Todo>(
        move || format!("{API}/todos/{}", id.get()),
        FetchOptions::default(),
    );

    let created = create_post();

    view! {
        <section>
            <h2>"use_query"</h2>
            {move || error.get().map(|error| view! { <div class="error">{error.to_string()}</div> })}
            {move || {
                data.get()
                    .map(|todo| {
                        view! {
                            <p>
                                {format!("#{} (user {}): {}", todo.id, todo.user_id, todo.title)}
                                {todo.completed.then_some(" [done]")}
                            </p>
                        }
                    })
            }}
            <Show when=move || loading.get()>
                <div>"Loading..."</div>
            </Show>
            <button on:click=move |_| id.update(|id| *id += 1)>{id}</button>
            <button on:click=move |_| refetch()>"Refetch"</button>
            <p>
                "Previous id: "
                {move || previous_id.get().map(|id| id.to_string()).unwrap_or_else(|| "-".into())}
            </p>
            <p>{move || created.get()}</p>
        </section>
    }
}

fn create_post() -> Signal<String> {
    let request = RequestOptions::default()
        .set_method(Method::Post)
        .set_json(&NewPost {
            title: "foo",
            body: "bar",
            user_id: 1,
        })
        .unwrap_or_else(|error| {
            log::error!("Failed to serialize post: {error}");
            RequestOptions::default()
        });

    let QueryResult { data, error, .. } = use_query::<Todo>(
        || format!("{API}/posts"),
        FetchOptions::default().set_request(request),
    );

    Signal::derive(move || match (data.get(), error.get()) {
        (Some(post), _) => format!("Created post #{}: {}", post.id, post.title),
        (_, Some(error)) => format!("Failed to create post: {error}"),
        _ => String::new(),
    })
}

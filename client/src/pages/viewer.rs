//! Public read-only views: the poem list at `/v` and a single poem at `/v/:id`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::PoemSummary;

/// Format the server's `YYYY-MM-DDTHH:MM:SS` timestamp for display.
pub(crate) fn display_created(created: &str) -> String {
    match created.split_once('T') {
        Some((date, time)) => format!("{date} {}", time.get(..5).unwrap_or(time)),
        None => created.to_owned(),
    }
}

#[component]
pub fn ViewerListPage() -> impl IntoView {
    let poems = RwSignal::new(None::<Result<Vec<PoemSummary>, String>>);

    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            poems.set(Some(crate::net::api::list_poems().await));
        });
    });

    view! {
        <div class="viewer">
            <header class="viewer__header">
                <h1>"Poems"</h1>
                <a class="toolbar__button" href="/">"Write"</a>
            </header>
            {move || match poems.get() {
                None => view! { <p class="viewer__status">"Loading..."</p> }.into_any(),
                Some(Err(e)) => view! { <p class="viewer__status viewer__status--error">{e}</p> }.into_any(),
                Some(Ok(list)) if list.is_empty() => {
                    view! { <p class="viewer__status">"No poems yet."</p> }.into_any()
                }
                Some(Ok(list)) => {
                    view! {
                        <ul class="viewer__list">
                            {list
                                .into_iter()
                                .map(|poem| {
                                    let href = format!("/v/{}", poem.id);
                                    let created = display_created(&poem.created);
                                    view! {
                                        <li>
                                            <a href=href>{poem.first_line}</a>
                                            <time>{created}</time>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

#[component]
pub fn ViewerPage() -> impl IntoView {
    let params = use_params_map();
    let content = RwSignal::new(None::<Result<String, String>>);

    Effect::new(move || {
        let Some(poem_id) = params.with(|p| p.get("id")) else {
            return;
        };
        content.set(None);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            content.set(Some(crate::net::api::fetch_poem(&poem_id).await));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = poem_id;
    });

    let edit_href = move || format!("/p/{}", params.with(|p| p.get("id").unwrap_or_default()));

    view! {
        <div class="viewer">
            <header class="viewer__header">
                <a class="toolbar__button" href="/v">"All poems"</a>
                <a class="toolbar__button" href=edit_href>"Edit"</a>
            </header>
            {move || match content.get() {
                None => view! { <p class="viewer__status">"Loading..."</p> }.into_any(),
                Some(Err(e)) => view! { <p class="viewer__status viewer__status--error">{e}</p> }.into_any(),
                Some(Ok(text)) => view! { <pre class="viewer__poem">{text}</pre> }.into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_created_trims_seconds() {
        assert_eq!(display_created("2024-03-01T09:15:42"), "2024-03-01 09:15");
    }

    #[test]
    fn display_created_passes_through_unexpected_format() {
        assert_eq!(display_created("yesterday"), "yesterday");
    }
}

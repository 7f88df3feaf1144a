//! Catch-all route.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"Nothing here"</h1>
            <p>"This page does not exist."</p>
            <a class="toolbar__button" href="/">"Start a poem"</a>
        </div>
    }
}

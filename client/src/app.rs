//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::{ToastHost, Toaster};
use crate::pages::{
    auth::AuthPage,
    download::DownloadPage,
    editor::EditorPage,
    not_found::NotFoundPage,
    viewer::{ViewerListPage, ViewerPage},
};
use crate::state::editor::EditorState;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the toast queue and the open poem, then sets up client-side
/// routing. The poem lives above `<Routes>` so moving from `/` to `/p/:id`
/// after a first save keeps it. `/download` is the only gated route; its page
/// installs the token guard itself.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(ToastState::default());
    provide_context(Toaster::new(toasts));
    provide_context(RwSignal::new(EditorState::new_poem()));

    view! {
        <Stylesheet id="leptos" href="/pkg/verse-workshop.css"/>
        <Title text="Verse Workshop"/>

        <Router>
            <main>
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=EditorPage/>
                    <Route path=(StaticSegment("p"), ParamSegment("id")) view=EditorPage/>
                    <Route path=StaticSegment("v") view=ViewerListPage/>
                    <Route path=(StaticSegment("v"), ParamSegment("id")) view=ViewerPage/>
                    <Route path=StaticSegment("download") view=DownloadPage/>
                    <Route path=StaticSegment("auth") view=AuthPage/>
                </Routes>
            </main>
        </Router>
        <ToastHost/>
    }
}

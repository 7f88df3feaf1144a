//! Poem editor page, mounted at `/` (new poem) and `/p/:id` (existing poem).
//!
//! SYSTEM CONTEXT
//! ==============
//! The writer types lines or asks the server for candidate continuations,
//! picks one (which is logged as a preference) and saves the poem. After the
//! first save the URL moves to `/p/:id` so a reload reopens the same poem.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::icons::{Icon, IconGlyph};
use crate::components::line_picker::LinePicker;
use crate::components::toast_host::use_toaster;
use crate::state::editor::EditorState;

#[component]
pub fn EditorPage() -> impl IntoView {
    let toaster = use_toaster();
    let params = use_params_map();
    let navigate = use_navigate();
    let editor = expect_context::<RwSignal<EditorState>>();

    // Load the routed poem unless it is the one already open. The state is
    // app-wide, so a first save that moves the URL to `/p/:id` hits this case.
    Effect::new(move || {
        let Some(poem_id) = params.with(|p| p.get("id")) else {
            return;
        };
        if !editor.with_untracked(|e| e.needs_load(&poem_id)) {
            return;
        }
        editor.set(EditorState { poem_id: poem_id.clone(), loading: true, ..EditorState::default() });

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_poem(&poem_id).await {
                Ok(content) => editor.set(EditorState::from_content(&poem_id, &content)),
                Err(e) => {
                    editor.update(|s| s.loading = false);
                    toaster.error(e);
                }
            }
        });
    });

    let generate = move || {
        if editor.with_untracked(|e| e.generating) {
            return;
        }
        let text = editor.with_untracked(EditorState::context_text);
        editor.update(|e| {
            e.generating = true;
            e.alternatives.clear();
        });

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::generate_line(&text).await {
                Ok(resp) => editor.update(|e| e.set_alternatives(resp)),
                Err(e) => {
                    editor.update(|s| s.generating = false);
                    toaster.error(e);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = text;
    };

    let on_pick = Callback::new(move |index: usize| {
        let Some(record) = editor.try_update(|e| e.accept(index)).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::record_preference(&record).await {
                Ok(()) => toaster.success("Line added"),
                Err(e) => toaster.error(e),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = record;
    });

    let navigate_saved = navigate.clone();
    let save = move || {
        if editor.with_untracked(|e| e.saving) {
            return;
        }
        if !editor.with_untracked(EditorState::can_save) {
            toaster.info("Nothing to save yet.");
            return;
        }
        editor.update(|e| {
            e.accept_draft();
            e.saving = true;
        });
        let (poem_id, content) = editor.with_untracked(|e| (e.poem_id.clone(), e.poem_text()));
        let navigate = navigate_saved.clone();

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::save_poem(&poem_id, &content).await {
                Ok(saved_id) => {
                    editor.update(|e| {
                        e.saving = false;
                        e.dirty = false;
                    });
                    toaster.success("Poem saved");
                    navigate(&format!("/p/{saved_id}"), NavigateOptions::default());
                }
                Err(e) => {
                    editor.update(|s| s.saving = false);
                    toaster.error(e);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (poem_id, content, navigate);
    };

    let navigate_new = navigate.clone();
    let new_poem = move |_| {
        editor.set(EditorState::new_poem());
        navigate_new("/", NavigateOptions::default());
    };

    let container_class = move || if editor.with(|e| e.fullscreen) { "editor editor--fullscreen" } else { "editor" };

    view! {
        <div class=container_class>
            <header class="editor__toolbar">
                <a class="toolbar__button" href="/v" title="Saved poems">
                    <IconGlyph icon=Icon::Bars/>
                </a>
                <button class="toolbar__button" title="New poem" on:click=new_poem>
                    <IconGlyph icon=Icon::Plus/>
                </button>
                <button
                    class="toolbar__button"
                    title="Suggest next line"
                    disabled=move || editor.with(|e| e.generating || e.loading)
                    on:click=move |_| generate()
                >
                    <IconGlyph icon=Icon::Magic/>
                </button>
                <Show when=move || editor.with(|e| !e.alternatives.is_empty())>
                    <button class="toolbar__button" title="Regenerate" on:click=move |_| generate()>
                        <IconGlyph icon=Icon::Sync/>
                    </button>
                    <button
                        class="toolbar__button"
                        title="Dismiss suggestions"
                        on:click=move |_| editor.update(|e| e.alternatives.clear())
                    >
                        <IconGlyph icon=Icon::Times/>
                    </button>
                </Show>
                <button
                    class="toolbar__button"
                    title="Save"
                    disabled=move || editor.with(|e| e.saving)
                    on:click=move |_| save()
                >
                    <IconGlyph icon=Icon::Save/>
                </button>
                <button
                    class="toolbar__button"
                    title="Toggle fullscreen"
                    on:click=move |_| {
                        editor.update(|e| {
                            e.toggle_fullscreen();
                        });
                    }
                >
                    {move || {
                        let icon = if editor.with(|e| e.fullscreen) { Icon::Compress } else { Icon::Expand };
                        view! { <IconGlyph icon=icon/> }
                    }}
                </button>
            </header>

            <Show when=move || editor.with(|e| e.loading)>
                <p class="editor__status">"Loading poem..."</p>
            </Show>

            <ol class="editor__lines">
                {move || {
                    editor
                        .get()
                        .lines
                        .into_iter()
                        .enumerate()
                        .map(|(index, line)| {
                            view! {
                                <li class="editor__line">
                                    <span>{line}</span>
                                    <button
                                        class="editor__remove"
                                        title="Remove line"
                                        on:click=move |_| {
                                            editor.update(|e| {
                                                e.remove_line(index);
                                            });
                                        }
                                    >
                                        <IconGlyph icon=Icon::Trash/>
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ol>

            <input
                class="editor__draft"
                type="text"
                placeholder="Write a line, or ask for one"
                prop:value=move || editor.with(|e| e.draft.clone())
                on:input=move |ev| editor.update(|e| e.draft = event_target_value(&ev))
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        editor.update(|e| {
                            e.accept_draft();
                        });
                    }
                }
            />

            <Show when=move || editor.with(|e| e.generating)>
                <p class="editor__status">"Writing..."</p>
            </Show>
            <LinePicker editor=editor on_pick=on_pick/>
        </div>
    }
}

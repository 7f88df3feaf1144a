//! Candidate line list shown after generation.

use leptos::prelude::*;

use crate::state::editor::EditorState;

/// Clickable list of alternatives; `on_pick` receives the chosen index.
#[component]
pub fn LinePicker(editor: RwSignal<EditorState>, on_pick: Callback<usize>) -> impl IntoView {
    view! {
        <Show when=move || !editor.with(|e| e.alternatives.is_empty())>
            <ol class="line-picker">
                {move || {
                    editor
                        .get()
                        .alternatives
                        .into_iter()
                        .enumerate()
                        .map(|(index, alt)| {
                            let title = format!("temperature {:.1}", alt.temperature);
                            view! {
                                <li>
                                    <button
                                        class="line-picker__option"
                                        title=title
                                        on:click=move |_| on_pick.run(index)
                                    >
                                        {alt.text.trim().to_owned()}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ol>
        </Show>
    }
}

//! Gated download of the recorded line preferences.
//!
//! The route guard only checks that a token is stored; the server decides
//! whether that token may actually download the log.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::icons::{Icon, IconGlyph};
use crate::components::toast_host::use_toaster;
use crate::util::auth::install_auth_guard;

#[component]
pub fn DownloadPage() -> impl IntoView {
    install_auth_guard(use_navigate());
    let toaster = use_toaster();
    let busy = RwSignal::new(false);

    let on_download = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::download_preferences().await {
                Ok(bytes) => match save_bytes(crate::net::api::PREFERENCES_FILE_NAME, &bytes) {
                    Ok(()) => toaster.success("Preferences downloaded"),
                    Err(e) => toaster.error(e),
                },
                Err(e) => toaster.error(e),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = toaster;
    };

    view! {
        <div class="download">
            <h1>"Line preferences"</h1>
            <p>"Every suggestion you picked is logged as one JSON line."</p>
            <button class="toolbar__button" disabled=move || busy.get() on:click=on_download>
                <IconGlyph icon=Icon::Save/>
                " Download line_preferences.jsonl"
            </button>
        </div>
    }
}

#[cfg(feature = "hydrate")]
const OBJECT_URL_REVOKE_DELAY_MS: u32 = 1_000;

/// Hand `bytes` to the browser as a file download via a temporary object URL.
#[cfg(feature = "hydrate")]
fn save_bytes(file_name: &str, bytes: &[u8]) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let js_err = |e: wasm_bindgen::JsValue| format!("download failed: {e:?}");

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/json");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "download failed: no document".to_owned())?;
    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| "download failed: anchor cast".to_owned())?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    // Revoking right after `click()` cancels the download in some browsers.
    gloo_timers::callback::Timeout::new(OBJECT_URL_REVOKE_DELAY_MS, move || {
        let _ = web_sys::Url::revoke_object_url(&url);
    })
    .forget();
    Ok(())
}

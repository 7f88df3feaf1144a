//! Token entry page at `/auth`.
//!
//! Tokens are issued out of band. Signing in only stores the string; the
//! server is asked whether it accepts it so the writer gets an early warning,
//! but a rejected token is still kept.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::components::toast_host::use_toaster;
use crate::util::auth;

/// Trim pasted input and reject blanks.
pub(crate) fn normalize_token_input(raw: &str) -> Result<String, &'static str> {
    let token = raw.trim();
    if token.is_empty() { Err("Enter a token first.") } else { Ok(token.to_owned()) }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let toaster = use_toaster();
    let token_input = RwSignal::new(String::new());
    // Read after hydration so SSR and the first client render agree.
    let signed_in = RwSignal::new(false);
    Effect::new(move || signed_in.set(auth::is_authenticated()));

    let on_sign_in = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let token = match normalize_token_input(&token_input.get_untracked()) {
            Ok(token) => token,
            Err(msg) => {
                toaster.error(msg);
                return;
            }
        };
        auth::store_token(&token);
        token_input.set(String::new());
        signed_in.set(true);
        toaster.success("Signed in");

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if crate::net::api::check_token().await == Some(false) {
                toaster.info("Token stored, but the server did not accept it.");
            }
        });
    };

    let on_sign_out = move |_| {
        auth::clear_token();
        signed_in.set(false);
        toaster.success("Signed out");
    };

    view! {
        <div class="auth">
            <h1>"Access token"</h1>
            <Show
                when=move || signed_in.get()
                fallback=move || {
                    view! {
                        <form class="auth__form" on:submit=on_sign_in>
                            <input
                                class="auth__input"
                                type="password"
                                placeholder="Paste token"
                                prop:value=move || token_input.get()
                                on:input=move |ev| token_input.set(event_target_value(&ev))
                            />
                            <button class="toolbar__button" type="submit">"Sign in"</button>
                        </form>
                    }
                }
            >
                <p>"A token is stored in this browser."</p>
                <a class="toolbar__button" href="/download">"Downloads"</a>
                <button class="toolbar__button" on:click=on_sign_out>"Sign out"</button>
            </Show>
        </div>
    }
}

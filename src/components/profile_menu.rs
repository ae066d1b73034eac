//! Header avatar with the profile dropdown: image upload and logout.
//!
//! TRADE-OFFS
//! ==========
//! Image files are read as base64 data URLs in the browser and shipped in a
//! JSON body; fine at avatar sizes, not a general upload path.

#[cfg(test)]
#[path = "profile_menu_test.rs"]
mod profile_menu_test;

use leptos::prelude::*;

use crate::state::profile::{ProfileState, avatar_src};
use crate::state::ui::UiState;

/// Sanity check on the `FileReader` result before it goes to the server.
#[cfg(any(test, feature = "hydrate"))]
fn is_image_data_url(value: &str) -> bool {
    value.starts_with("data:image/")
}

/// Avatar button with a dropdown offering image upload and logout.
#[component]
pub fn ProfileMenu(
    profile: RwSignal<ProfileState>,
    ui: RwSignal<UiState>,
    #[prop(into)] on_upload: Callback<String>,
    #[prop(into)] on_logout: Callback<()>,
) -> impl IntoView {
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    let on_avatar_click = move |_| ui.update(|u| u.menu_open = !u.menu_open);

    let on_pick_file = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = file_input_ref.get_untracked() {
                input.click();
            }
        }
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            read_selected_file(&ev, on_upload);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&ev, &on_upload);
        }
    };

    view! {
        <div class="profile-menu">
            <img
                class="profile-menu__avatar"
                alt="Profile"
                src=move || avatar_src(profile.get().image_url.as_deref())
                on:click=on_avatar_click
            />
            <Show when=move || ui.get().menu_open>
                <div class="profile-menu__dropdown">
                    <p class="profile-menu__identity">
                        {move || profile.get().username}
                        <span class="profile-menu__email">{move || profile.get().email}</span>
                    </p>
                    <button class="profile-menu__item" on:click=on_pick_file>
                        "Upload Profile Image"
                    </button>
                    <button
                        class="profile-menu__item profile-menu__item--danger"
                        on:click=move |_| on_logout.run(())
                    >
                        "Logout"
                    </button>
                </div>
            </Show>
            <input
                class="profile-menu__file-input"
                type="file"
                accept="image/*"
                node_ref=file_input_ref
                on:change=on_file_change
            />
        </div>
    }
}

/// Read the picked file as a base64 data URL and hand it to `on_upload`.
#[cfg(feature = "hydrate")]
fn read_selected_file(ev: &leptos::ev::Event, on_upload: Callback<String>) {
    use wasm_bindgen::JsCast as _;
    use wasm_bindgen::closure::Closure;

    let Some(input) = ev
        .target()
        .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
    else {
        return;
    };
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return;
    };
    let Ok(reader) = web_sys::FileReader::new() else {
        return;
    };

    let reader_handle = reader.clone();
    let onloadend = Closure::<dyn FnMut(web_sys::ProgressEvent)>::new(move |_ev| {
        let Ok(result) = reader_handle.result() else {
            return;
        };
        match result.as_string() {
            Some(data_url) if is_image_data_url(&data_url) => on_upload.run(data_url),
            _ => leptos::logging::warn!("avatar read produced no usable data URL"),
        }
    });
    reader.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));
    // The reader keeps firing after this function returns; leak the closure
    // to it rather than dropping the handler mid-read.
    onloadend.forget();

    if reader.read_as_data_url(&file).is_err() {
        leptos::logging::warn!("failed to start avatar file read");
    }
}

//! Authenticated task list: fetch, create, toggle, delete, profile.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the guarded landing route. Tasks and profile load independently
//! once auth settles (fire-and-forget); mutations patch the local cache
//! optimistically and roll back if the server refuses. An auth-rejected
//! response from any call re-derives session state from the (now empty)
//! store, which trips the route guard into redirecting.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::create_task::CreateTask;
use crate::components::profile_menu::ProfileMenu;
use crate::components::task_item::TaskItem;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::ApiError;
use crate::net::types::{NewTask, TaskPatch};
use crate::state::auth::AuthState;
use crate::state::profile::ProfileState;
use crate::state::route::RouteState;
use crate::state::tasks::TasksState;
use crate::state::ui::UiState;
use crate::util::auth::install_unauth_redirect;
use crate::util::session::SessionStore;

/// Banner text for a failed operation.
#[cfg(any(test, feature = "hydrate"))]
fn action_failed_message(action: &str, error: &ApiError) -> String {
    format!("Failed to {action}: {error}")
}

/// Re-derive auth state from the store after an auth-rejected response; the
/// API client has already cleared the token, so this settles Unauthenticated
/// and the route guard takes over.
#[cfg(feature = "hydrate")]
fn reflect_auth_rejection(auth: RwSignal<AuthState>, session: &SessionStore, error: &ApiError) {
    if error.is_auth_rejected() {
        auth.set(crate::state::auth::restore(session));
    }
}

/// Task list page. Redirects to `/login` when no session is present.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let route = expect_context::<RwSignal<RouteState>>();
    let tasks = expect_context::<RwSignal<TasksState>>();
    let profile = expect_context::<RwSignal<ProfileState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, route, "/home", navigate.clone());

    // Initial fetches, once auth has settled as authenticated. Tasks and
    // profile load independently; neither blocks the other.
    let fetched = RwSignal::new(false);
    {
        let session = session.clone();
        Effect::new(move || {
            let state = auth.get();
            if fetched.get_untracked() || state.loading || !state.authenticated {
                return;
            }
            fetched.set(true);
            tasks.update(|t| t.loading = true);
            #[cfg(feature = "hydrate")]
            {
                let session_tasks = session.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::list_tasks(&session_tasks).await {
                        Ok(items) => tasks.update(|t| {
                            t.items = items;
                            t.loading = false;
                            t.error = None;
                        }),
                        Err(error) => {
                            tasks.update(|t| {
                                t.loading = false;
                                t.error = Some(action_failed_message("fetch tasks", &error));
                            });
                            reflect_auth_rejection(auth, &session_tasks, &error);
                        }
                    }
                });
                let session_profile = session.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::get_profile(&session_profile).await {
                        Ok(fetched_profile) => profile.update(|p| {
                            p.username = fetched_profile.username;
                            p.email = fetched_profile.email;
                            p.image_url = fetched_profile.profile_image_url;
                            p.error = None;
                        }),
                        Err(error) => {
                            profile.update(|p| {
                                p.error = Some(action_failed_message("fetch profile", &error));
                            });
                            reflect_auth_rejection(auth, &session_profile, &error);
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = &session;
                tasks.update(|t| t.loading = false);
            }
        });
    }

    let on_add = Callback::new({
        let session = session.clone();
        move |new_task: NewTask| {
            tasks.update(|t| {
                t.create_pending = true;
                t.error = None;
            });
            #[cfg(feature = "hydrate")]
            {
                let session = session.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::create_task(&session, &new_task).await {
                        Ok(task) => tasks.update(|t| t.push_created(task)),
                        Err(error) => {
                            tasks.update(|t| {
                                t.create_pending = false;
                                t.error = Some(action_failed_message("create task", &error));
                            });
                            reflect_auth_rejection(auth, &session, &error);
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (new_task, &session);
                tasks.update(|t| t.create_pending = false);
            }
        }
    });

    let on_update = Callback::new({
        let session = session.clone();
        move |(task_id, patch): (String, TaskPatch)| {
            if patch.is_empty() {
                return;
            }
            // Patch locally first; keep the prior snapshot for rollback.
            let prior = tasks.try_update(|t| t.apply_patch(&task_id, &patch)).flatten();
            let Some(prior) = prior else {
                return;
            };
            #[cfg(feature = "hydrate")]
            {
                let session = session.clone();
                leptos::task::spawn_local(async move {
                    if let Err(error) =
                        crate::net::api::update_task(&session, &task_id, &patch).await
                    {
                        tasks.update(|t| {
                            t.restore(prior);
                            t.error = Some(action_failed_message("update task", &error));
                        });
                        reflect_auth_rejection(auth, &session, &error);
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (task_id, patch, prior, &session);
            }
        }
    });

    let on_delete = Callback::new({
        let session = session.clone();
        move |task_id: String| {
            // Drop the row immediately; reinsert at its old position on failure.
            let removed = tasks.try_update(|t| t.remove(&task_id)).flatten();
            let Some((index, removed)) = removed else {
                return;
            };
            #[cfg(feature = "hydrate")]
            {
                let session = session.clone();
                leptos::task::spawn_local(async move {
                    if let Err(error) = crate::net::api::delete_task(&session, &task_id).await {
                        tasks.update(|t| {
                            t.reinsert(index, removed);
                            t.error = Some(action_failed_message("delete task", &error));
                        });
                        reflect_auth_rejection(auth, &session, &error);
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (task_id, index, removed, &session);
            }
        }
    });

    let on_upload = Callback::new({
        let session = session.clone();
        move |data_url: String| {
            #[cfg(feature = "hydrate")]
            {
                let session = session.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::upload_profile_image(&session, &data_url).await {
                        Ok(url) => {
                            profile.update(|p| {
                                p.image_url = Some(url);
                                p.error = None;
                            });
                            ui.update(|u| u.menu_open = false);
                        }
                        Err(error) => {
                            profile.update(|p| {
                                p.error = Some(action_failed_message("upload image", &error));
                            });
                            reflect_auth_rejection(auth, &session, &error);
                        }
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (data_url, &session);
            }
        }
    });

    let on_logout = Callback::new({
        let session = session.clone();
        let navigate = navigate.clone();
        move |()| {
            #[cfg(feature = "hydrate")]
            {
                let session = session.clone();
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    if let Err(error) = crate::net::api::logout(&session).await {
                        leptos::logging::warn!("server-side logout failed: {error}");
                    }
                    // Local session goes away regardless of the server outcome.
                    auth.set(crate::state::auth::logout(&session));
                    navigate("/login", NavigateOptions::default());
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                auth.set(crate::state::auth::logout(&session));
                navigate("/login", NavigateOptions::default());
            }
        }
    });

    view! {
        <Show
            when=move || {
                let state = auth.get();
                !state.loading && state.authenticated
            }
            fallback=move || {
                view! {
                    <div class="home-page">
                        <p class="home-page__pending">
                            {move || {
                                if auth.get().loading { "Loading..." } else { "Redirecting to login..." }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="home-page">
                <header class="home-page__header toolbar">
                    <h1 class="toolbar__title">"My Tasks"</h1>
                    <span class="toolbar__spacer"></span>
                    <button
                        class="btn toolbar__dark-toggle"
                        on:click=move |_| {
                            let next = crate::util::dark_mode::toggle(ui.get().dark_mode);
                            ui.update(|u| u.dark_mode = next);
                        }
                        title="Toggle dark mode"
                    >
                        {move || if ui.get().dark_mode { "☀" } else { "☾" }}
                    </button>
                    <ProfileMenu profile=profile ui=ui on_upload=on_upload on_logout=on_logout/>
                </header>

                <Show when=move || tasks.get().error.is_some()>
                    <p class="home-page__error">{move || tasks.get().error.unwrap_or_default()}</p>
                </Show>
                <Show when=move || profile.get().error.is_some()>
                    <p class="home-page__error">{move || profile.get().error.unwrap_or_default()}</p>
                </Show>

                <div class="home-page__layout">
                    <div class="home-page__sidebar">
                        <CreateTask
                            on_add=on_add
                            disabled=Signal::derive(move || tasks.get().create_pending)
                        />
                    </div>
                    <div class="home-page__list">
                        <h2 class="home-page__list-title">"Your Tasks"</h2>
                        <Show
                            when=move || !tasks.get().loading
                            fallback=|| view! { <p>"Loading tasks..."</p> }
                        >
                            <Show
                                when=move || !tasks.get().items.is_empty()
                                fallback=|| {
                                    view! {
                                        <div class="home-page__empty">
                                            <p>"No tasks yet. Add one to get started!"</p>
                                        </div>
                                    }
                                }
                            >
                                <div class="home-page__items">
                                    {move || {
                                        tasks
                                            .get()
                                            .items
                                            .into_iter()
                                            .map(|task| {
                                                view! {
                                                    <TaskItem
                                                        task=task
                                                        on_update=on_update
                                                        on_delete=on_delete
                                                    />
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    }}
                                </div>
                            </Show>
                        </Show>
                    </div>
                </div>
            </div>
        </Show>
    }
}

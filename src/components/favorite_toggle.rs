//! Favorite Toggle Component
//!
//! Heart icon on a recipe. Exactly one of `fas`/`far` is set at a time.

use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_actions::{toggle_favorite, ActionError, FavoriteState, RecipeId};

use crate::context::use_app_context;
use crate::store::{store_is_favorited, store_push_error, store_set_favorited, use_app_store};

#[component]
pub fn FavoriteToggle(recipe_id: RecipeId) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let icon_class = {
        let recipe_id = recipe_id.clone();
        move || {
            let state = FavoriteState {
                recipe_id: recipe_id.clone(),
                favorited: store_is_favorited(&store, &recipe_id),
            };
            format!("favorite-selector fa-heart {}", state.icon_class())
        }
    };

    let data_id = recipe_id.to_string();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        // Row clicks add to the list; the heart must not
        ev.stop_propagation();

        let services = ctx.services();
        let Some(guard) = services.in_flight.try_begin(&recipe_id) else {
            store_push_error(&store, &ActionError::Busy(recipe_id.to_string()), ctx.notice_ms());
            return;
        };

        let state = FavoriteState {
            recipe_id: recipe_id.clone(),
            favorited: store_is_favorited(&store, &recipe_id),
        };
        let policy = ctx.update_policy();

        spawn_local(async move {
            let _guard = guard;
            let apply = |favorited| store_set_favorited(&store, &state.recipe_id, favorited);
            if let Err(e) = toggle_favorite(&services.api, &state, policy, apply).await {
                store_push_error(&store, &e, ctx.notice_ms());
            }
        });
    };

    view! {
        <i class=icon_class data-recipeid=data_id on:click=on_click></i>
    }
}

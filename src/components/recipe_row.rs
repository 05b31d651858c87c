//! Recipe Row Component
//!
//! Clicking a row adds the recipe to the current list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use recipe_actions::{add_to_current_list, Notice, RecipeEntry};

use crate::components::FavoriteToggle;
use crate::context::use_app_context;
use crate::store::{store_push_error, store_push_notice, use_app_store};

#[component]
pub fn RecipeRow(recipe: RecipeEntry) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let recipe_id = recipe.id.clone();
    let data_id = recipe.id.to_string();

    let on_click = move |_: leptos::ev::MouseEvent| {
        let services = ctx.services();
        let recipe_id = recipe_id.clone();
        let notice_ms = ctx.notice_ms();

        spawn_local(async move {
            match add_to_current_list(&services.api, &services.tracker, &recipe_id).await {
                Ok((list_title, _)) => {
                    store_push_notice(&store, Notice::info(format!("Added to {}", list_title)), notice_ms);
                }
                Err(e) => store_push_error(&store, &e, notice_ms),
            }
        });
    };

    view! {
        <li class="recipe-item list-group-item" data-recipeid=data_id on:click=on_click>
            {recipe.image_url.map(|url| view! { <img class="recipe-thumb" src=url alt="" /> })}
            <span class="recipe-title">{recipe.title}</span>
            <FavoriteToggle recipe_id=recipe.id />
        </li>
    }
}

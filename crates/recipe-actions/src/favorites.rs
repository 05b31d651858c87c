//! Favorite Toggle
//!
//! Flips a recipe's favorited indicator and tells the server.

use crate::api::RecipeApi;
use crate::config::UpdatePolicy;
use crate::error::ActionResult;
use crate::models::RecipeId;

/// Icon class shown on a favorited recipe
pub const FAVORITED_CLASS: &str = "fas";
/// Icon class shown on a recipe that is not favorited
pub const NOT_FAVORITED_CLASS: &str = "far";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteAction {
    Add,
    Remove,
}

/// View-model of a favorite control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteState {
    pub recipe_id: RecipeId,
    pub favorited: bool,
}

impl FavoriteState {
    pub fn new(recipe_id: impl Into<RecipeId>, favorited: bool) -> Self {
        Self { recipe_id: recipe_id.into(), favorited }
    }

    pub fn next_action(&self) -> FavoriteAction {
        if self.favorited {
            FavoriteAction::Remove
        } else {
            FavoriteAction::Add
        }
    }

    /// The single icon class for the current state
    pub fn icon_class(&self) -> &'static str {
        if self.favorited {
            FAVORITED_CLASS
        } else {
            NOT_FAVORITED_CLASS
        }
    }
}

/// Toggle the favorite state of `state.recipe_id`.
///
/// Sends exactly one request. `apply` receives each visual state the
/// control should take:
/// - `Optimistic`: the flipped state before the request resolves, and the
///   original state again if it fails.
/// - `Confirmed`: the flipped state once the request succeeded, nothing on
///   failure.
///
/// Returns the resulting favorited value.
pub async fn toggle_favorite<A, F>(
    api: &A,
    state: &FavoriteState,
    policy: UpdatePolicy,
    mut apply: F,
) -> ActionResult<bool>
where
    A: RecipeApi + ?Sized,
    F: FnMut(bool),
{
    let target = !state.favorited;

    if policy == UpdatePolicy::Optimistic {
        apply(target);
    }

    let result = match state.next_action() {
        FavoriteAction::Add => api.add_favorite(&state.recipe_id).await,
        FavoriteAction::Remove => api.remove_favorite(&state.recipe_id).await,
    };

    match result {
        Ok(_) => {
            if policy == UpdatePolicy::Confirmed {
                apply(target);
            }
            log::info!("Recipe {} favorited={}", state.recipe_id, target);
            Ok(target)
        }
        Err(e) => {
            if policy == UpdatePolicy::Optimistic {
                log::warn!("Favorite toggle for recipe {} failed, rolling back: {}", state.recipe_id, e);
                apply(state.favorited);
            } else {
                log::warn!("Favorite toggle for recipe {} failed: {}", state.recipe_id, e);
            }
            Err(e.into())
        }
    }
}

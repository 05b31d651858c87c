//! In-Flight Guard
//!
//! One outstanding favorite request per recipe. A second click while the
//! first request is pending would act on a stale favorited snapshot.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::models::RecipeId;

#[derive(Debug, Clone, Default)]
pub struct InFlight {
    pending: Rc<RefCell<HashSet<RecipeId>>>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `recipe_id`; `None` if a request for it is already pending.
    pub fn try_begin(&self, recipe_id: &RecipeId) -> Option<InFlightGuard> {
        if !self.pending.borrow_mut().insert(recipe_id.clone()) {
            log::debug!("Recipe {recipe_id} already has a request in flight");
            return None;
        }
        Some(InFlightGuard { pending: Rc::clone(&self.pending), recipe_id: recipe_id.clone() })
    }
}

/// Releases the claim on drop
#[derive(Debug)]
pub struct InFlightGuard {
    pending: Rc<RefCell<HashSet<RecipeId>>>,
    recipe_id: RecipeId,
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.pending.borrow_mut().remove(&self.recipe_id);
    }
}

//! Add-to-List Action

use crate::api::{ApiMessage, RecipeApi};
use crate::current_list::CurrentListTracker;
use crate::error::{ActionError, ActionResult};
use crate::models::RecipeId;
use crate::storage::KeyValueStore;

/// Add `recipe_id` to the list currently selected in storage.
///
/// The list title is read at call time, never cached. Without a current
/// list no request is sent.
pub async fn add_to_current_list<A, S>(
    api: &A,
    tracker: &CurrentListTracker<S>,
    recipe_id: &RecipeId,
) -> ActionResult<(String, ApiMessage)>
where
    A: RecipeApi + ?Sized,
    S: KeyValueStore,
{
    let list_title = tracker.current()?.ok_or(ActionError::NoCurrentList)?;
    log::debug!("Adding recipe {recipe_id} to list {list_title:?}");

    let message = api.add_to_list(recipe_id, &list_title).await.map_err(|e| {
        log::warn!("Add recipe {recipe_id} to {list_title:?} failed: {e}");
        e
    })?;

    Ok((list_title, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ADD_TO_LIST_PATH;
    use crate::error::ApiError;
    use crate::storage::MemoryStore;
    use crate::test_support::FakeApi;
    use serde_json::json;

    #[tokio::test]
    async fn test_adds_recipe_to_current_list() {
        let api = FakeApi::new();
        let store = MemoryStore::with_entry("currentList", "Lunch");
        let tracker = CurrentListTracker::new(&store);

        let (title, message) = add_to_current_list(&api, &tracker, &RecipeId::new("7")).await.unwrap();

        assert_eq!(title, "Lunch");
        assert_eq!(message.message, "success");
        let calls = api.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].path, ADD_TO_LIST_PATH);
        assert_eq!(calls[0].body, json!({ "recipeId": "7", "listTitle": "Lunch" }));
    }

    #[tokio::test]
    async fn test_reads_list_fresh_each_click() {
        let api = FakeApi::new();
        let store = MemoryStore::with_entry("currentList", "Lunch");
        let tracker = CurrentListTracker::new(&store);

        add_to_current_list(&api, &tracker, &RecipeId::new("7")).await.unwrap();
        // Another tab changes the selection behind our back
        store.set("currentList", "Dinner").unwrap();
        add_to_current_list(&api, &tracker, &RecipeId::new("7")).await.unwrap();

        let calls = api.calls();
        assert_eq!(calls[0].body["listTitle"], "Lunch");
        assert_eq!(calls[1].body["listTitle"], "Dinner");
    }

    #[tokio::test]
    async fn test_no_current_list_sends_nothing() {
        let api = FakeApi::new();
        let store = MemoryStore::new();
        let tracker = CurrentListTracker::new(&store);

        let result = add_to_current_list(&api, &tracker, &RecipeId::new("7")).await;

        assert_eq!(result, Err(ActionError::NoCurrentList));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_server_error_is_returned() {
        let api = FakeApi::failing(ApiError::Status { status: 404, body: "no such list".to_string() });
        let store = MemoryStore::with_entry("currentList", "Lunch");
        let tracker = CurrentListTracker::new(&store);

        let result = add_to_current_list(&api, &tracker, &RecipeId::new("7")).await;

        assert!(matches!(result, Err(ActionError::Api(ApiError::Status { status: 404, .. }))));
    }
}

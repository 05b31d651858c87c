//! Test doubles for the recipe API.

use std::cell::RefCell;

use async_trait::async_trait;

use crate::api::{ApiMessage, RecipeApi, ADD_FAVORITE_PATH, ADD_TO_LIST_PATH, REMOVE_FAVORITE_PATH};
use crate::error::ApiError;
use crate::models::{AddToListRequest, FavoriteRequest, RecipeId};

/// A recorded request: endpoint path plus JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub path: &'static str,
    pub body: serde_json::Value,
}

/// Records every call; answers success unless told to fail.
#[derive(Default)]
pub struct FakeApi {
    pub calls: RefCell<Vec<Call>>,
    pub fail_with: RefCell<Option<ApiError>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(err: ApiError) -> Self {
        let api = Self::default();
        *api.fail_with.borrow_mut() = Some(err);
        api
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record<B: serde::Serialize>(&self, path: &'static str, body: &B) -> Result<ApiMessage, ApiError> {
        let body = serde_json::to_value(body).unwrap();
        self.calls.borrow_mut().push(Call { path, body });
        match self.fail_with.borrow().clone() {
            Some(err) => Err(err),
            None => Ok(ApiMessage { message: "success".to_string() }),
        }
    }
}

#[async_trait(?Send)]
impl RecipeApi for FakeApi {
    async fn add_favorite(&self, recipe_id: &RecipeId) -> Result<ApiMessage, ApiError> {
        self.record(ADD_FAVORITE_PATH, &FavoriteRequest { recipe_id })
    }

    async fn remove_favorite(&self, recipe_id: &RecipeId) -> Result<ApiMessage, ApiError> {
        self.record(REMOVE_FAVORITE_PATH, &FavoriteRequest { recipe_id })
    }

    async fn add_to_list(&self, recipe_id: &RecipeId, list_title: &str) -> Result<ApiMessage, ApiError> {
        self.record(ADD_TO_LIST_PATH, &AddToListRequest { recipe_id, list_title })
    }
}

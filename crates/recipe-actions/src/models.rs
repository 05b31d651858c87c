//! Models
//!
//! Request bodies and the page data handed to the client by the server.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Recipe identifier as carried in `data-recipeid` and request bodies.
///
/// Always sent as a JSON string; accepts numbers when reading page data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecipeId(String);

impl<'de> Deserialize<'de> for RecipeId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(id) => Self(id),
            Raw::Number(id) => Self(id.to_string()),
        })
    }
}

impl RecipeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecipeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

// Ids arrive as numbers from some server templates
impl From<u32> for RecipeId {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

/// Body of `/favorites/add` and `/favorites/remove`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FavoriteRequest<'a> {
    #[serde(rename = "recipeId")]
    pub recipe_id: &'a RecipeId,
}

/// Body of `/lists/add`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddToListRequest<'a> {
    #[serde(rename = "recipeId")]
    pub recipe_id: &'a RecipeId,
    #[serde(rename = "listTitle")]
    pub list_title: &'a str,
}

/// A selectable list in the current-list menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEntry {
    pub title: String,
}

/// A recipe row as rendered on the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeEntry {
    pub id: RecipeId,
    pub title: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub favorited: bool,
}

/// Everything the server embeds into the page for the client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageData {
    #[serde(default)]
    pub lists: Vec<ListEntry>,
    #[serde(default)]
    pub recipes: Vec<RecipeEntry>,
}

impl PageData {
    /// Trim list titles the way the current list stores them, dropping blank ones
    pub fn normalized(mut self) -> Self {
        self.lists = self
            .lists
            .into_iter()
            .filter_map(|list| {
                let title = list.title.trim();
                (!title.is_empty()).then(|| ListEntry { title: title.to_string() })
            })
            .collect();
        self
    }

    /// Label of the first menu entry, used to seed the current list
    pub fn first_list_title(&self) -> Option<&str> {
        self.lists.first().map(|l| l.title.as_str())
    }
}

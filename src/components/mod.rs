//! UI Components
//!
//! Leptos components for the list menu, recipe rows and notices.

mod current_list_badge;
mod favorite_toggle;
mod list_menu;
mod notice_bar;
mod recipe_row;

pub use current_list_badge::CurrentListBadge;
pub use favorite_toggle::FavoriteToggle;
pub use list_menu::CurrentListMenu;
pub use notice_bar::NoticeBar;
pub use recipe_row::RecipeRow;

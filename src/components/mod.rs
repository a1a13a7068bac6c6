//! UI Components
//!
//! Leptos components that render from the store and dispatch to `AppContext`.

mod delete_confirm_button;
mod detail_panel;
mod entity_form;
mod item_list;
mod location_tree;
mod notice_toast;
mod search_box;
mod tab_bar;

pub use delete_confirm_button::DeleteConfirmButton;
pub use detail_panel::DetailPanel;
pub use entity_form::EntityForm;
pub use item_list::ItemList;
pub use location_tree::LocationTree;
pub use notice_toast::NoticeToast;
pub use search_box::SearchBox;
pub use tab_bar::TabBar;

//! UI Components
//!
//! Reusable Leptos components.

mod tab_bar;
mod list_toolbar;
mod record_table;
mod record_row;
mod pager;
mod record_editor;
mod type_selector;
mod stats_panel;
mod delete_confirm_button;

pub use tab_bar::TabBar;
pub use list_toolbar::ListToolbar;
pub use record_table::RecordTable;
pub use record_row::RecordRow;
pub use pager::Pager;
pub use record_editor::RecordEditor;
pub use type_selector::TypeSelector;
pub use stats_panel::StatsPanel;
pub use delete_confirm_button::DeleteConfirmButton;

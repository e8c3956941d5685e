//! UI Components

mod new_item_form;
mod notice_bar;
mod todo_items;
mod todo_row;

pub use new_item_form::NewItemForm;
pub use notice_bar::NoticeBar;
pub use todo_items::TodoItems;
pub use todo_row::TodoRow;

//! Modal dialogs: the two food forms and the developer logs overlay.

pub mod add_food_dialog;
pub mod common;
pub mod edit_food_dialog;
pub mod logs_dialog;

pub use add_food_dialog::AddFoodDialog;
pub use edit_food_dialog::EditFoodDialog;
pub use logs_dialog::LogsDialog;

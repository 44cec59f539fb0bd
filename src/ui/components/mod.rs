pub mod dialogs;
pub mod food_list;
pub mod food_list_item;
pub mod header;
pub mod status_bar;

pub use food_list::FoodListComponent;
pub use header::HeaderComponent;
pub use status_bar::StatusBarComponent;

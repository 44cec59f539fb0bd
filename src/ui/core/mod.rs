//! Core UI plumbing: actions, the component trait, event polling, and
//! background task management.

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod task_manager;

pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use task_manager::{TaskId, TaskManager};

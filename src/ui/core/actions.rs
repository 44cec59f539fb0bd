use crate::api::{CreateFoodArgs, FoodRecord, UpdateFoodArgs};

/// Everything the UI can ask for, plus the settle notifications that
/// background tasks send back once a network round-trip has finished.
///
/// State updates happen in settle-arrival order, which under concurrent
/// requests may differ from invocation order; no sequencing token is used.
#[derive(Debug, Clone)]
pub enum Action {
    // List navigation
    NextFood,
    PreviousFood,

    // Modal intents
    ToggleAddModal,
    ToggleEditModal,
    RequestEdit(FoodRecord),

    // Operations (one network attempt each, no retries)
    LoadFoods,
    CreateFood(CreateFoodArgs),
    UpdateFood(UpdateFoodArgs),
    DeleteFood(i64),

    // Settle notifications from background tasks
    LoadSettled(Result<Vec<FoodRecord>, String>),
    CreateSettled(Result<FoodRecord, String>),
    UpdateSettled(Result<FoodRecord, String>),
    /// Sent once a delete request settles, whatever the outcome; the
    /// local removal is applied either way.
    DeleteSettled { id: i64, error: Option<String> },

    // UI operations
    ShowLogs(bool),

    // App control
    Quit,
    None,
}

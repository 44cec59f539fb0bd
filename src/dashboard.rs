//! Dashboard state and the operations that keep it consistent with the
//! foods backend.
//!
//! [`DashboardState`] is the single aggregate behind the screen: the food
//! collection (in server order), the record currently loaded into the edit
//! modal, and the two independent modal flags. Every mutation of the
//! aggregate goes through the methods here; the UI layer only routes
//! intents and settle notifications.
//!
//! [`DashboardService`] wraps the backend trait and applies the two request
//! rules that live above the wire: creation always sends `available = true`,
//! and updates merge the partial onto the editing target and are keyed by
//! that target's original id.

use std::sync::Arc;

use crate::api::{ApiError, CreateFoodArgs, FoodApi, FoodRecord, UpdateFoodArgs};

/// The dashboard's in-memory aggregate.
///
/// Created empty, populated once by the initial load, then mutated only by
/// the settle handlers and modal toggles below. The backend remains the
/// source of truth; nothing here is persisted.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// Current collection, in server response order. Append on create,
    /// retain on delete, in-place replace on update.
    pub foods: Vec<FoodRecord>,
    /// The record loaded into the edit modal, set by [`request_edit`].
    ///
    /// [`request_edit`]: DashboardState::request_edit
    pub editing_food: Option<FoodRecord>,
    pub add_modal_open: bool,
    pub edit_modal_open: bool,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the add-modal flag. No network effect.
    pub fn toggle_add_modal(&mut self) {
        self.add_modal_open = !self.add_modal_open;
    }

    /// Flip the edit-modal flag. No network effect.
    pub fn toggle_edit_modal(&mut self) {
        self.edit_modal_open = !self.edit_modal_open;
    }

    /// Target `food` for editing and open the edit modal unconditionally.
    /// This is a forced open, not a toggle; the collection is untouched.
    pub fn request_edit(&mut self, food: FoodRecord) {
        self.editing_food = Some(food);
        self.edit_modal_open = true;
    }

    /// Apply the result of the initial (or a manual) list fetch.
    ///
    /// On success the whole aggregate is replaced: fetched collection, no
    /// editing target, both modals closed. A failed fetch only reaches the
    /// diagnostic log; the aggregate is left as it was.
    pub fn settle_load(&mut self, result: Result<Vec<FoodRecord>, String>) {
        match result {
            Ok(foods) => {
                self.foods = foods;
                self.editing_food = None;
                self.add_modal_open = false;
                self.edit_modal_open = false;
            }
            Err(e) => log::error!("loading foods failed: {e}"),
        }
    }

    /// Apply the result of a create round-trip.
    ///
    /// On success the server's record (with its assigned id) is appended
    /// and the add modal closes. On failure the attempt is abandoned: the
    /// error goes to the diagnostic log, the collection is unchanged, and
    /// the add modal stays open.
    pub fn settle_create(&mut self, result: Result<FoodRecord, String>) {
        match result {
            Ok(food) => {
                self.foods.push(food);
                self.add_modal_open = false;
            }
            Err(e) => log::error!("creating food failed: {e}"),
        }
    }

    /// Apply the result of an update round-trip.
    ///
    /// On success the matching record is replaced in place (same position)
    /// with the server's representation and the edit-modal flag flips
    /// closed. On failure only the diagnostic log sees the error and the
    /// modal stays open.
    pub fn settle_update(&mut self, result: Result<FoodRecord, String>) {
        match result {
            Ok(updated) => {
                for food in &mut self.foods {
                    if food.id == updated.id {
                        *food = updated.clone();
                    }
                }
                self.edit_modal_open = !self.edit_modal_open;
            }
            Err(e) => log::error!("updating food failed: {e}"),
        }
    }

    /// Apply the outcome of a delete round-trip.
    ///
    /// The record is removed locally once the request has settled,
    /// regardless of outcome: a failed DELETE still drops the record and
    /// is only logged, leaving the view ahead of the backend until the
    /// next reload.
    pub fn settle_delete(&mut self, id: i64, error: Option<String>) {
        if let Some(e) = error {
            log::error!("deleting food {id} failed: {e}");
        }
        self.foods.retain(|food| food.id != id);
    }
}

/// Async operations against the backend, one network attempt per call.
#[derive(Clone)]
pub struct DashboardService {
    api: Arc<dyn FoodApi>,
}

impl DashboardService {
    pub fn new(api: Arc<dyn FoodApi>) -> Self {
        Self { api }
    }

    /// Fetch the full collection.
    pub async fn load_foods(&self) -> Result<Vec<FoodRecord>, ApiError> {
        self.api.list_foods().await
    }

    /// Create `candidate`, forcing `available = true` on the wire no matter
    /// what the form carried.
    pub async fn create_food(&self, candidate: CreateFoodArgs) -> Result<FoodRecord, ApiError> {
        let args = CreateFoodArgs {
            available: true,
            ..candidate
        };
        self.api.create_food(&args).await
    }

    /// Merge `partial` onto `current` (partial fields win) and PUT the full
    /// merged record, keyed by `current.id`. An id inside `partial` never
    /// reaches the request.
    pub async fn update_food(
        &self,
        current: &FoodRecord,
        partial: &UpdateFoodArgs,
    ) -> Result<FoodRecord, ApiError> {
        let merged = partial.merge_onto(current);
        self.api.update_food(current.id, &merged).await
    }

    pub async fn delete_food(&self, id: i64) -> Result<(), ApiError> {
        self.api.delete_food(id).await
    }
}

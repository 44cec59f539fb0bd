//! Behavioral tests for the dashboard aggregate and its operations,
//! driven against a simulated backend.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use foodboard::api::{ApiError, CreateFoodArgs, FoodApi, FoodRecord, UpdateFoodArgs};
use foodboard::dashboard::{DashboardService, DashboardState};

/// In-memory backend that echoes created/updated records back with
/// server-assigned ids, and records the payloads it received.
struct MockBackend {
    foods: Mutex<Vec<FoodRecord>>,
    next_id: Mutex<i64>,
    fail: Mutex<bool>,
    last_create: Mutex<Option<CreateFoodArgs>>,
    last_update: Mutex<Option<(i64, FoodRecord)>>,
}

impl MockBackend {
    fn new(seed: Vec<FoodRecord>) -> Self {
        let next_id = seed.iter().map(|f| f.id).max().unwrap_or(0) + 1;
        Self {
            foods: Mutex::new(seed),
            next_id: Mutex::new(next_id),
            fail: Mutex::new(false),
            last_create: Mutex::new(None),
            last_update: Mutex::new(None),
        }
    }

    fn set_fail(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }

    fn check_fail(&self) -> Result<(), ApiError> {
        if *self.fail.lock().unwrap() {
            Err(ApiError::Backend("simulated backend failure".to_string()))
        } else {
            Ok(())
        }
    }

    fn last_create(&self) -> Option<CreateFoodArgs> {
        self.last_create.lock().unwrap().clone()
    }

    fn last_update(&self) -> Option<(i64, FoodRecord)> {
        self.last_update.lock().unwrap().clone()
    }
}

#[async_trait]
impl FoodApi for MockBackend {
    async fn list_foods(&self) -> Result<Vec<FoodRecord>, ApiError> {
        self.check_fail()?;
        Ok(self.foods.lock().unwrap().clone())
    }

    async fn create_food(&self, args: &CreateFoodArgs) -> Result<FoodRecord, ApiError> {
        *self.last_create.lock().unwrap() = Some(args.clone());
        self.check_fail()?;

        let mut next_id = self.next_id.lock().unwrap();
        let created = FoodRecord {
            id: *next_id,
            name: args.name.clone(),
            image: args.image.clone(),
            price: args.price,
            available: args.available,
        };
        *next_id += 1;
        self.foods.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_food(&self, id: i64, food: &FoodRecord) -> Result<FoodRecord, ApiError> {
        *self.last_update.lock().unwrap() = Some((id, food.clone()));
        self.check_fail()?;

        let updated = FoodRecord { id, ..food.clone() };
        let mut foods = self.foods.lock().unwrap();
        for stored in foods.iter_mut() {
            if stored.id == id {
                *stored = updated.clone();
            }
        }
        Ok(updated)
    }

    async fn delete_food(&self, id: i64) -> Result<(), ApiError> {
        self.check_fail()?;
        self.foods.lock().unwrap().retain(|f| f.id != id);
        Ok(())
    }
}

fn cake() -> FoodRecord {
    FoodRecord {
        id: 1,
        name: "Cake".to_string(),
        image: "x".to_string(),
        price: 10.0,
        available: true,
    }
}

fn setup(seed: Vec<FoodRecord>) -> (Arc<MockBackend>, DashboardService, DashboardState) {
    let backend = Arc::new(MockBackend::new(seed));
    let service = DashboardService::new(backend.clone());
    (backend, service, DashboardState::new())
}

async fn load(service: &DashboardService, state: &mut DashboardState) {
    let result = service.load_foods().await.map_err(|e| e.to_string());
    state.settle_load(result);
}

#[tokio::test]
async fn initial_load_populates_collection_and_closes_modals() {
    let (_, service, mut state) = setup(vec![cake()]);
    state.add_modal_open = true;
    state.edit_modal_open = true;

    load(&service, &mut state).await;

    assert_eq!(state.foods.len(), 1);
    assert_eq!(state.foods[0].name, "Cake");
    assert!(state.editing_food.is_none());
    assert!(!state.add_modal_open);
    assert!(!state.edit_modal_open);
}

#[tokio::test]
async fn failed_load_leaves_state_untouched() {
    let (backend, service, mut state) = setup(vec![cake()]);
    load(&service, &mut state).await;

    backend.set_fail(true);
    state.toggle_add_modal();
    let result = service.load_foods().await.map_err(|e| e.to_string());
    state.settle_load(result);

    assert_eq!(state.foods.len(), 1);
    assert!(state.add_modal_open);
}

#[tokio::test]
async fn create_appends_server_record_and_closes_add_modal() {
    let (_, service, mut state) = setup(vec![cake()]);
    load(&service, &mut state).await;
    state.toggle_add_modal();

    let candidate = CreateFoodArgs {
        name: "Pie".to_string(),
        image: "y".to_string(),
        price: 5.0,
        available: false,
    };
    let result = service.create_food(candidate).await.map_err(|e| e.to_string());
    state.settle_create(result);

    assert_eq!(state.foods.len(), 2);
    assert_eq!(state.foods[0].name, "Cake");
    assert_eq!(state.foods[1].name, "Pie");
    assert_eq!(state.foods[1].id, 2);
    assert!(state.foods[1].available);
    assert!(!state.add_modal_open);
}

#[tokio::test]
async fn create_always_sends_availability_true() {
    let (backend, service, _) = setup(Vec::new());

    let candidate = CreateFoodArgs {
        name: "Pie".to_string(),
        image: "y".to_string(),
        price: 5.0,
        available: false,
    };
    service.create_food(candidate).await.unwrap();

    let sent = backend.last_create().unwrap();
    assert!(sent.available, "create must force available=true on the wire");
}

#[tokio::test]
async fn failed_create_changes_nothing_and_keeps_modal_open() {
    let (backend, service, mut state) = setup(vec![cake()]);
    load(&service, &mut state).await;
    state.toggle_add_modal();
    backend.set_fail(true);

    let candidate = CreateFoodArgs {
        name: "Pie".to_string(),
        image: "y".to_string(),
        price: 5.0,
        available: false,
    };
    let result = service.create_food(candidate).await.map_err(|e| e.to_string());
    state.settle_create(result);

    assert_eq!(state.foods.len(), 1);
    assert_eq!(state.foods[0].name, "Cake");
    assert!(state.add_modal_open);
}

#[tokio::test]
async fn successive_creates_grow_collection_with_unique_ids() {
    let (_, service, mut state) = setup(vec![cake()]);
    load(&service, &mut state).await;

    for i in 0..5 {
        let candidate = CreateFoodArgs {
            name: format!("Food {}", i),
            image: String::new(),
            price: 1.0,
            available: true,
        };
        let result = service.create_food(candidate).await.map_err(|e| e.to_string());
        state.settle_create(result);
    }

    assert_eq!(state.foods.len(), 6);
    let mut ids: Vec<i64> = state.foods.iter().map(|f| f.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), 6, "all identifiers must be unique");
}

#[tokio::test]
async fn delete_removes_exactly_one_record_preserving_order() {
    let seed = vec![
        cake(),
        FoodRecord {
            id: 2,
            name: "Pie".to_string(),
            image: "y".to_string(),
            price: 5.0,
            available: true,
        },
        FoodRecord {
            id: 3,
            name: "Stew".to_string(),
            image: "z".to_string(),
            price: 8.0,
            available: false,
        },
    ];
    let (_, service, mut state) = setup(seed);
    load(&service, &mut state).await;

    let error = service.delete_food(2).await.err().map(|e| e.to_string());
    state.settle_delete(2, error);

    let names: Vec<&str> = state.foods.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Cake", "Stew"]);
}

#[tokio::test]
async fn failed_delete_still_removes_locally() {
    // Preserved source behavior: the local removal is not rolled back.
    let (backend, service, mut state) = setup(vec![cake()]);
    load(&service, &mut state).await;
    backend.set_fail(true);

    let error = service.delete_food(1).await.err().map(|e| e.to_string());
    assert!(error.is_some());
    state.settle_delete(1, error);

    assert!(state.foods.is_empty());
}

#[tokio::test]
async fn update_merges_partial_and_replaces_in_place() {
    let seed = vec![
        cake(),
        FoodRecord {
            id: 2,
            name: "Pie".to_string(),
            image: "y".to_string(),
            price: 5.0,
            available: true,
        },
    ];
    let (_, service, mut state) = setup(seed);
    load(&service, &mut state).await;

    state.request_edit(state.foods[0].clone());
    let partial = UpdateFoodArgs {
        price: Some(12.0),
        ..Default::default()
    };
    let target = state.editing_food.clone().unwrap();
    let result = service.update_food(&target, &partial).await.map_err(|e| e.to_string());
    state.settle_update(result);

    // Replaced in place: same position, same id, only the price changed.
    assert_eq!(state.foods[0].id, 1);
    assert_eq!(state.foods[0].name, "Cake");
    assert_eq!(state.foods[0].image, "x");
    assert_eq!(state.foods[0].price, 12.0);
    assert!(state.foods[0].available);
    assert_eq!(state.foods[1].name, "Pie");
    assert!(!state.edit_modal_open);
}

#[tokio::test]
async fn update_is_keyed_by_the_editing_targets_original_id() {
    let (backend, service, mut state) = setup(vec![cake()]);
    load(&service, &mut state).await;

    state.request_edit(state.foods[0].clone());
    // A stray id in the partial must never reach the request.
    let partial = UpdateFoodArgs {
        id: Some(99),
        name: Some("Tart".to_string()),
        ..Default::default()
    };
    let target = state.editing_food.clone().unwrap();
    let result = service.update_food(&target, &partial).await.map_err(|e| e.to_string());
    state.settle_update(result);

    let (requested_id, sent) = backend.last_update().unwrap();
    assert_eq!(requested_id, 1);
    assert_eq!(sent.id, 1);
    assert_eq!(state.foods[0].id, 1);
    assert_eq!(state.foods[0].name, "Tart");
}

#[tokio::test]
async fn failed_update_changes_nothing_and_keeps_modal_open() {
    let (backend, service, mut state) = setup(vec![cake()]);
    load(&service, &mut state).await;

    state.request_edit(state.foods[0].clone());
    backend.set_fail(true);

    let partial = UpdateFoodArgs {
        price: Some(99.0),
        ..Default::default()
    };
    let target = state.editing_food.clone().unwrap();
    let result = service.update_food(&target, &partial).await.map_err(|e| e.to_string());
    state.settle_update(result);

    assert_eq!(state.foods[0].price, 10.0);
    assert!(state.edit_modal_open);
}

#[test]
fn request_edit_sets_target_and_forces_modal_open() {
    let mut state = DashboardState::new();
    let food = cake();

    state.request_edit(food.clone());
    assert_eq!(state.editing_food, Some(food.clone()));
    assert!(state.edit_modal_open);

    // Unconditional open, not a toggle: a second request keeps it open.
    state.request_edit(food.clone());
    assert_eq!(state.editing_food, Some(food));
    assert!(state.edit_modal_open);
}

#[test]
fn toggling_a_modal_twice_returns_to_the_original_value() {
    let mut state = DashboardState::new();

    state.toggle_add_modal();
    state.toggle_add_modal();
    assert!(!state.add_modal_open);

    state.toggle_edit_modal();
    state.toggle_edit_modal();
    assert!(!state.edit_modal_open);
}

#[test]
fn modal_flags_are_independent() {
    let mut state = DashboardState::new();

    state.toggle_add_modal();
    assert!(state.add_modal_open);
    assert!(!state.edit_modal_open);

    state.toggle_edit_modal();
    assert!(state.add_modal_open);
    assert!(state.edit_modal_open);
}

#[test]
fn merge_onto_keeps_current_id_and_unset_fields() {
    let partial = UpdateFoodArgs {
        id: Some(42),
        name: None,
        image: Some("new.png".to_string()),
        price: None,
        available: Some(false),
    };

    let merged = partial.merge_onto(&cake());
    assert_eq!(merged.id, 1);
    assert_eq!(merged.name, "Cake");
    assert_eq!(merged.image, "new.png");
    assert_eq!(merged.price, 10.0);
    assert!(!merged.available);
}

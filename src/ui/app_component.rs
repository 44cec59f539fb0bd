use crate::config::Config;
use crate::dashboard::{DashboardService, DashboardState};
use crate::logger::Logger;
use crate::ui::components::dialogs::{AddFoodDialog, EditFoodDialog, LogsDialog};
use crate::ui::components::{FoodListComponent, HeaderComponent, StatusBarComponent};
use crate::ui::core::{Action, Component, EventType, TaskManager};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};
use tokio::sync::mpsc;

/// Root component: composes the header, the food list, and the modal
/// dialogs, owns the dashboard aggregate, and routes intents to background
/// operations.
pub struct AppComponent {
    // Component composition
    header: HeaderComponent,
    status_bar: StatusBarComponent,
    food_list: FoodListComponent,
    add_dialog: AddFoodDialog,
    edit_dialog: EditFoodDialog,
    logs_dialog: LogsDialog,

    // Application state
    state: DashboardState,

    // Services
    service: DashboardService,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,
    logging_enabled: bool,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(service: DashboardService, config: &Config) -> Self {
        let (task_manager, background_action_rx) = TaskManager::new();
        let logger = Logger::new();

        Self {
            header: HeaderComponent::new(),
            status_bar: StatusBarComponent::new(),
            food_list: FoodListComponent::new(config.ui.show_images),
            add_dialog: AddFoodDialog::new(),
            edit_dialog: EditFoodDialog::new(),
            logs_dialog: LogsDialog::new(logger.clone()),
            state: DashboardState::new(),
            service,
            task_manager,
            background_action_rx,
            logger,
            logging_enabled: config.logging.enabled,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Descriptions of the in-flight background operations, oldest first.
    pub fn pending_ops(&self) -> Vec<String> {
        self.task_manager.pending_descriptions()
    }

    /// Kick off the initial list fetch. Fire-and-forget with respect to
    /// rendering: the view stays interactive while it is pending.
    pub fn trigger_initial_load(&mut self) {
        self.log("Starting initial foods load".to_string());
        self.task_manager.spawn_load(self.service.clone());
    }

    fn log(&self, message: String) {
        if self.logging_enabled {
            self.logger.log(message);
        }
    }

    /// Global keyboard shortcuts that aren't component-specific.
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char('a') => Action::ToggleAddModal,
            KeyCode::Char('r') => Action::LoadFoods,
            KeyCode::Char('G') => Action::ShowLogs(true),
            _ => Action::None,
        }
    }

    /// Apply an action: modal toggles and settle notifications mutate the
    /// aggregate directly, mutating intents spawn their network round-trip.
    pub fn handle_app_action(&mut self, action: Action) {
        match action {
            Action::Quit => {
                self.should_quit = true;
            }
            Action::ToggleAddModal => {
                if !self.state.add_modal_open {
                    self.add_dialog.reset();
                }
                self.state.toggle_add_modal();
                self.log(format!("Add modal open: {}", self.state.add_modal_open));
            }
            Action::ToggleEditModal => {
                self.state.toggle_edit_modal();
                self.log(format!("Edit modal open: {}", self.state.edit_modal_open));
            }
            Action::RequestEdit(food) => {
                self.log(format!("Editing food {} '{}'", food.id, food.name));
                self.edit_dialog.populate(&food);
                self.state.request_edit(food);
            }
            Action::LoadFoods => {
                self.log("Reloading foods".to_string());
                self.task_manager.spawn_load(self.service.clone());
            }
            Action::CreateFood(candidate) => {
                self.log(format!("Creating food '{}'", candidate.name));
                self.task_manager.spawn_create(self.service.clone(), candidate);
            }
            Action::UpdateFood(partial) => match self.state.editing_food.clone() {
                Some(target) => {
                    self.log(format!("Updating food {}", target.id));
                    self.task_manager.spawn_update(self.service.clone(), target, partial);
                }
                None => {
                    self.log("Update submitted with no editing target".to_string());
                }
            },
            Action::DeleteFood(id) => {
                self.log(format!("Deleting food {}", id));
                self.task_manager.spawn_delete(self.service.clone(), id);
            }
            Action::LoadSettled(result) => {
                match &result {
                    Ok(foods) => self.log(format!("Loaded {} foods", foods.len())),
                    Err(e) => self.log(format!("Load failed: {}", e)),
                }
                self.state.settle_load(result);
                self.sync_component_data();
            }
            Action::CreateSettled(result) => {
                match &result {
                    Ok(food) => self.log(format!("Created food {} '{}'", food.id, food.name)),
                    Err(e) => self.log(format!("Create failed: {}", e)),
                }
                self.state.settle_create(result);
                self.sync_component_data();
            }
            Action::UpdateSettled(result) => {
                match &result {
                    Ok(food) => self.log(format!("Updated food {}", food.id)),
                    Err(e) => self.log(format!("Update failed: {}", e)),
                }
                self.state.settle_update(result);
                self.sync_component_data();
            }
            Action::DeleteSettled { id, error } => {
                match &error {
                    None => self.log(format!("Deleted food {}", id)),
                    Some(e) => self.log(format!("Delete of food {} failed: {}", id, e)),
                }
                self.state.settle_delete(id, error);
                self.sync_component_data();
            }
            Action::ShowLogs(visible) => {
                self.logs_dialog.visible = visible;
            }
            Action::NextFood => self.food_list.select_next(),
            Action::PreviousFood => self.food_list.select_previous(),
            Action::None => {}
        }
    }

    /// Push the aggregate's collection into the list component.
    fn sync_component_data(&mut self) {
        self.food_list.update_data(self.state.foods.clone());
    }

    /// Route an event: a visible modal takes key priority, then the list,
    /// then global shortcuts.
    pub fn handle_event(&mut self, event: EventType) {
        let action = match event {
            EventType::Key(key) => {
                if self.logs_dialog.visible {
                    self.logs_dialog.handle_key_events(key)
                } else if self.state.edit_modal_open {
                    self.edit_dialog.handle_key_events(key)
                } else if self.state.add_modal_open {
                    self.add_dialog.handle_key_events(key)
                } else {
                    let list_action = self.food_list.handle_key_events(key);
                    if matches!(list_action, Action::None) {
                        self.handle_global_key(key)
                    } else {
                        list_action
                    }
                }
            }
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        self.handle_app_action(action);
    }

    /// Drain settle notifications from background tasks, returning how many
    /// were applied.
    pub fn process_background_actions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(action) = self.background_action_rx.try_recv() {
            self.handle_app_action(action);
            applied += 1;
        }

        self.task_manager.cleanup_finished_tasks();
        applied
    }

    pub fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(rect);

        self.header.render(f, chunks[0]);
        self.food_list.render(f, chunks[1]);
        self.status_bar.render(f, chunks[2], &self.pending_ops());

        // Modals on top; the flags are independent, but the key router only
        // ever raises one at a time.
        if self.state.add_modal_open {
            self.add_dialog.render(f, rect);
        }
        if self.state.edit_modal_open {
            self.edit_dialog.render(f, rect);
        }
        if self.logs_dialog.visible {
            self.logs_dialog.render(f, rect);
        }
    }
}

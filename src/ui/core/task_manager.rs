use super::actions::Action;
use crate::api::{CreateFoodArgs, FoodRecord, UpdateFoodArgs};
use crate::dashboard::DashboardService;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub handle: JoinHandle<()>,
    pub description: String,
}

/// Owns the background network tasks and the channel their settle
/// notifications come back on.
///
/// Each operation is spawned exactly once per user action. Pending tasks
/// are never awaited on shutdown; dropping the manager aborts them.
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Spawn the list fetch.
    pub fn spawn_load(&mut self, service: DashboardService) -> TaskId {
        let action_sender = self.action_sender.clone();
        self.track("Load foods".to_string(), tokio::spawn(async move {
            let result = service.load_foods().await.map_err(|e| e.to_string());
            let _ = action_sender.send(Action::LoadSettled(result));
        }))
    }

    /// Spawn a create round-trip.
    pub fn spawn_create(&mut self, service: DashboardService, candidate: CreateFoodArgs) -> TaskId {
        let action_sender = self.action_sender.clone();
        let description = format!("Create food '{}'", candidate.name);
        self.track(description, tokio::spawn(async move {
            let result = service.create_food(candidate).await.map_err(|e| e.to_string());
            let _ = action_sender.send(Action::CreateSettled(result));
        }))
    }

    /// Spawn an update round-trip against `current`, the editing target at
    /// the time of submission.
    pub fn spawn_update(
        &mut self,
        service: DashboardService,
        current: FoodRecord,
        partial: UpdateFoodArgs,
    ) -> TaskId {
        let action_sender = self.action_sender.clone();
        let description = format!("Update food {}", current.id);
        self.track(description, tokio::spawn(async move {
            let result = service
                .update_food(&current, &partial)
                .await
                .map_err(|e| e.to_string());
            let _ = action_sender.send(Action::UpdateSettled(result));
        }))
    }

    /// Spawn a delete round-trip. A settle notification is sent whatever
    /// the outcome; the state layer removes the record either way.
    pub fn spawn_delete(&mut self, service: DashboardService, id: i64) -> TaskId {
        let action_sender = self.action_sender.clone();
        self.track(format!("Delete food {}", id), tokio::spawn(async move {
            let error = service.delete_food(id).await.err().map(|e| e.to_string());
            let _ = action_sender.send(Action::DeleteSettled { id, error });
        }))
    }

    fn track(&mut self, description: String, handle: JoinHandle<()>) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        self.tasks.insert(task_id, BackgroundTask { handle, description });
        task_id
    }

    /// Descriptions of the in-flight operations, oldest first.
    pub fn pending_descriptions(&self) -> Vec<String> {
        let mut pending: Vec<(&TaskId, &BackgroundTask)> = self.tasks.iter().collect();
        pending.sort_by_key(|(id, _)| **id);
        pending
            .into_iter()
            .map(|(_, task)| task.description.clone())
            .collect()
    }

    /// Drop bookkeeping entries for tasks that have finished.
    pub fn cleanup_finished_tasks(&mut self) -> Vec<TaskId> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for task_id in &finished {
            self.tasks.remove(task_id);
        }

        finished
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}

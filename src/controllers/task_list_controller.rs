// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use slint::{Model, ModelRc, VecModel};
use std::rc::Rc;

use crate::models::{format_due_date, parse_due_date, AddTaskError, TaskCardModel, TaskModel};
use crate::repositories::traits::{DateTimeRepository, TaskRepository};
use crate::Callback;

/// Owns the task list. Every mutation is followed by [`TaskListController::refresh`],
/// which derives the cards the view shows.
#[derive(Clone)]
pub struct TaskListController<R: TaskRepository, D: DateTimeRepository> {
    repo: R,
    date_time_repo: D,
    cards: Rc<VecModel<TaskCardModel>>,
    task_added_callback: Rc<Callback<TaskModel>>,
}

impl<R: TaskRepository, D: DateTimeRepository> TaskListController<R, D> {
    pub fn new(repo: R, date_time_repo: D) -> Self {
        let controller = Self {
            repo,
            date_time_repo,
            cards: Rc::new(VecModel::default()),
            task_added_callback: Rc::new(Callback::default()),
        };
        controller.refresh();
        controller
    }

    pub fn cards(&self) -> ModelRc<TaskCardModel> {
        self.cards.clone().into()
    }

    pub fn tasks(&self) -> Vec<TaskModel> {
        self.repo.tasks()
    }

    pub fn task_count(&self) -> usize {
        self.repo.task_count()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.repo.contains(name.trim())
    }

    /// Adds a task, silently ignoring invalid input and duplicate names.
    pub fn add_task(&self, name: &str, due_date: &str) {
        if let Err(error) = self.try_add_task(name, due_date) {
            log::debug!("Task not added: {error}");
        }
    }

    pub fn try_add_task(&self, name: &str, due_date: &str) -> Result<TaskModel, AddTaskError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AddTaskError::EmptyName);
        }

        let due_date = parse_due_date(due_date)?;

        let task = TaskModel::new(name, due_date);
        if !self.repo.add_task(task.clone()) {
            return Err(AddTaskError::DuplicateName(task.name));
        }

        log::info!("Added task {:?} due {}", task.name, format_due_date(task.due_date));

        self.refresh();
        self.task_added_callback.invoke(&task);

        Ok(task)
    }

    /// Removes the task with the given name. Removing a task that is already gone
    /// does nothing.
    pub fn remove_task(&self, name: &str) {
        if !self.repo.remove(name) {
            return;
        }

        log::info!("Removed task {name:?}");

        self.refresh();
    }

    pub fn on_task_added(&self, callback: impl FnMut(&TaskModel) + 'static) {
        self.task_added_callback.on(callback);
    }

    /// Derives the cards from the current tasks and today's date. The card model
    /// is left untouched when nothing changed.
    pub fn refresh(&self) {
        let today = self.date_time_repo.today();
        let cards: Vec<TaskCardModel> =
            self.repo.tasks().iter().map(|task| TaskCardModel::from_task(task, today)).collect();

        if self.cards.iter().eq(cards.iter().cloned()) {
            return;
        }

        log::debug!("Showing {} task(s) as of {today}", cards.len());
        self.cards.set_vec(cards);
    }
}

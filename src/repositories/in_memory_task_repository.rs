// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::{cell::RefCell, rc::Rc};

use super::traits;
use crate::models::TaskModel;

#[derive(Clone, Default)]
pub struct InMemoryTaskRepository {
    tasks: Rc<RefCell<Vec<TaskModel>>>,
}

impl InMemoryTaskRepository {
    pub fn new(tasks: Vec<TaskModel>) -> Self {
        let repo = Self::default();

        for task in tasks {
            traits::TaskRepository::add_task(&repo, task);
        }

        repo
    }
}

impl traits::TaskRepository for InMemoryTaskRepository {
    fn tasks(&self) -> Vec<TaskModel> {
        self.tasks.borrow().clone()
    }

    fn task_count(&self) -> usize {
        self.tasks.borrow().len()
    }

    fn contains(&self, name: &str) -> bool {
        self.tasks.borrow().iter().any(|task| task.name == name)
    }

    fn add_task(&self, task: TaskModel) -> bool {
        if self.contains(&task.name) {
            return false;
        }

        self.tasks.borrow_mut().push(task);
        true
    }

    fn remove(&self, name: &str) -> bool {
        let mut tasks = self.tasks.borrow_mut();

        match tasks.iter().position(|task| task.name == name) {
            Some(index) => {
                tasks.remove(index);
                true
            }
            None => false,
        }
    }
}

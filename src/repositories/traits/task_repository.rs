// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use crate::models::TaskModel;

pub trait TaskRepository {
    /// All tasks in insertion order.
    fn tasks(&self) -> Vec<TaskModel>;
    fn task_count(&self) -> usize;
    fn contains(&self, name: &str) -> bool;
    /// Returns `false` without storing anything if a task with the same name exists.
    fn add_task(&self, task: TaskModel) -> bool;
    /// Returns `false` if no task has that name.
    fn remove(&self, name: &str) -> bool;
}

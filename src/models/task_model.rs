// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use chrono::NaiveDate;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TaskModel {
    // trimmed, never empty, unique within a list
    pub name: String,
    pub due_date: NaiveDate,
}

impl TaskModel {
    pub fn new(name: impl Into<String>, due_date: NaiveDate) -> Self {
        Self { name: name.into(), due_date }
    }
}

// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use chrono::NaiveDate;
use slint::Color;

use super::{format_due_date, TaskModel};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DueStatus {
    PastDue,
    Upcoming,
}

impl DueStatus {
    /// Only the date is compared: a task due today is not past due.
    pub fn of(due_date: NaiveDate, today: NaiveDate) -> Self {
        if due_date < today {
            DueStatus::PastDue
        } else {
            DueStatus::Upcoming
        }
    }

    pub fn background(self) -> Color {
        match self {
            DueStatus::PastDue => Color::from_rgb_u8(255, 204, 204),
            DueStatus::Upcoming => Color::default(),
        }
    }
}

/// What the list shows for one task.
#[derive(Clone, Debug, PartialEq)]
pub struct TaskCardModel {
    pub name: String,
    pub due_date_text: String,
    pub status: DueStatus,
}

impl TaskCardModel {
    pub fn from_task(task: &TaskModel, today: NaiveDate) -> Self {
        Self {
            name: task.name.clone(),
            due_date_text: format_due_date(task.due_date),
            status: DueStatus::of(task.due_date, today),
        }
    }

    pub fn is_past_due(&self) -> bool {
        self.status == DueStatus::PastDue
    }

    pub fn background(&self) -> Color {
        self.status.background()
    }
}

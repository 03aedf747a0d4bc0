// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod add_task_error;
pub use add_task_error::AddTaskError;

mod due_date;
pub use due_date::{format_due_date, parse_due_date, DUE_DATE_FORMAT};

mod task_card_model;
pub use task_card_model::{DueStatus, TaskCardModel};

mod task_model;
pub use task_model::TaskModel;

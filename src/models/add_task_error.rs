// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

/// Reason a task was not added to the list.
///
/// These never reach the user: a rejected add leaves the list unchanged and
/// the reason is only logged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AddTaskError {
    #[error("task name is empty")]
    EmptyName,
    #[error("due date is missing")]
    MissingDueDate,
    #[error("`{0}` is not a valid due date")]
    InvalidDueDate(String),
    #[error("a task named `{0}` already exists")]
    DuplicateName(String),
}

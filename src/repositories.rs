// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod in_memory_task_repository;
pub use in_memory_task_repository::*;

mod mock_date_time_repository;
pub use mock_date_time_repository::*;

mod system_date_time_repository;
pub use system_date_time_repository::*;

pub mod traits;

// tasks only live as long as the session
pub fn task_repo() -> impl traits::TaskRepository + Clone {
    InMemoryTaskRepository::default()
}

pub fn date_time_repo() -> impl traits::DateTimeRepository + Clone {
    SystemDateTimeRepository
}

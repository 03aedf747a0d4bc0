// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

mod date_time_repository;
pub use date_time_repository::*;

mod task_repository;
pub use task_repository::*;

// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use chrono::{Local, NaiveDate};

use super::traits;

/// Reads today's date from the local clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemDateTimeRepository;

impl traits::DateTimeRepository for SystemDateTimeRepository {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

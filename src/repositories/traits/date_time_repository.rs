// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use chrono::NaiveDate;

pub trait DateTimeRepository {
    fn today(&self) -> NaiveDate;
}

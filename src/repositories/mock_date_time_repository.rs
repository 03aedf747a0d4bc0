// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::{cell::Cell, rc::Rc};

use chrono::NaiveDate;

use super::traits;

/// A clock stuck on a fixed day. Clones share the day, so moving it with
/// [`MockDateTimeRepository::set_today`] is seen by every clone.
#[derive(Clone)]
pub struct MockDateTimeRepository {
    today: Rc<Cell<NaiveDate>>,
}

impl MockDateTimeRepository {
    pub fn new(today: NaiveDate) -> Self {
        Self { today: Rc::new(Cell::new(today)) }
    }

    pub fn set_today(&self, today: NaiveDate) {
        self.today.set(today);
    }
}

impl traits::DateTimeRepository for MockDateTimeRepository {
    fn today(&self) -> NaiveDate {
        self.today.get()
    }
}

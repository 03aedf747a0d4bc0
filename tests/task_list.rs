// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use chrono::NaiveDate;
use due_todo::controllers::TaskListController;
use due_todo::models::TaskCardModel;
use due_todo::repositories::{InMemoryTaskRepository, MockDateTimeRepository};
use slint::{Model, ModelRc};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn empty_list() -> TaskListController<InMemoryTaskRepository, MockDateTimeRepository> {
    TaskListController::new(
        InMemoryTaskRepository::default(),
        MockDateTimeRepository::new(date(2024, 6, 12)),
    )
}

fn cards_named(cards: &ModelRc<TaskCardModel>, name: &str) -> Vec<TaskCardModel> {
    cards.iter().filter(|card| card.name.contains(name)).collect()
}

#[test]
fn test_duplicate_task_is_shown_once() {
    let controller = empty_list();
    let cards = controller.cards();

    controller.add_task("History Test", "05/30/2023");
    controller.add_task("History Test", "05/30/2023");

    assert_eq!(cards_named(&cards, "History Test").len(), 1);
}

#[test]
fn test_task_without_name_is_not_added() {
    let controller = empty_list();
    let cards = controller.cards();

    controller.add_task("", "05/30/2023");

    assert!(!cards.iter().any(|card| card.due_date_text.contains("05/30/2023")));
}

#[test]
fn test_task_without_due_date_is_not_added() {
    let controller = empty_list();
    let cards = controller.cards();

    controller.add_task("History Test", "");

    assert!(cards_named(&cards, "History Test").is_empty());
}

#[test]
fn test_checkbox_deletes_task() {
    let controller = empty_list();
    let cards = controller.cards();

    controller.add_task("History Test", "05/30/2023");
    controller.add_task("Math Test", "07/01/2024");
    controller.remove_task("History Test");

    assert!(cards_named(&cards, "History Test").is_empty());
    assert_eq!(cards_named(&cards, "Math Test").len(), 1);
}

#[test]
fn test_past_due_task_is_highlighted() {
    let controller = empty_list();
    let cards = controller.cards();

    controller.add_task("History Test", "05/30/2023");
    controller.add_task("Math Test", "06/12/2024");

    let history = &cards_named(&cards, "History Test")[0];
    assert_eq!(history.background(), slint::Color::from_rgb_u8(255, 204, 204));

    let math = &cards_named(&cards, "Math Test")[0];
    assert_eq!(math.background(), slint::Color::default());
}

// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use slint::*;
use std::{rc::Rc, time::Duration};

use crate::{
    controllers::TaskListController,
    models::TaskCardModel,
    repositories::traits::{DateTimeRepository, TaskRepository},
    ui,
};

// how often past-due styling is re-evaluated, so it follows the day rolling over
const REFRESH_INTERVAL: Duration = Duration::from_secs(60);

// one place to implement connection between adapter (view) and controller.
// The returned timer must be kept alive for as long as the view is shown.
pub fn connect<R, D>(view_handle: &ui::MainWindow, controller: TaskListController<R, D>) -> Timer
where
    R: TaskRepository + Clone + 'static,
    D: DateTimeRepository + Clone + 'static,
{
    let adapter = view_handle.global::<ui::TaskListAdapter>();

    adapter.set_tasks(Rc::new(MapModel::new(controller.cards(), map_card_to_item)).into());

    adapter.on_add_task({
        let controller = controller.clone();

        move |name, due_date| controller.add_task(name.as_str(), due_date.as_str())
    });

    adapter.on_remove_task({
        let controller = controller.clone();

        move |name| controller.remove_task(name.as_str())
    });

    // inputs are only cleared once a task made it into the list
    controller.on_task_added({
        let view_handle = view_handle.as_weak();

        move |_| {
            let Some(view_handle) = view_handle.upgrade() else {
                return;
            };

            view_handle.set_draft_name(SharedString::default());
            view_handle.set_draft_due_date(SharedString::default());
        }
    });

    let refresh_timer = Timer::default();
    refresh_timer.start(TimerMode::Repeated, REFRESH_INTERVAL, move || controller.refresh());
    refresh_timer
}

// maps a TaskCardModel (data) to a TaskCard (ui)
fn map_card_to_item(card: TaskCardModel) -> ui::TaskCard {
    ui::TaskCard {
        background: card.background(),
        past_due: card.is_past_due(),
        name: card.name.into(),
        due_date: card.due_date_text.into(),
    }
}

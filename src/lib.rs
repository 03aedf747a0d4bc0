// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod ui {
    slint::include_modules!();
}

pub mod adapters;
use adapters::*;

mod callback;
pub use callback::*;

pub mod controllers;
pub mod models;
pub mod repositories;

use slint::ComponentHandle;

/// Shows the to-do list and runs the event loop until the window is closed.
pub fn run() -> Result<(), slint::PlatformError> {
    let view_handle = ui::MainWindow::new()?;

    let task_list_controller = controllers::TaskListController::new(
        repositories::task_repo(),
        repositories::date_time_repo(),
    );
    let _refresh_timer = task_list_adapter::connect(&view_handle, task_list_controller);

    view_handle.run()
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    // This provides better error messages in debug mode.
    // It's disabled in release mode so it doesn't bloat up the file size.
    #[cfg(debug_assertions)]
    console_error_panic_hook::set_once();

    console_log::init_with_level(if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    })
    .ok();

    if let Err(e) = run() {
        log::error!("Runtime error: {}", e);
    }
}

// Copyright © SixtyFPS GmbH <info@slint.dev>
// SPDX-License-Identifier: MIT

use std::cell::Cell;

type Handler<Arguments> = Cell<Option<Box<dyn FnMut(&Arguments)>>>;

/// A single replaceable listener that controllers notify.
pub struct Callback<Arguments: ?Sized> {
    handler: Handler<Arguments>,
}

impl<Arguments: ?Sized> Default for Callback<Arguments> {
    fn default() -> Self {
        Self { handler: Default::default() }
    }
}

impl<Arguments: ?Sized> Callback<Arguments> {
    pub fn on(&self, f: impl FnMut(&Arguments) + 'static) {
        self.handler.set(Some(Box::new(f)));
    }

    /// Calls the listener, if any. The listener is taken out while it runs, so a
    /// nested invoke from inside it does nothing.
    pub fn invoke(&self, arguments: &Arguments) {
        if let Some(mut handler) = self.handler.take() {
            handler(arguments);

            // keep a listener that was installed while this one ran
            let replacement = self.handler.take();
            self.handler.set(Some(replacement.unwrap_or(handler)));
        }
    }
}

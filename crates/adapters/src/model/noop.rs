// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op event model for when delivery is disabled.

use dal_core::{Event, EventModel};

/// Event model that discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpEventModel;

impl NoOpEventModel {
    pub fn new() -> Self {
        Self
    }
}

impl EventModel for NoOpEventModel {
    fn send(&self, _evt: Event) {}
}

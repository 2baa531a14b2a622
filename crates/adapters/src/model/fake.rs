// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake event model for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use dal_core::{Event, EventModel};
use std::sync::{Arc, Mutex};

/// Event model that records every delivery
#[derive(Clone, Debug, Default)]
pub struct FakeEventModel {
    calls: Arc<Mutex<Vec<Event>>>,
}

impl FakeEventModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// All delivered events, oldest first
    pub fn calls(&self) -> Vec<Event> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn count(&self) -> usize {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

impl EventModel for FakeEventModel {
    fn send(&self, evt: Event) {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(evt);
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;

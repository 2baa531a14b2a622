// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced event model wrapper for consistent observability

use dal_core::{Event, EventModel};
use std::time::Instant;

/// Wrapper that adds tracing to any EventModel
#[derive(Clone, Debug)]
pub struct TracedEventModel<M> {
    inner: M,
}

impl<M> TracedEventModel<M> {
    pub fn new(inner: M) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &M {
        &self.inner
    }
}

impl<M: EventModel> EventModel for TracedEventModel<M> {
    fn send(&self, evt: Event) {
        let span = tracing::debug_span!(
            "event.send",
            source = evt.source(),
            value = evt.value()
        );
        let _guard = span.enter();

        tracing::debug!(timestamp = evt.timestamp(), "delivering");

        let start = Instant::now();
        self.inner.send(evt);
        tracing::trace!(elapsed_us = start.elapsed().as_micros() as u64, "delivered");
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;

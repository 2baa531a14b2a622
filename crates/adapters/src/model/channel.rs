// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event model backed by a tokio channel
//!
//! Lets a task running elsewhere consume events fired synchronously on the
//! producer side. Sending never blocks, so firing stays usable from
//! non-async code.

use dal_core::{Event, EventModel};
use tokio::sync::mpsc;

/// Sender half used to deliver events
pub type EventSender = mpsc::UnboundedSender<Event>;
/// Receiver for delivered events
pub type EventReceiver = mpsc::UnboundedReceiver<Event>;

#[derive(Clone, Debug)]
pub struct ChannelEventModel {
    tx: EventSender,
}

impl ChannelEventModel {
    /// Create a model and the receiver its events arrive on
    pub fn new() -> (Self, EventReceiver) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    pub fn from_sender(tx: EventSender) -> Self {
        Self { tx }
    }

    /// True once the receiver has been dropped
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl EventModel for ChannelEventModel {
    fn send(&self, evt: Event) {
        if self.tx.send(evt).is_err() {
            tracing::debug!(
                source = evt.source(),
                value = evt.value(),
                "event receiver closed, dropping event"
            );
        }
    }
}

#[cfg(test)]
#[path = "channel_tests.rs"]
mod tests;

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Singly-linked event queue
//!
//! `EventQueueItem` wraps one event plus the link to the item behind it.
//! `EventQueue` is a bounded FIFO over those items. Routing queued events to
//! listeners is left to whatever owns the queue.

use crate::config::DalConfig;
use crate::error::DalError;
use crate::event::Event;

/// One queued event and the link to the next item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventQueueItem {
    pub evt: Event,
    pub next: Option<Box<EventQueueItem>>,
}

impl EventQueueItem {
    pub fn new(evt: Event) -> Self {
        Self { evt, next: None }
    }
}

/// Bounded FIFO of events
#[derive(Debug)]
pub struct EventQueue {
    head: Option<Box<EventQueueItem>>,
    len: usize,
    max_depth: usize,
}

impl EventQueue {
    pub fn new(max_depth: usize) -> Self {
        Self {
            head: None,
            len: 0,
            max_depth,
        }
    }

    pub fn from_config(config: &DalConfig) -> Self {
        Self::new(config.event_queue_depth)
    }

    /// Append an event at the back of the queue
    pub fn push(&mut self, evt: Event) -> Result<(), DalError> {
        if self.len >= self.max_depth {
            tracing::warn!(
                source = evt.source(),
                value = evt.value(),
                max_depth = self.max_depth,
                "event queue full, dropping event"
            );
            return Err(DalError::NoResources);
        }

        let mut slot = &mut self.head;
        while let Some(item) = slot {
            slot = &mut item.next;
        }
        *slot = Some(Box::new(EventQueueItem::new(evt)));
        self.len += 1;
        Ok(())
    }

    /// Remove and return the event at the front of the queue
    pub fn pop(&mut self) -> Option<Event> {
        self.head.take().map(|mut item| {
            self.head = item.next.take();
            self.len -= 1;
            item.evt
        })
    }

    pub fn peek(&self) -> Option<&Event> {
        self.head.as_ref().map(|item| &item.evt)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Iterate front to back without consuming
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head.as_deref(),
        }
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::from_config(&DalConfig::default())
    }
}

impl Drop for EventQueue {
    // Unlink one item at a time; the default drop recurses down the chain.
    fn drop(&mut self) {
        let mut cursor = self.head.take();
        while let Some(mut item) = cursor {
            cursor = item.next.take();
        }
    }
}

pub struct Iter<'a> {
    next: Option<&'a EventQueueItem>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Event;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|item| {
            self.next = item.next.as_deref();
            &item.evt
        })
    }
}

impl<'a> IntoIterator for &'a EventQueue {
    type Item = &'a Event;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;

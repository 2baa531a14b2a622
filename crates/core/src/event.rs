// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event value type and its delivery onto an event model
//!
//! Components describe what happened as an `(source, value)` pair. The
//! timestamp is sampled once from the context clock when the event is
//! created. Delivery goes to whichever `EventModel` currently occupies the
//! context's bus slot; an empty slot means the event is simply not delivered.

use crate::clock::Clock;
use crate::config::DalConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, RwLock};

/// How an event is processed after construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchMode {
    /// Initialise the event only; nothing is delivered
    CreateOnly,
    /// Initialise the event, then deliver it straight away.
    ///
    /// Delivery runs the model synchronously, so this is not suitable for
    /// interrupt context.
    #[default]
    CreateAndFire,
}

/// Anything that can accept an event for delivery
pub trait EventModel: Send + Sync {
    fn send(&self, evt: Event);
}

/// Shared slot holding the active event model
type BusSlot = Arc<RwLock<Option<Arc<dyn EventModel>>>>;

/// Collaborators needed to create and fire events
///
/// Clones share the same bus slot, so registering a model through one
/// handle is visible to every other.
pub struct EventContext<C> {
    clock: C,
    bus: BusSlot,
    default_mode: LaunchMode,
}

impl<C: Clock> EventContext<C> {
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            bus: Arc::new(RwLock::new(None)),
            default_mode: LaunchMode::default(),
        }
    }

    pub fn with_config(clock: C, config: &DalConfig) -> Self {
        Self {
            default_mode: config.default_launch_mode,
            ..Self::new(clock)
        }
    }

    /// Register the model that receives fired events, returning the previous one
    pub fn set_bus(&self, bus: Arc<dyn EventModel>) -> Option<Arc<dyn EventModel>> {
        let mut slot = self.bus.write().unwrap_or_else(|e| e.into_inner());
        slot.replace(bus)
    }

    /// Empty the bus slot, returning the model that occupied it
    pub fn clear_bus(&self) -> Option<Arc<dyn EventModel>> {
        let mut slot = self.bus.write().unwrap_or_else(|e| e.into_inner());
        slot.take()
    }

    pub fn has_bus(&self) -> bool {
        self.bus.read().unwrap_or_else(|e| e.into_inner()).is_some()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn default_mode(&self) -> LaunchMode {
        self.default_mode
    }

    // The lock is released before the model runs, so a model may re-enter the context.
    fn bus(&self) -> Option<Arc<dyn EventModel>> {
        self.bus.read().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl<C: Clone> Clone for EventContext<C> {
    fn clone(&self) -> Self {
        Self {
            clock: self.clock.clone(),
            bus: Arc::clone(&self.bus),
            default_mode: self.default_mode,
        }
    }
}

impl<C: fmt::Debug> fmt::Debug for EventContext<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let has_bus = self
            .bus
            .read()
            .map(|slot| slot.is_some())
            .unwrap_or(false);
        f.debug_struct("EventContext")
            .field("clock", &self.clock)
            .field("has_bus", &has_bus)
            .field("default_mode", &self.default_mode)
            .finish()
    }
}

/// An event generated by a component on the device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    source: u16,
    value: u16,
    timestamp: u64,
}

impl Event {
    /// Create an event stamped with the context's current time.
    ///
    /// Unless `mode` is `CreateOnly` the event is fired before returning.
    pub fn new<C: Clock>(source: u16, value: u16, mode: LaunchMode, ctx: &EventContext<C>) -> Self {
        let evt = Self {
            source,
            value,
            timestamp: ctx.clock().now(),
        };

        if mode != LaunchMode::CreateOnly {
            evt.fire(ctx);
        }

        evt
    }

    /// Create an event using the context's default launch mode
    pub fn with_default_mode<C: Clock>(source: u16, value: u16, ctx: &EventContext<C>) -> Self {
        Self::new(source, value, ctx.default_mode(), ctx)
    }

    /// Create an empty event (source and value zero) stamped with the current time
    pub fn blank<C: Clock>(clock: &C) -> Self {
        Self {
            source: 0,
            value: 0,
            timestamp: clock.now(),
        }
    }

    /// Id of the component that generated the event
    pub fn source(&self) -> u16 {
        self.source
    }

    /// Component specific code indicating the cause of the event
    pub fn value(&self) -> u16 {
        self.value
    }

    /// System time in milliseconds at which the event was created
    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    /// Deliver this event to the context's current event model.
    ///
    /// Does nothing if no model is registered. Each call delivers again.
    pub fn fire<C>(&self, ctx: &EventContext<C>)
    where
        C: Clock,
    {
        match ctx.bus() {
            Some(bus) => {
                tracing::trace!(
                    source = self.source,
                    value = self.value,
                    timestamp = self.timestamp,
                    "firing event"
                );
                bus.send(*self);
            }
            None => tracing::trace!(
                source = self.source,
                value = self.value,
                "no event model registered"
            ),
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;

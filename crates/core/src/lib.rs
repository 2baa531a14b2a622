// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! dal-core: device abstraction layer primitives
//!
//! This crate provides:
//! - Portability helpers (min/max, memory clear, digit test, in-buffer integer formatting)
//! - A monotonic clock abstraction standing in for the system timer
//! - The `Event` value type and its dispatch onto a pluggable `EventModel`
//! - A minimal singly-linked event queue
//! - TOML configuration for launch mode and queue depth

pub mod clock;
pub mod compat;
pub mod config;
pub mod error;
pub mod event;
pub mod queue;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{ConfigError, DalConfig};
pub use error::{DalError, DAL_OK};
pub use event::{Event, EventContext, EventModel, LaunchMode};
pub use queue::{EventQueue, EventQueueItem};

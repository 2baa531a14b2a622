// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event model implementations

mod channel;
mod noop;

pub use channel::{ChannelEventModel, EventReceiver, EventSender};
pub use noop::NoOpEventModel;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeEventModel;

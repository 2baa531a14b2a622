// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types shared across the DAL

use thiserror::Error;

/// Status code reported by firmware-facing callers on success
pub const DAL_OK: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DalError {
    /// A buffer or argument did not meet the operation's contract
    #[error("invalid parameter")]
    InvalidParameter,
    /// A bounded resource (such as a queue) is exhausted
    #[error("no resources available")]
    NoResources,
}

impl DalError {
    /// Firmware status code for this error
    pub fn code(&self) -> i32 {
        match self {
            DalError::InvalidParameter => -1001,
            DalError::NoResources => -1005,
        }
    }
}

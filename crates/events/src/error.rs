// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for listener registration and event emission

use thiserror::Error;

/// Errors from `add_listener` and `remove_listener`.
///
/// Both indicate programmer misuse of the registration API rather than
/// recoverable runtime conditions; the bus surfaces them immediately and
/// performs no recovery.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("listener already registered for channel '{channel}'")]
    DuplicateListener { channel: String },
    #[error("no matching listener registration for channel '{channel}'")]
    UnknownRegistration { channel: String },
}

/// Errors from `emit`
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmitError<E> {
    /// An existing channel was found with zero listeners. The entry should
    /// have been deleted when its last listener was removed, so this
    /// indicates internal corruption.
    #[error("channel '{channel}' exists with no listeners")]
    EmptyChannel { channel: String },
    /// A listener failed; listeners after it in the sequence did not run
    #[error("listener failed: {0}")]
    Listener(E),
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event bus with strictly sequential listener invocation

use crate::error::{EmitError, RegistryError};
use crate::listener::Listener;
use std::collections::HashMap;

/// Named event channels, each holding an ordered list of listeners.
///
/// `emit` runs a channel's listeners one at a time: each listener's future is
/// awaited to completion before the next listener starts, and the awaited
/// return values are collected in invocation order. Listeners may have side
/// effects that later listeners observe, so the ordering is part of the
/// contract.
///
/// A channel is created implicitly by the first `add_listener` and deleted by
/// the `remove_listener` that empties it; an entry in the channel table never
/// holds an empty listener list.
pub struct EventBus<A, R, E> {
    channels: HashMap<String, Vec<Listener<A, R, E>>>,
}

impl<A, R, E> EventBus<A, R, E> {
    pub fn new() -> Self {
        Self {
            channels: HashMap::new(),
        }
    }

    /// Register a listener on a channel, creating the channel if absent.
    ///
    /// The bus stores a clone of the handle. Registering the same handle
    /// twice on one channel is misuse; the same handle may be registered on
    /// any number of distinct channels.
    pub fn add_listener(
        &mut self,
        channel: &str,
        listener: &Listener<A, R, E>,
    ) -> Result<(), RegistryError> {
        let listeners = self.channels.entry(channel.to_string()).or_default();
        if listeners.contains(listener) {
            return Err(RegistryError::DuplicateListener {
                channel: channel.to_string(),
            });
        }
        listeners.push(listener.clone());
        tracing::debug!(channel, count = listeners.len(), "listener added");
        Ok(())
    }

    /// Remove the last occurrence of a listener from a channel.
    ///
    /// The channel entry is deleted once its listener list empties.
    pub fn remove_listener(
        &mut self,
        channel: &str,
        listener: &Listener<A, R, E>,
    ) -> Result<(), RegistryError> {
        let unknown = || RegistryError::UnknownRegistration {
            channel: channel.to_string(),
        };
        let listeners = self.channels.get_mut(channel).ok_or_else(unknown)?;
        let index = listeners
            .iter()
            .rposition(|l| l == listener)
            .ok_or_else(unknown)?;
        listeners.remove(index);
        if listeners.is_empty() {
            self.channels.remove(channel);
        }
        tracing::debug!(channel, "listener removed");
        Ok(())
    }

    /// Number of listeners currently registered on a channel
    pub fn listener_count(&self, channel: &str) -> usize {
        self.channels.get(channel).map_or(0, Vec::len)
    }

    /// Number of channels with at least one listener
    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    /// Names of all channels with at least one listener
    pub fn channels(&self) -> Vec<&str> {
        self.channels.keys().map(String::as_str).collect()
    }
}

impl<A: Clone, R, E> EventBus<A, R, E> {
    /// Emit on a channel, invoking its listeners strictly in sequence.
    ///
    /// Each listener is called with a clone of `args` and awaited to
    /// completion before the next call starts. Returns the listeners' return
    /// values in invocation order.
    ///
    /// Emitting on a channel with no registrations is a normal condition and
    /// returns an empty result. A listener returning `Err` aborts the
    /// emission: listeners after it do not run and the error surfaces as
    /// [`EmitError::Listener`].
    pub async fn emit(&self, channel: &str, args: A) -> Result<Vec<R>, EmitError<E>> {
        let Some(listeners) = self.channels.get(channel) else {
            return Ok(Vec::new());
        };
        if listeners.is_empty() {
            return Err(EmitError::EmptyChannel {
                channel: channel.to_string(),
            });
        }
        tracing::trace!(channel, count = listeners.len(), "emitting");
        let mut results = Vec::with_capacity(listeners.len());
        for listener in listeners {
            // Invocation n+1 must not start until invocation n has resolved
            let value = listener.call(args.clone()).await;
            results.push(value.map_err(EmitError::Listener)?);
        }
        Ok(results)
    }
}

impl<A, R, E> Default for EventBus<A, R, E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "bus_tests.rs"]
mod tests;

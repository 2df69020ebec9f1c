// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Async-capable listener handles with reference identity

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Future returned by one listener invocation
pub type ListenerFuture<R, E> = Pin<Box<dyn Future<Output = Result<R, E>> + Send>>;

type ListenerFn<A, R, E> = dyn Fn(A) -> ListenerFuture<R, E> + Send + Sync;

/// A callable that can be registered against event channels.
///
/// Identity is allocation identity: clones of one handle are the same
/// listener, while every constructor call produces a distinct listener even
/// for identical closures. The bus stores clones of the handle; the callable
/// itself is shared, never copied.
pub struct Listener<A, R, E> {
    call: Arc<ListenerFn<A, R, E>>,
}

impl<A, R, E> Listener<A, R, E>
where
    A: 'static,
    R: 'static,
    E: 'static,
{
    /// Wrap an async function or closure
    pub fn new<F, Fut>(f: F) -> Self
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<R, E>> + Send + 'static,
    {
        Self {
            call: Arc::new(move |args| Box::pin(f(args))),
        }
    }

    /// Wrap a function that completes immediately
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(A) -> Result<R, E> + Send + Sync + 'static,
        R: Send,
        E: Send,
    {
        Self {
            call: Arc::new(move |args| Box::pin(std::future::ready(f(args)))),
        }
    }
}

impl<A, R, E> Listener<A, R, E> {
    /// Invoke the listener with the given arguments
    pub(crate) fn call(&self, args: A) -> ListenerFuture<R, E> {
        (self.call)(args)
    }
}

impl<A, R, E> Clone for Listener<A, R, E> {
    fn clone(&self) -> Self {
        Self {
            call: Arc::clone(&self.call),
        }
    }
}

impl<A, R, E> PartialEq for Listener<A, R, E> {
    fn eq(&self, other: &Self) -> bool {
        // Identity, not behavior: equal means same allocation
        std::ptr::addr_eq(Arc::as_ptr(&self.call), Arc::as_ptr(&other.call))
    }
}

impl<A, R, E> Eq for Listener<A, R, E> {}

impl<A, R, E> fmt::Debug for Listener<A, R, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Listener")
            .field(&Arc::as_ptr(&self.call).cast::<()>())
            .finish()
    }
}

#[cfg(test)]
#[path = "listener_tests.rs"]
mod tests;

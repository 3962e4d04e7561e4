// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Offloads blocking cluster calls onto the runtime's blocking pool.
//!
//! Submitted operations run on whichever pool thread is free, so completion
//! order is not submission order. Callers that need ordering must await one
//! result before submitting the next. Submitted work cannot be cancelled.

use crate::error::{Result, TopicError};
use futures::{ready, FutureExt};
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

#[derive(Clone, Debug)]
pub struct BlockingExecutor {
    runtime: Handle,
}

impl BlockingExecutor {
    pub fn new(runtime: Handle) -> Self {
        Self { runtime }
    }

    /// Executor bound to the runtime of the calling task.
    ///
    /// Panics when called outside a tokio runtime.
    pub fn current() -> Self {
        Self::new(Handle::current())
    }

    pub fn runtime(&self) -> &Handle {
        &self.runtime
    }

    /// Submit `op` to the blocking pool and return a handle to its result.
    ///
    /// The work starts immediately, whether or not the handle is polled. An
    /// error returned by `op` is delivered unchanged.
    pub fn run<T, F>(&self, op: F) -> Pending<T>
    where
        F: FnOnce() -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        Pending {
            inner: self.runtime.spawn_blocking(op),
        }
    }
}

/// Result of an operation submitted to a [`BlockingExecutor`].
#[must_use = "dropping a Pending does not cancel the submitted work"]
#[derive(Debug)]
pub struct Pending<T> {
    inner: JoinHandle<Result<T>>,
}

impl<T> Future for Pending<T> {
    type Output = Result<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match ready!(self.inner.poll_unpin(cx)) {
            Ok(result) => Poll::Ready(result),
            Err(e) => Poll::Ready(Err(TopicError::Worker(e.to_string()))),
        }
    }
}

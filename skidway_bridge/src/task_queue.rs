// Copyright 2026 the Skidway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A thread-affine task queue: post from anywhere, run on the owner thread.
//!
//! [`UiTaskQueue`] records the thread it was created on as its owner. Any
//! thread may [`post`](UiTaskQueue::post) a task; tasks run only when the
//! owner thread calls [`run_pending`](UiTaskQueue::run_pending), in FIFO
//! order. This is the hand-off the callback relay uses to move controller
//! callbacks onto the UI thread. The embedder is expected to drain the queue
//! from its event loop.
//!
//! There is no cancellation: once posted, a task runs on the next drain.

use std::collections::VecDeque;
use std::thread::{self, ThreadId};

use parking_lot::Mutex;

type Task = Box<dyn FnOnce() + Send>;

/// A FIFO queue of tasks owned by the thread that created it.
pub struct UiTaskQueue {
    owner: ThreadId,
    tasks: Mutex<VecDeque<Task>>,
}

impl UiTaskQueue {
    /// Creates a queue owned by the current thread.
    #[must_use]
    pub fn new() -> Self {
        Self {
            owner: thread::current().id(),
            tasks: Mutex::new(VecDeque::new()),
        }
    }

    /// Returns `true` if called on the owner thread.
    #[must_use]
    pub fn is_current(&self) -> bool {
        thread::current().id() == self.owner
    }

    /// Enqueues a task to run on the owner thread's next drain.
    pub fn post(&self, task: impl FnOnce() + Send + 'static) {
        self.tasks.lock().push_back(Box::new(task));
    }

    /// Number of tasks waiting to run.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.tasks.lock().len()
    }

    /// Runs all queued tasks in FIFO order; returns how many ran.
    ///
    /// Must be called on the owner thread; calls from other threads run
    /// nothing and return 0. Tasks are popped one at a time so a task may
    /// post follow-up work, which runs within the same drain.
    pub fn run_pending(&self) -> usize {
        if !self.is_current() {
            debug_assert!(false, "run_pending called off the owner thread");
            return 0;
        }
        let mut ran = 0;
        // Pop outside the task invocation so tasks can post without deadlock.
        // The guard must be dropped before the task runs; a `while let` on
        // `self.tasks.lock().pop_front()` would hold the lock for the loop body.
        loop {
            let task = self.tasks.lock().pop_front();
            let Some(task) = task else { break };
            task();
            ran += 1;
        }
        ran
    }
}

impl Default for UiTaskQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for UiTaskQueue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("UiTaskQueue")
            .field("owner", &self.owner)
            .field("pending", &self.pending())
            .finish()
    }
}

//! Test executors that make the dispatcher's queueing observable

use std::collections::VecDeque;

use openhaptics_dispatch::{Task, TaskExecutor};
use parking_lot::Mutex;

/// Runs every task immediately on the calling thread.
///
/// Collapses the dispatcher's asynchrony so tests can assert on platform
/// calls right after `vibrate` returns.
#[derive(Debug, Default)]
pub struct InlineExecutor;

impl InlineExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl TaskExecutor for InlineExecutor {
    fn execute(&self, task: Task) {
        task();
    }
}

/// Queues tasks until the test pumps them explicitly.
///
/// This is the stub worker the gating tests need: it separates enqueue
/// time from execution time, so a test can change platform state in
/// between and observe which side of the dispatcher's two-stage gate
/// reacts.
#[derive(Default)]
pub struct ManualExecutor {
    queue: Mutex<VecDeque<Task>>,
}

impl ManualExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks waiting to run.
    pub fn pending(&self) -> usize {
        self.queue.lock().len()
    }

    /// Runs the oldest queued task, if any. Returns whether one ran.
    pub fn run_next(&self) -> bool {
        // Pop before running: a task may enqueue follow-up work.
        let task = self.queue.lock().pop_front();
        match task {
            Some(task) => {
                task();
                true
            }
            None => false,
        }
    }

    /// Drains the queue in FIFO order. Returns how many tasks ran.
    pub fn run_all(&self) -> usize {
        let mut ran = 0;
        while self.run_next() {
            ran += 1;
        }
        ran
    }
}

impl TaskExecutor for ManualExecutor {
    fn execute(&self, task: Task) {
        self.queue.lock().push_back(task);
    }
}

impl std::fmt::Debug for ManualExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManualExecutor")
            .field("pending", &self.pending())
            .finish()
    }
}

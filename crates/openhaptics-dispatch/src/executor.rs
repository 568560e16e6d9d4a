//! Background execution context for platform calls

use std::io;
use std::thread::{self, JoinHandle};

use crossbeam::channel::{self, Sender};

/// A unit of work handed to an executor.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Execution context abstraction
///
/// The dispatcher only ever enqueues; where and when tasks run is the
/// executor's business. Production code uses [`BackgroundExecutor`]; tests
/// substitute synchronous or manually pumped executors to observe the
/// dispatcher's two-stage gating.
pub trait TaskExecutor: Send + Sync {
    /// Accepts a task for execution. Must not run it on the calling thread
    /// in production implementations.
    fn execute(&self, task: Task);
}

/// Executor construction failures
#[derive(Debug, thiserror::Error)]
pub enum ExecutorError {
    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] io::Error),
}

/// One long-lived worker thread draining a FIFO queue.
///
/// `execute` only enqueues and returns immediately. Tasks run in
/// submission order; there is no cancellation and no timeout. Dropping the
/// executor closes the queue and joins the worker, so tasks already
/// enqueued still run to completion.
#[derive(Debug)]
pub struct BackgroundExecutor {
    sender: Option<Sender<Task>>,
    worker: Option<JoinHandle<()>>,
}

impl BackgroundExecutor {
    /// Thread name used by [`new`](Self::new).
    pub const DEFAULT_WORKER_NAME: &'static str = "haptics-worker";

    /// Spawns the worker under the default thread name.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutorError::Spawn`] if the OS refuses to create the
    /// thread.
    pub fn new() -> Result<Self, ExecutorError> {
        Self::with_name(Self::DEFAULT_WORKER_NAME)
    }

    /// Spawns the worker under an explicit thread name.
    ///
    /// # Errors
    ///
    /// Returns [`ExecutorError::Spawn`] if the OS refuses to create the
    /// thread.
    pub fn with_name(name: &str) -> Result<Self, ExecutorError> {
        let (sender, receiver) = channel::unbounded::<Task>();
        let worker = thread::Builder::new()
            .name(name.to_owned())
            .spawn(move || {
                while let Ok(task) = receiver.recv() {
                    task();
                }
            })?;

        Ok(Self {
            sender: Some(sender),
            worker: Some(worker),
        })
    }
}

impl TaskExecutor for BackgroundExecutor {
    fn execute(&self, task: Task) {
        if let Some(sender) = &self.sender {
            if sender.send(task).is_err() {
                tracing::debug!("haptics worker queue closed; task dropped");
            }
        }
    }
}

impl Drop for BackgroundExecutor {
    fn drop(&mut self) {
        // Closing the channel lets the worker drain the queue and exit.
        drop(self.sender.take());
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                tracing::warn!("haptics worker terminated by panic");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::mpsc;
    use std::sync::Arc;
    use std::time::Duration;

    #[test]
    fn test_tasks_run_in_submission_order() -> Result<(), ExecutorError> {
        let executor = BackgroundExecutor::new()?;
        let (tx, rx) = mpsc::channel();

        for i in 0..32 {
            let tx = tx.clone();
            executor.execute(Box::new(move || {
                let _ = tx.send(i);
            }));
        }
        drop(executor); // joins the worker, all tasks complete

        let observed: Vec<i32> = rx.try_iter().collect();
        assert_eq!(observed, (0..32).collect::<Vec<_>>());
        Ok(())
    }

    #[test]
    fn test_tasks_run_on_named_worker_thread() -> Result<(), ExecutorError> {
        let executor = BackgroundExecutor::with_name("haptics-test-worker")?;
        let (tx, rx) = mpsc::channel();

        executor.execute(Box::new(move || {
            let name = thread::current().name().map(str::to_owned);
            let _ = tx.send(name);
        }));

        let name = rx.recv_timeout(Duration::from_secs(5));
        assert_eq!(name, Ok(Some("haptics-test-worker".to_owned())));
        Ok(())
    }

    #[test]
    fn test_drop_completes_enqueued_tasks() -> Result<(), ExecutorError> {
        let executor = BackgroundExecutor::new()?;
        let counter = Arc::new(AtomicUsize::new(0));

        for _ in 0..16 {
            let counter = Arc::clone(&counter);
            executor.execute(Box::new(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            }));
        }
        drop(executor);

        assert_eq!(counter.load(Ordering::SeqCst), 16);
        Ok(())
    }

    #[test]
    fn test_execute_returns_before_task_completes() -> Result<(), ExecutorError> {
        let executor = BackgroundExecutor::new()?;
        let (gate_tx, gate_rx) = mpsc::channel::<()>();
        let ran = Arc::new(AtomicUsize::new(0));

        let task_ran = Arc::clone(&ran);
        executor.execute(Box::new(move || {
            let _ = gate_rx.recv();
            task_ran.fetch_add(1, Ordering::SeqCst);
        }));

        // The worker is wedged on the gate, yet execute has already returned.
        assert_eq!(ran.load(Ordering::SeqCst), 0);

        let _ = gate_tx.send(());
        drop(executor);
        assert_eq!(ran.load(Ordering::SeqCst), 1);
        Ok(())
    }
}

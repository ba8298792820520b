//! Worker thread pool for blocking lookups.
//!
//! All workers pull jobs from one shared channel. The pool owns the only
//! sender; dropping it is the shutdown signal. Workers keep running until the
//! channel is both closed and drained, so jobs queued before shutdown still
//! run.

use crate::base::neterror::NetError;
use std::{
    sync::{Arc, Mutex, PoisonError},
    thread::{self, JoinHandle},
};
use tokio::sync::mpsc;

pub(crate) type Job = Box<dyn FnOnce() + Send + 'static>;

type SharedReceiver = Arc<Mutex<mpsc::UnboundedReceiver<Job>>>;

pub(crate) struct WorkerPool {
    /// Keep-alive guard. `None` once shutdown has started.
    sender: Option<mpsc::UnboundedSender<Job>>,
    threads: Vec<JoinHandle<()>>,
}

impl WorkerPool {
    /// Spawns `thread_count` workers named `{thread_name}-{index}`.
    pub(crate) fn start(thread_count: usize, thread_name: &str) -> Result<Self, NetError> {
        let (sender, receiver) = mpsc::unbounded_channel::<Job>();
        let receiver: SharedReceiver = Arc::new(Mutex::new(receiver));

        let mut pool = Self {
            sender: Some(sender),
            threads: Vec::with_capacity(thread_count),
        };

        for index in 0..thread_count {
            let receiver = Arc::clone(&receiver);
            let spawned = thread::Builder::new()
                .name(format!("{}-{}", thread_name, index))
                .spawn(move || worker_loop(receiver));

            match spawned {
                Ok(handle) => pool.threads.push(handle),
                Err(e) => {
                    tracing::error!(error = %e, index, "failed to spawn resolver worker");
                    pool.shutdown();
                    return Err(NetError::InsufficientResources);
                }
            }
        }

        tracing::debug!(threads = thread_count, "resolver worker pool started");
        Ok(pool)
    }

    /// Queues a job. Hands the job back if the pool is shutting down.
    pub(crate) fn execute(&self, job: Job) -> Result<(), Job> {
        match &self.sender {
            Some(sender) => sender.send(job).map_err(|e| e.0),
            None => Err(job),
        }
    }

    pub(crate) fn thread_count(&self) -> usize {
        self.threads.len()
    }

    /// Releases the guard and waits for every worker to finish its queue.
    pub(crate) fn shutdown(&mut self) {
        self.sender.take();

        for handle in self.threads.drain(..) {
            let name = handle.thread().name().map(str::to_owned);
            if handle.join().is_err() {
                tracing::error!(thread = ?name, "resolver worker panicked");
            }
        }
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn worker_loop(receiver: SharedReceiver) {
    loop {
        // Only one idle worker waits on the channel at a time; the rest wait
        // on the lock. The lock is released before the job runs.
        let job = receiver
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .blocking_recv();

        match job {
            Some(job) => job(),
            None => break,
        }
    }
    tracing::trace!("resolver worker exiting");
}
